//! Console messages for communication between layers.
//!
//! Messages are the primary mechanism for:
//! - UI -> Core: Command input
//! - Core -> UI: Output lines, visibility changes

use bevy::prelude::*;

/// Message sent when a command line is submitted to the console.
///
/// The console system will parse and execute this line.
///
/// # Examples
///
/// ```ignore
/// fn submit_command(mut input: MessageWriter<ConsoleInputEvent>) {
///     input.write(ConsoleInputEvent::new(":fontsize 14"));
/// }
/// ```
#[derive(Message, Debug, Clone)]
pub struct ConsoleInputEvent {
    /// The raw command line to execute.
    pub command: String,
}

impl ConsoleInputEvent {
    /// Create a new input message.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

/// Message sent when output should be displayed in the console.
///
/// # Examples
///
/// ```ignore
/// fn log_to_console(mut output: MessageWriter<ConsoleOutputEvent>) {
///     output.write(ConsoleOutputEvent::info("Game started"));
///     output.write(ConsoleOutputEvent::error("Failed to load config"));
/// }
/// ```
#[derive(Message, Debug, Clone)]
pub struct ConsoleOutputEvent {
    /// The message text.
    pub message: String,
    /// The log level/type.
    pub level: ConsoleOutputLevel,
}

/// Log level for console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleOutputLevel {
    /// Debug information (gray).
    Debug,
    /// General information (white).
    #[default]
    Info,
    /// Warning (yellow).
    Warn,
    /// Error (red).
    Error,
    /// Command echo (shows the line that was executed).
    Command,
    /// Command result/response.
    Result,
}

impl ConsoleOutputEvent {
    /// Create a new output message.
    pub fn new(level: ConsoleOutputLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    /// Create a debug message.
    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Debug, message)
    }

    /// Create an info message.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Info, message)
    }

    /// Create a warning message.
    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Warn, message)
    }

    /// Create an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Error, message)
    }

    /// Create a command echo message.
    pub fn command(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Command, message)
    }

    /// Create a result message.
    pub fn result(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Result, message)
    }
}

/// Message sent when the console is opened or closed.
#[derive(Message, Debug, Clone, Copy)]
pub struct ConsoleToggleEvent {
    /// Whether the console is now open.
    pub open: bool,
}

impl ConsoleToggleEvent {
    /// Create a message for opening the console.
    pub fn opened() -> Self {
        Self { open: true }
    }

    /// Create a message for closing the console.
    pub fn closed() -> Self {
        Self { open: false }
    }
}

/// Message requesting the console to clear its output buffer.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ConsoleClearEvent;

/// Plugin that registers all console messages.
pub struct ConsoleEventsPlugin;

impl Plugin for ConsoleEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ConsoleInputEvent>()
            .add_message::<ConsoleOutputEvent>()
            .add_message::<ConsoleToggleEvent>()
            .add_message::<ConsoleClearEvent>();
    }
}
