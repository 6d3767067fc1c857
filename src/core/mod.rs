//! Core command specification and parsing types.
//!
//! This module provides the fundamental building blocks:
//! - [`Console`] - Unified system parameter for registering commands
//! - [`CmdSpec`] - Command specifications with labeled/positional arguments
//! - [`ArgSpec`] - Per-argument contracts and matching
//! - [`CmdRegistry`] - Central registry of command specs
//! - [`tokenize`] - Whitespace command tokenizer and accessor helpers
//! - Messages for communication between layers

mod argspec;
mod cmd;
mod cmdspec;
mod console;
mod events;
mod label;
mod parser;
mod registry;

pub use argspec::{ArgSpec, ValueCount};
pub use cmd::{CmdHandler, CmdOutput, VerifiedArg, VerifiedCmd};
pub use cmdspec::{CmdMatch, CmdSpec, help_arg_spec};
pub use console::Console;
pub use events::{
    ConsoleClearEvent, ConsoleEventsPlugin, ConsoleInputEvent, ConsoleOutputEvent,
    ConsoleOutputLevel, ConsoleToggleEvent,
};
pub use label::Label;
pub use parser::{
    Rgb, contains_help_arg, contains_help_token, find_arg_with_label, have_arg_with_label,
    is_arg_label, parse_color_arg, parse_int_arg, strip_arg_separators, tokenize,
};
pub use registry::{CmdHandlers, CmdRegistry};
