//! A spec-driven, embeddable developer console for Bevy.
//!
//! Commands are described by [`CmdSpec`]s: a name with an optional
//! abbreviation, positional and labeled arguments, and generated help text.
//! Input lines are matched against the registered specs and dispatched to
//! handler closures; handlers return the lines to print.
//!
//! - **CmdSpec/ArgSpec**: Declarative command and argument specifications
//! - **CmdRegistry**: Central registry of specs, ordered by name
//! - **Console**: Unified system parameter for registering commands
//! - **Built-ins**: `:colors`, `:fontsize`, `exit`, `help`
//!
//! Every command accepts the reserved `-help`/`-?` parameter, which prints
//! the command's help instead of executing it.
//!
//! # Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_ccon::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(ConsolePlugin)
//!         .add_systems(Startup, setup_console)
//!         .run();
//! }
//!
//! fn setup_console(mut console: Console) {
//!     console.register_command(
//!         CmdSpec::new(
//!             "greet",
//!             "g",
//!             "greets someone",
//!             vec![ArgSpec::positional(1).description("who to greet")],
//!             "",
//!         ),
//!         Box::new(|cmd, _world| vec![format!("Hello, {}!", cmd.args[0].values[0])]),
//!     );
//! }
//! ```

use bevy::prelude::*;

pub mod config;
pub mod core;

pub use config::{ConsoleConfig, DEFAULT_FONT_SIZE};
pub use crate::core::{
    ArgSpec, CmdHandler, CmdHandlers, CmdMatch, CmdOutput, CmdRegistry, CmdSpec, Console,
    ConsoleClearEvent, ConsoleEventsPlugin, ConsoleInputEvent, ConsoleOutputEvent,
    ConsoleOutputLevel, ConsoleToggleEvent, Label, Rgb, ValueCount, VerifiedArg, VerifiedCmd,
    help_arg_spec,
};

use crate::core::{contains_help_arg, have_arg_with_label, parse_color_arg, parse_int_arg};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::ConsoleConfig;
    pub use crate::core::{
        ArgSpec, CmdRegistry, CmdSpec, Console, ConsoleInputEvent, ConsoleOutputEvent,
        ConsoleOutputLevel, ConsoleToggleEvent, ValueCount, VerifiedArg, VerifiedCmd,
        find_arg_with_label, have_arg_with_label, parse_color_arg, parse_int_arg,
    };
    pub use crate::ConsolePlugin;
}

/// Main console plugin.
///
/// Registers the command registry, the console messages, the built-in
/// commands and the input-processing pipeline.
#[derive(Default)]
pub struct ConsolePlugin;

impl Plugin for ConsolePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CmdRegistry>()
            .init_resource::<CmdHandlers>()
            .init_resource::<PendingCommands>()
            .init_resource::<ConsoleConfig>()
            .add_plugins(ConsoleEventsPlugin);

        app.add_systems(Startup, register_builtin_commands);

        // Three-stage pipeline:
        // 1. parse_console_input: Read input messages, echo, queue raw lines
        // 2. execute_pending_commands: Match and execute with exclusive World access
        // 3. send_pending_outputs: Send output messages
        app.add_systems(
            Update,
            (
                parse_console_input,
                execute_pending_commands,
                send_pending_outputs,
            )
                .chain(),
        );
    }
}

/// Resource that holds pending command executions.
#[derive(Resource, Default)]
struct PendingCommands {
    /// Raw input lines waiting for execution.
    queue: Vec<String>,
    /// Output lines waiting to be sent.
    outputs: Vec<ConsoleOutputEvent>,
    /// Set by the `exit` command; flushed as a close toggle.
    close_console: bool,
}

/// System that echoes console input and queues it for execution.
fn parse_console_input(
    mut input_events: MessageReader<ConsoleInputEvent>,
    mut pending: ResMut<PendingCommands>,
) {
    for event in input_events.read() {
        let line = event.command.trim();
        // No input. Output nothing.
        if line.is_empty() {
            continue;
        }

        pending
            .outputs
            .push(ConsoleOutputEvent::command(format!("$ {}", line)));
        pending.queue.push(line.to_string());
    }
}

/// Exclusive system that executes queued command lines with full World access.
fn execute_pending_commands(world: &mut World) {
    let mut pending = world.resource_mut::<PendingCommands>();
    let queue = std::mem::take(&mut pending.queue);
    let mut outputs = std::mem::take(&mut pending.outputs);
    drop(pending);

    if queue.is_empty() && outputs.is_empty() {
        return;
    }

    for line in queue {
        let cmd_match = {
            let registry = world.resource::<CmdRegistry>();
            let mut result = CmdMatch::NoMatch;
            for spec in registry.specs() {
                result = spec.match_input(&line);
                if result.is_matching() {
                    break;
                }
            }
            result
        };

        match cmd_match {
            CmdMatch::Matched(cmd) => {
                if contains_help_arg(&cmd.args) {
                    let help = world.resource::<CmdRegistry>().command_help(&cmd.name);
                    outputs.extend(help.into_iter().map(ConsoleOutputEvent::result));
                } else {
                    outputs.extend(execute_command(world, &cmd));
                }
            }
            CmdMatch::BadArgs => {
                outputs.push(ConsoleOutputEvent::error("Command syntax error."));
            }
            CmdMatch::NoMatch => {
                outputs.push(ConsoleOutputEvent::error("Command not found."));
            }
        }
    }

    let mut pending = world.resource_mut::<PendingCommands>();
    pending.outputs = outputs;
}

/// Execute a verified command through its registered handler.
fn execute_command(world: &mut World, cmd: &VerifiedCmd) -> Vec<ConsoleOutputEvent> {
    let result = world.resource_scope(|world, mut handlers: Mut<CmdHandlers>| {
        let Some(handler) = handlers.take(&cmd.name) else {
            return None;
        };

        // Execute with panic safety and always put the handler back.
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            handler(cmd, world)
        }));
        handlers.put(&cmd.name, handler);

        Some(result)
    });

    match result {
        Some(Ok(lines)) => split_at_newlines(&lines)
            .into_iter()
            .map(ConsoleOutputEvent::result)
            .collect(),
        Some(Err(panic_info)) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            vec![ConsoleOutputEvent::error(format!(
                "Command '{}' panicked: {}",
                cmd.name, panic_msg
            ))]
        }
        // The name matched a registered spec, so a missing handler is an
        // internal inconsistency.
        None => vec![ConsoleOutputEvent::error(
            "Internal error. Failed to instantiate command.",
        )],
    }
}

/// System that sends queued output messages.
fn send_pending_outputs(
    mut pending: ResMut<PendingCommands>,
    mut output_events: MessageWriter<ConsoleOutputEvent>,
    mut toggle_events: MessageWriter<ConsoleToggleEvent>,
) {
    for output in pending.outputs.drain(..) {
        output_events.write(output);
    }
    if pending.close_console {
        pending.close_console = false;
        toggle_events.write(ConsoleToggleEvent::closed());
    }
}

/// Split output lines at embedded newlines.
fn split_at_newlines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| line.split('\n'))
        .map(str::to_string)
        .collect()
}

/// Register built-in console commands.
fn register_builtin_commands(mut console: Console) {
    // :colors - change the console colors
    console.register_command(
        CmdSpec::new(
            ":colors",
            ":c",
            "sets the colors for the console",
            vec![
                ArgSpec::optional("background", 1)
                    .abbrev("b")
                    .description("background color (rrggbb)"),
                ArgSpec::optional("output", 1)
                    .abbrev("o")
                    .description("output text color (rrggbb)"),
                ArgSpec::optional("input", 1)
                    .abbrev("i")
                    .description("input text color (rrggbb)"),
                ArgSpec::flag("defaults")
                    .abbrev("d")
                    .description("reset all colors to defaults"),
            ],
            "",
        ),
        Box::new(|cmd, world| {
            let mut config = world.resource_mut::<ConsoleConfig>();

            if have_arg_with_label(&cmd.args, "background") {
                config.background = parse_color_arg(&cmd.args, "background", config.background);
            }
            if have_arg_with_label(&cmd.args, "output") {
                config.output_text = parse_color_arg(&cmd.args, "output", config.output_text);
            }
            if have_arg_with_label(&cmd.args, "input") {
                config.input_text = parse_color_arg(&cmd.args, "input", config.input_text);
            }
            if have_arg_with_label(&cmd.args, "defaults") {
                config.reset_colors();
            }

            Vec::new()
        }),
    );

    // :fontsize - change the console font size
    console.register_command(
        CmdSpec::new(
            ":fontsize",
            ":fs",
            "sets the font size for the console",
            vec![
                ArgSpec::positional(1)
                    .description("font size in points; use 0 to reset to default size"),
            ],
            "",
        ),
        Box::new(|cmd, world| {
            let mut font_size = parse_int_arg(&cmd.args, "", 0);
            if font_size < 0 {
                return vec!["Command arguments: Font size has to be positive.".to_string()];
            }
            if font_size == 0 {
                font_size = DEFAULT_FONT_SIZE;
            }

            world.resource_mut::<ConsoleConfig>().font_size = font_size;
            Vec::new()
        }),
    );

    // exit - close the console
    console.register_command(
        CmdSpec::new("exit", "x", "exits the console", vec![], ""),
        Box::new(|_cmd, world| {
            world.resource_mut::<PendingCommands>().close_console = true;
            Vec::new()
        }),
    );

    // help - list all commands
    console.register_command(
        CmdSpec::new("help", "?", "lists all commands", vec![], ""),
        Box::new(|_cmd, world| {
            let registry = world.resource::<CmdRegistry>();

            let mut out = vec!["Commands:".to_string()];
            for spec in registry.specs() {
                out.push(format!("  {} - {}", spec.name(), spec.description()));
            }
            out
        }),
    );
}
