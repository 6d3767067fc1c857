//! Unified console API for convenient access.
//!
//! The [`Console`] system parameter combines [`CmdRegistry`] and
//! [`CmdHandlers`] into a single ergonomic API for registering commands.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::cmd::CmdHandler;
use super::cmdspec::CmdSpec;
use super::registry::{CmdHandlers, CmdRegistry};

/// Unified console system parameter.
///
/// # Examples
///
/// ```ignore
/// fn setup_console(mut console: Console) {
///     console.register_command(
///         CmdSpec::new("noclip", "nc", "Toggles noclip mode.", vec![], ""),
///         Box::new(|_, _| vec!["Noclip toggled.".to_string()]),
///     );
/// }
/// ```
#[derive(SystemParam)]
pub struct Console<'w> {
    registry: ResMut<'w, CmdRegistry>,
    handlers: ResMut<'w, CmdHandlers>,
}

impl Console<'_> {
    /// Register a command spec together with its handler.
    ///
    /// Returns `true` if the command was newly registered. On a duplicate
    /// name the first registration wins and the new handler is dropped.
    pub fn register_command(&mut self, spec: CmdSpec, handler: CmdHandler) -> bool {
        let name: Box<str> = spec.name().into();
        if !self.registry.add_spec(spec) {
            return false;
        }
        self.handlers.register(name, handler);
        true
    }

    /// Check if a command with a given canonical name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Get the number of registered commands.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Iterate over all specs in canonical-name order.
    pub fn specs(&self) -> impl Iterator<Item = &CmdSpec> {
        self.registry.specs()
    }

    /// Get the help text of a command, one line per entry.
    pub fn command_help(&self, name: &str) -> Vec<String> {
        self.registry.command_help(name)
    }

    /// Get read-only access to the underlying registry.
    pub fn registry(&self) -> &CmdRegistry {
        &self.registry
    }
}
