//! Command registry and handler storage.

use std::collections::{BTreeMap, HashMap};

use bevy::prelude::*;

use super::cmd::CmdHandler;
use super::cmdspec::CmdSpec;

/// Central registry of command specs.
///
/// Specs are keyed by canonical name and iterated in name order, so help
/// listings are stable. Handlers live separately in [`CmdHandlers`].
///
/// # Examples
///
/// ```ignore
/// let mut registry = CmdRegistry::new();
/// registry.add_spec(CmdSpec::new("exit", "x", "Closes the console.", vec![], ""));
/// assert!(registry.contains("exit"));
/// ```
#[derive(Resource, Default)]
pub struct CmdRegistry {
    specs: BTreeMap<Box<str>, CmdSpec>,
}

impl CmdRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command spec.
    ///
    /// Invalid (nameless) specs are rejected. A spec whose canonical name is
    /// already registered is rejected too; the first registration wins and a
    /// warning is logged.
    ///
    /// Returns `true` if the spec was newly registered.
    pub fn add_spec(&mut self, spec: CmdSpec) -> bool {
        if !spec.is_valid() {
            return false;
        }

        let name: Box<str> = spec.name().into();
        if self.specs.contains_key(&name) {
            bevy::log::warn!("Console: Ignoring duplicate command '{}'", name);
            return false;
        }

        self.specs.insert(name, spec);
        true
    }

    /// Check if a command with a given canonical name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// Get the number of registered commands.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterate over all specs in canonical-name order.
    pub fn specs(&self) -> impl Iterator<Item = &CmdSpec> {
        self.specs.values()
    }

    /// Find the spec whose name or abbreviation matches a candidate.
    pub fn find_spec(&self, name: &str) -> Option<&CmdSpec> {
        self.specs.values().find(|spec| spec.matches_name(name))
    }

    /// Get the help text of a command, one line per entry.
    ///
    /// The name may be the canonical name or the abbreviation. An unknown
    /// name yields no lines.
    pub fn command_help(&self, name: &str) -> Vec<String> {
        let Some(spec) = self.find_spec(name) else {
            return Vec::new();
        };
        spec.help().lines().map(str::to_string).collect()
    }
}

/// Stores command handlers separately from their specs.
///
/// This separation allows handlers to access `World` (including
/// `CmdRegistry`) without borrow conflicts.
#[derive(Resource, Default)]
pub struct CmdHandlers {
    handlers: HashMap<Box<str>, CmdHandler>,
}

impl CmdHandlers {
    /// Create a new empty handler storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a command's canonical name.
    pub fn register(&mut self, name: impl Into<Box<str>>, handler: CmdHandler) {
        self.handlers.insert(name.into(), handler);
    }

    /// Get a handler by name.
    pub fn get(&self, name: &str) -> Option<&CmdHandler> {
        self.handlers.get(name)
    }

    /// Take a handler temporarily for execution.
    ///
    /// Use `put` to return the handler after execution.
    pub fn take(&mut self, name: &str) -> Option<CmdHandler> {
        self.handlers.remove(name)
    }

    /// Put a handler back after temporary removal.
    pub fn put(&mut self, name: &str, handler: CmdHandler) {
        self.handlers.insert(name.into(), handler);
    }
}
