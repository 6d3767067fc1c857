//! Verified command types and handler signatures.
//!
//! A [`VerifiedCmd`] is the result of matching a raw input line against a
//! [`CmdSpec`](super::CmdSpec). It is produced per parse call and consumed
//! immediately by dispatch.

use bevy::prelude::*;

/// A command argument that was validated against an argument spec.
///
/// Positional arguments carry an empty label; optional arguments carry their
/// spec's canonical label (never the abbreviation the user typed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifiedArg {
    /// The canonical label (empty for positional arguments).
    pub label: String,
    /// The matched values, separator-stripped, in input order.
    pub values: Vec<String>,
}

impl VerifiedArg {
    /// Create a positional argument from its values.
    pub fn positional<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: String::new(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a labeled argument.
    pub fn labeled<I, S>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a flag argument (label, no values).
    pub fn flag(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: Vec::new(),
        }
    }
}

/// A command that was validated against its spec and is ready for dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifiedCmd {
    /// The canonical command name.
    pub name: String,
    /// Validated arguments, positional first, then optional in input order.
    pub args: Vec<VerifiedArg>,
}

/// The output lines of an executed command.
pub type CmdOutput = Vec<String>;

/// Handler function executed when a command's input validated.
///
/// Handlers receive the verified command and mutable access to the Bevy
/// world, and return the lines to print to the console.
pub type CmdHandler = Box<dyn Fn(&VerifiedCmd, &mut World) -> CmdOutput + Send + Sync>;
