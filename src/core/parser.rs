//! Token grammar and accessor helpers for parsed commands.
//!
//! The token grammar is deliberately small: a raw line splits at whitespace
//! (no quoting), a token is an argument label iff it starts with one or two
//! dashes after any leading spaces, and separator stripping removes all
//! leading dashes.

use super::cmdspec::help_arg_spec;
use super::cmd::VerifiedArg;

/// Split a raw command line into tokens.
///
/// Tokens are whitespace-delimited words. There is no quoting or escaping.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Check if a token is an argument label.
///
/// A label has exactly one or two leading dashes, after any leading spaces.
///
/// # Examples
///
/// ```
/// use bevy_ccon::core::is_arg_label;
///
/// assert!(is_arg_label("-size"));
/// assert!(is_arg_label("--size"));
/// assert!(!is_arg_label("size"));
/// assert!(!is_arg_label("---size"));
/// ```
pub fn is_arg_label(token: &str) -> bool {
    let trimmed = token.trim_start_matches(' ');
    let num_dashes = trimmed.len() - trimmed.trim_start_matches('-').len();
    num_dashes == 1 || num_dashes == 2
}

/// Strip leading argument separators (dashes) from a token.
pub fn strip_arg_separators(token: &str) -> &str {
    token.trim_start_matches('-')
}

/// Check if raw argument tokens contain the reserved help parameter.
pub fn contains_help_token(tokens: &[&str]) -> bool {
    tokens
        .iter()
        .any(|token| help_arg_spec().match_label(strip_arg_separators(token)))
}

/// Check if verified arguments contain the reserved help parameter.
pub fn contains_help_arg(args: &[VerifiedArg]) -> bool {
    args.iter()
        .any(|arg| help_arg_spec().match_label(strip_arg_separators(&arg.label)))
}

/// Find an argument with a given label.
///
/// Labels are compared after separator stripping, so `"scan"` and `"-scan"`
/// find the same argument.
pub fn find_arg_with_label<'a>(args: &'a [VerifiedArg], label: &str) -> Option<&'a VerifiedArg> {
    let stripped = strip_arg_separators(label);
    args.iter()
        .find(|arg| strip_arg_separators(&arg.label) == stripped)
}

/// Check if an argument with a given label is present.
pub fn have_arg_with_label(args: &[VerifiedArg], label: &str) -> bool {
    find_arg_with_label(args, label).is_some()
}

/// Look up an integer argument by label.
///
/// Returns `default` if the argument is absent or its first value does not
/// parse as an integer.
pub fn parse_int_arg(args: &[VerifiedArg], label: &str, default: i32) -> i32 {
    find_arg_with_label(args, label)
        .and_then(|arg| arg.values.first())
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// An RGB color as parsed from a 6-hex-digit command argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color from a 6-hex-digit `RRGGBB` string (no `#` prefix).
    ///
    /// Hex digits are case-insensitive. Any other length or a non-hex digit
    /// yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

impl From<Rgb> for bevy::color::Color {
    fn from(rgb: Rgb) -> Self {
        bevy::color::Color::srgb_u8(rgb.r, rgb.g, rgb.b)
    }
}

/// Look up a color argument by label.
///
/// The argument must carry exactly one value, a 6-hex-digit `RRGGBB` string.
/// Returns `default` if the argument is absent or its value is malformed.
pub fn parse_color_arg(args: &[VerifiedArg], label: &str, default: Rgb) -> Rgb {
    let Some(arg) = find_arg_with_label(args, label) else {
        return default;
    };
    if arg.values.len() != 1 {
        return default;
    }
    Rgb::from_hex(&arg.values[0]).unwrap_or(default)
}
