//! Argument specifications and the per-argument matcher.

use super::cmd::VerifiedArg;
use super::label::Label;
use super::parser::{is_arg_label, strip_arg_separators};

/// Value-count contract of an argument spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCount {
    /// Exactly this many values.
    Exact(usize),
    /// Any number of values, including none.
    ZeroOrMore,
    /// At least one value.
    OneOrMore,
}

impl ValueCount {
    /// Check if more values may be consumed after `matched` values.
    fn can_match_more(&self, matched: usize) -> bool {
        match self {
            ValueCount::Exact(n) => matched < *n,
            ValueCount::ZeroOrMore | ValueCount::OneOrMore => true,
        }
    }

    /// Check if `matched` values satisfy the contract's minimum.
    fn is_satisfied_by(&self, matched: usize) -> bool {
        match self {
            ValueCount::Exact(n) => matched == *n,
            ValueCount::ZeroOrMore => true,
            ValueCount::OneOrMore => matched >= 1,
        }
    }

    /// Check if the contract admits at least one value.
    fn allows_values(&self) -> bool {
        !matches!(self, ValueCount::Exact(0))
    }
}

impl From<usize> for ValueCount {
    fn from(n: usize) -> Self {
        ValueCount::Exact(n)
    }
}

/// Specification for one command argument slot.
///
/// Argument kinds:
/// - *Positional*: unlabeled, required, a fixed or open-ended run of values.
///   Positional specs must come before any optional specs and their order
///   matters.
/// - *Optional*: a dash-prefixed label, possibly followed by values. May be
///   omitted; order among optional arguments does not matter.
/// - *Flag*: an optional argument with zero values; presence/absence only.
///
/// # Examples
///
/// ```
/// use bevy_ccon::core::{ArgSpec, ValueCount};
///
/// let pos = ArgSpec::positional(2).description("input file and line");
/// let size = ArgSpec::optional("size", 1).abbrev("s");
/// let scan = ArgSpec::flag("scan");
///
/// assert!(pos.is_required());
/// assert!(!size.is_required());
/// assert!(scan.match_label("-scan"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgSpec {
    label: Label,
    count: Option<ValueCount>,
    description: String,
}

impl ArgSpec {
    /// Create a spec for a required, positional argument.
    pub fn positional(count: impl Into<ValueCount>) -> Self {
        Self {
            label: Label::default(),
            count: Some(count.into()),
            description: String::new(),
        }
    }

    /// Create a spec for an optional, labeled argument.
    ///
    /// The label is lowercased at construction.
    pub fn optional(label: impl Into<String>, count: impl Into<ValueCount>) -> Self {
        Self {
            label: Label::new(label.into().to_lowercase(), ""),
            count: Some(count.into()),
            description: String::new(),
        }
    }

    /// Create a spec for a flag argument (a labeled argument without values).
    pub fn flag(label: impl Into<String>) -> Self {
        Self::optional(label, 0usize)
    }

    /// Set the abbreviation (lowercased at construction).
    pub fn abbrev(mut self, abbrev: impl Into<String>) -> Self {
        self.label = Label::new(self.label.name(), abbrev.into().to_lowercase());
        self
    }

    /// Set the description shown in help text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check if the spec describes anything at all.
    ///
    /// An unlabeled spec with zero values is empty; it produces no help text
    /// and must never be matched against input.
    pub fn is_valid(&self) -> bool {
        self.has_label() || self.count().allows_values()
    }

    /// Check if the spec describes a required (positional) argument.
    pub fn is_required(&self) -> bool {
        !self.has_label() && self.count().allows_values()
    }

    /// Check if the spec carries a label.
    #[inline]
    pub fn has_label(&self) -> bool {
        self.label.is_present()
    }

    /// Get the canonical label (empty for positional specs).
    #[inline]
    pub fn label(&self) -> &str {
        self.label.name()
    }

    /// Get the value-count contract.
    #[inline]
    pub fn count(&self) -> ValueCount {
        self.count.unwrap_or(ValueCount::Exact(0))
    }

    /// Check if a candidate token names this spec's label.
    ///
    /// Leading dash separators are stripped from the candidate and the
    /// comparison is case-insensitive against the label or its abbreviation.
    pub fn match_label(&self, candidate: &str) -> bool {
        self.label.matches(strip_arg_separators(candidate))
    }

    /// Render one help line, e.g. `"Optional: -size/-s + 1 value -- ..."`.
    ///
    /// Returns an empty string for an empty spec.
    pub fn help(&self, indent: &str) -> String {
        if !self.is_valid() {
            return String::new();
        }

        let mut help = String::from(indent);
        help.push_str(if self.is_required() { "Required:" } else { "Optional:" });

        if self.has_label() {
            help.push_str(" -");
            help.push_str(self.label.name());
            if self.label.has_abbreviation() {
                help.push_str("/-");
                help.push_str(self.label.abbreviation());
            }
        }

        if self.count().allows_values() {
            if self.has_label() {
                help.push_str(" +");
            }
            help.push(' ');
            let singular = match self.count() {
                ValueCount::Exact(n) => {
                    help.push_str(&n.to_string());
                    n == 1
                }
                ValueCount::ZeroOrMore => {
                    help.push_str("zero or more");
                    false
                }
                ValueCount::OneOrMore => {
                    help.push_str("one or more");
                    false
                }
            };
            help.push_str(if singular { " value" } else { " values" });
        }

        if !self.description.is_empty() {
            help.push_str(" -- ");
            help.push_str(&self.description);
        }

        help
    }

    /// Match this spec against tokens starting at `pos`.
    ///
    /// On success returns the verified argument and the cursor position past
    /// the consumed tokens. On failure returns `None` and the caller keeps
    /// its original cursor, so the same tokens can be retried against a
    /// different spec.
    ///
    /// Value consumption is greedy: tokens are consumed until the count
    /// contract is full, the next token looks like an argument label, or the
    /// tokens are exhausted. If the contract's minimum is not met the whole
    /// match fails, including any consumed label token.
    pub fn match_tokens(&self, tokens: &[&str], pos: usize) -> Option<(VerifiedArg, usize)> {
        if pos >= tokens.len() {
            // Zero matched values can be valid for unlabeled 'zero or more' specs.
            if !self.has_label() && self.count().is_satisfied_by(0) {
                return Some((VerifiedArg::default(), pos));
            }
            return None;
        }

        let mut cursor = pos;
        let mut matched = VerifiedArg::default();

        if self.has_label() {
            let token = tokens[cursor];
            if !is_arg_label(token) || !self.match_label(strip_arg_separators(token)) {
                return None;
            }
            matched.label = self.label.name().to_string();
            cursor += 1;
        }

        while cursor < tokens.len() && self.count().can_match_more(matched.values.len()) {
            let token = tokens[cursor];
            // Stop at the next label; it belongs to a later spec.
            if is_arg_label(token) {
                break;
            }
            matched.values.push(strip_arg_separators(token).to_string());
            cursor += 1;
        }

        if !self.count().is_satisfied_by(matched.values.len()) {
            return None;
        }

        Some((matched, cursor))
    }
}
