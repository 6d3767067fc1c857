//! Command specifications and the top-level input matcher.

use std::sync::LazyLock;

use super::argspec::ArgSpec;
use super::cmd::{VerifiedArg, VerifiedCmd};
use super::label::Label;
use super::parser::{contains_help_token, tokenize};

/// The reserved help parameter, accepted by every command.
///
/// Typing `-help` or `-?` after a command name short-circuits argument
/// matching and requests the command's help text instead.
pub fn help_arg_spec() -> &'static ArgSpec {
    static HELP_ARG_SPEC: LazyLock<ArgSpec> = LazyLock::new(|| {
        ArgSpec::flag("help")
            .abbrev("?")
            .description("Displays help information for the command.")
    });
    &HELP_ARG_SPEC
}

/// Outcome of matching a raw input line against a [`CmdSpec`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CmdMatch {
    /// The input does not name this command.
    #[default]
    NoMatch,
    /// The input names this command but its arguments do not fit the spec.
    BadArgs,
    /// The input fully matched; the verified command is ready for dispatch.
    Matched(VerifiedCmd),
}

impl CmdMatch {
    /// Check if the input named this command, valid arguments or not.
    pub fn is_matching(&self) -> bool {
        !matches!(self, CmdMatch::NoMatch)
    }

    /// Check if the input fully matched, arguments included.
    pub fn args_valid(&self) -> bool {
        matches!(self, CmdMatch::Matched(_))
    }
}

/// Specification of a console command.
///
/// A spec describes the command's name (with an optional abbreviation), its
/// argument slots, and the text shown by its help. Matching an input line
/// against a spec yields a [`CmdMatch`].
///
/// Required (positional) arguments are matched in declared order before any
/// optional arguments; optional arguments may appear in any order.
///
/// # Examples
///
/// ```
/// use bevy_ccon::core::{ArgSpec, CmdSpec};
///
/// let spec = CmdSpec::new(
///     "lookup",
///     "lu",
///     "Looks up a symbol.",
///     vec![ArgSpec::positional(1), ArgSpec::flag("verbose").abbrev("v")],
///     "",
/// );
/// assert!(spec.match_input("LOOKUP main -v").args_valid());
/// assert!(!spec.match_input("lookup").args_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdSpec {
    name: Label,
    description: String,
    notes: String,
    arg_specs: Vec<ArgSpec>,
}

impl CmdSpec {
    /// Create a command spec. Name and abbreviation are lowercased.
    pub fn new(
        name: impl Into<String>,
        abbrev: impl Into<String>,
        description: impl Into<String>,
        arg_specs: Vec<ArgSpec>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: Label::new(name.into().to_lowercase(), abbrev.into().to_lowercase()),
            description: description.into(),
            notes: notes.into(),
            arg_specs,
        }
    }

    /// Check if the spec names a command. Empty specs match nothing.
    pub fn is_valid(&self) -> bool {
        self.name.is_present()
    }

    /// Get the canonical command name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.name()
    }

    /// Get the command's abbreviation (empty if none).
    #[inline]
    pub fn abbreviation(&self) -> &str {
        self.name.abbreviation()
    }

    /// Get the command's description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check if a candidate names this command (name or abbreviation,
    /// case-insensitive).
    pub fn matches_name(&self, candidate: &str) -> bool {
        self.name.matches(candidate)
    }

    /// Get the command's argument specs in declared order.
    #[inline]
    pub fn arg_specs(&self) -> &[ArgSpec] {
        &self.arg_specs
    }

    /// Check if the spec declares an argument with a given label.
    pub fn has_arg_spec(&self, label: &str) -> bool {
        self.arg_specs.iter().any(|spec| spec.match_label(label))
    }

    /// Render the command's multi-line help text.
    ///
    /// Sections are Name, Abbreviation, Description, Arguments and Notes,
    /// with `<none>` standing in for empty sections. Empty specs render
    /// nothing.
    pub fn help(&self) -> String {
        if !self.is_valid() {
            return String::new();
        }

        const INDENT: &str = "  ";
        let unavailable = format!("{INDENT}<none>\n");

        let mut help = String::new();
        help.push_str("Name:\n");
        help.push_str(&format!("{INDENT}{}\n", self.name.name()));

        help.push_str("Abbreviation:\n");
        if self.name.has_abbreviation() {
            help.push_str(&format!("{INDENT}{}\n", self.name.abbreviation()));
        } else {
            help.push_str(&unavailable);
        }

        help.push_str("Description:\n");
        if !self.description.is_empty() {
            help.push_str(&format!("{INDENT}{}\n", self.description));
        } else {
            help.push_str(&unavailable);
        }

        help.push_str("Arguments:\n");
        let arg_lines: Vec<String> = self
            .arg_specs
            .iter()
            .map(|spec| spec.help(INDENT))
            .filter(|line| !line.is_empty())
            .collect();
        if !arg_lines.is_empty() {
            for line in arg_lines {
                help.push_str(&line);
                help.push('\n');
            }
        } else {
            help.push_str(&unavailable);
        }

        help.push_str("Notes:\n");
        if !self.notes.is_empty() {
            for line in self.notes.split('\n') {
                help.push_str(&format!("{INDENT}{line}\n"));
            }
        } else {
            help.push_str(&unavailable);
        }

        help
    }

    /// Match a raw input line against this spec.
    ///
    /// The first token must name the command; the remaining tokens must
    /// satisfy the argument specs with nothing left over. A help token among
    /// the arguments short-circuits matching and yields a verified command
    /// carrying only the help flag.
    pub fn match_input(&self, input: &str) -> CmdMatch {
        if !self.is_valid() {
            return CmdMatch::NoMatch;
        }

        let tokens = tokenize(input);
        let Some((&cmd_name, arg_tokens)) = tokens.split_first() else {
            return CmdMatch::NoMatch;
        };
        if !self.matches_name(cmd_name) {
            return CmdMatch::NoMatch;
        }

        match self.match_args(arg_tokens) {
            Some(args) => CmdMatch::Matched(VerifiedCmd {
                name: self.name().to_string(),
                args,
            }),
            None => CmdMatch::BadArgs,
        }
    }

    /// Match argument tokens against the argument specs.
    ///
    /// Required specs are matched first in declared order, each one
    /// mandatory. Then the remaining tokens are matched against the optional
    /// specs in any order until the tokens are exhausted; a token that fits
    /// no optional spec fails the whole match.
    fn match_args(&self, tokens: &[&str]) -> Option<Vec<VerifiedArg>> {
        if contains_help_token(tokens) {
            return Some(vec![VerifiedArg::flag(help_arg_spec().label())]);
        }

        // Empty specs describe nothing and never match input.
        let required = self.arg_specs.iter().filter(|s| s.is_valid() && s.is_required());
        let optional: Vec<&ArgSpec> = self
            .arg_specs
            .iter()
            .filter(|s| s.is_valid() && !s.is_required())
            .collect();

        let mut verified = Vec::new();
        let mut cursor = 0;

        for spec in required {
            let (arg, next) = spec.match_tokens(tokens, cursor)?;
            verified.push(arg);
            cursor = next;
        }

        while cursor < tokens.len() {
            let matched = optional
                .iter()
                .find_map(|spec| spec.match_tokens(tokens, cursor));
            let (arg, next) = matched?;
            verified.push(arg);
            cursor = next;
        }

        Some(verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::argspec::ValueCount;

    fn test_spec(arg_specs: Vec<ArgSpec>) -> CmdSpec {
        CmdSpec::new("test", "t", "test command", arg_specs, "")
    }

    #[test]
    fn test_help_arg_spec() {
        let spec = help_arg_spec();
        assert!(spec.match_label("help"));
        assert!(spec.match_label("-help"));
        assert!(spec.match_label("?"));
        assert!(spec.match_label("-?"));
        assert!(!spec.match_label("h"));
    }

    #[test]
    fn test_default_spec_matches_nothing() {
        let spec = CmdSpec::default();
        assert!(!spec.is_valid());
        assert!(spec.help().is_empty());
        assert_eq!(spec.match_input("test"), CmdMatch::NoMatch);
        assert_eq!(spec.match_input(""), CmdMatch::NoMatch);
    }

    #[test]
    fn test_name_lowercased_at_construction() {
        let spec = CmdSpec::new("TEST", "T", "", vec![], "");
        assert_eq!(spec.name(), "test");
        assert_eq!(spec.abbreviation(), "t");
    }

    #[test]
    fn test_matches_name() {
        let spec = test_spec(vec![]);
        assert!(spec.matches_name("test"));
        assert!(spec.matches_name("TEST"));
        assert!(spec.matches_name("t"));
        assert!(!spec.matches_name("other"));
        assert!(!spec.matches_name(""));
    }

    #[test]
    fn test_has_arg_spec() {
        let spec = test_spec(vec![ArgSpec::flag("myflag")]);
        assert!(spec.has_arg_spec("myflag"));
        assert!(spec.has_arg_spec("-myflag"));
        assert!(spec.has_arg_spec("MYFLAG"));
        assert!(!spec.has_arg_spec("other"));
    }

    #[test]
    fn test_help_sections() {
        let spec = CmdSpec::new(
            "searchablename",
            "qq",
            "searchable description",
            vec![ArgSpec::flag("myflag")],
            "searchable notes",
        );
        let help = spec.help();
        assert!(help.contains("Name:\n  searchablename\n"));
        assert!(help.contains("Abbreviation:\n  qq\n"));
        assert!(help.contains("Description:\n  searchable description\n"));
        assert!(help.contains("myflag"));
        assert!(help.contains("Notes:\n  searchable notes\n"));
    }

    #[test]
    fn test_help_placeholders() {
        let spec = CmdSpec::new("name", "", "", vec![], "");
        let help = spec.help();
        assert!(help.contains("Abbreviation:\n  <none>\n"));
        assert!(help.contains("Description:\n  <none>\n"));
        assert!(help.contains("Arguments:\n  <none>\n"));
        assert!(help.contains("Notes:\n  <none>\n"));
    }

    #[test]
    fn test_help_splits_notes_at_newlines() {
        let spec = CmdSpec::new("name", "", "", vec![], "first\nsecond");
        assert!(spec.help().contains("Notes:\n  first\n  second\n"));
    }

    #[test]
    fn test_match_bare_name() {
        let spec = test_spec(vec![]);
        let matched = spec.match_input("test");
        assert!(matched.args_valid());
        let CmdMatch::Matched(cmd) = matched else {
            panic!("expected a full match");
        };
        assert_eq!(cmd.name, "test");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_match_name_case_insensitive() {
        let spec = test_spec(vec![]);
        let CmdMatch::Matched(cmd) = spec.match_input("TEST") else {
            panic!("expected a full match");
        };
        assert_eq!(cmd.name, "test");
    }

    #[test]
    fn test_match_abbreviated_name_yields_canonical_name() {
        let spec = test_spec(vec![]);
        let CmdMatch::Matched(cmd) = spec.match_input("t") else {
            panic!("expected a full match");
        };
        assert_eq!(cmd.name, "test");
    }

    #[test]
    fn test_match_other_name() {
        let spec = test_spec(vec![]);
        assert_eq!(spec.match_input("other"), CmdMatch::NoMatch);
        assert_eq!(spec.match_input(""), CmdMatch::NoMatch);
    }

    #[test]
    fn test_match_help_short_circuits_arg_matching() {
        let spec = test_spec(vec![ArgSpec::positional(2)]);

        for input in ["test -help", "test -?", "test 1 -?"] {
            let CmdMatch::Matched(cmd) = spec.match_input(input) else {
                panic!("expected a full match for {input:?}");
            };
            assert_eq!(cmd.args, vec![VerifiedArg::flag("help")]);
        }
    }

    #[test]
    fn test_match_positional_args() {
        let spec = test_spec(vec![ArgSpec::positional(2)]);

        let CmdMatch::Matched(cmd) = spec.match_input("test abc 2") else {
            panic!("expected a full match");
        };
        assert_eq!(cmd.args, vec![VerifiedArg::positional(["abc", "2"])]);
    }

    #[test]
    fn test_match_too_few_positional_values() {
        let spec = test_spec(vec![ArgSpec::positional(2)]);
        assert_eq!(spec.match_input("test abc"), CmdMatch::BadArgs);
        assert_eq!(spec.match_input("test"), CmdMatch::BadArgs);
    }

    #[test]
    fn test_match_trailing_tokens_fail() {
        let spec = test_spec(vec![ArgSpec::positional(2)]);
        assert_eq!(spec.match_input("test abc 2 extra"), CmdMatch::BadArgs);

        let bare = test_spec(vec![]);
        assert_eq!(bare.match_input("test extra"), CmdMatch::BadArgs);
    }

    #[test]
    fn test_match_multiple_positional_specs_in_order() {
        let spec = test_spec(vec![ArgSpec::positional(1), ArgSpec::positional(2)]);

        let CmdMatch::Matched(cmd) = spec.match_input("test a b c") else {
            panic!("expected a full match");
        };
        assert_eq!(
            cmd.args,
            vec![
                VerifiedArg::positional(["a"]),
                VerifiedArg::positional(["b", "c"]),
            ]
        );
    }

    #[test]
    fn test_match_optional_args_any_order() {
        let spec = test_spec(vec![
            ArgSpec::optional("size", 1).abbrev("s"),
            ArgSpec::flag("verbose").abbrev("v"),
        ]);

        for input in ["test -size 10 -verbose", "test -v -s 10"] {
            let CmdMatch::Matched(cmd) = spec.match_input(input) else {
                panic!("expected a full match for {input:?}");
            };
            assert!(cmd.args.contains(&VerifiedArg::labeled("size", ["10"])));
            assert!(cmd.args.contains(&VerifiedArg::flag("verbose")));
        }
    }

    #[test]
    fn test_match_optional_args_may_be_omitted() {
        let spec = test_spec(vec![
            ArgSpec::optional("size", 1),
            ArgSpec::flag("verbose"),
        ]);

        let CmdMatch::Matched(cmd) = spec.match_input("test -verbose") else {
            panic!("expected a full match");
        };
        assert_eq!(cmd.args, vec![VerifiedArg::flag("verbose")]);

        let CmdMatch::Matched(cmd) = spec.match_input("test") else {
            panic!("expected a full match");
        };
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_match_unknown_optional_label_fails() {
        let spec = test_spec(vec![ArgSpec::flag("verbose")]);
        assert_eq!(spec.match_input("test -other"), CmdMatch::BadArgs);
    }

    #[test]
    fn test_match_required_before_optional_in_input() {
        let spec = test_spec(vec![
            ArgSpec::positional(1),
            ArgSpec::optional("size", 1),
        ]);

        let CmdMatch::Matched(cmd) = spec.match_input("test file -size 10") else {
            panic!("expected a full match");
        };
        assert_eq!(
            cmd.args,
            vec![
                VerifiedArg::positional(["file"]),
                VerifiedArg::labeled("size", ["10"]),
            ]
        );
    }

    #[test]
    fn test_match_required_after_optional_declaration_order() {
        // Declaration order of optional vs positional specs does not affect
        // matching; the positional region is found by search.
        let spec = test_spec(vec![
            ArgSpec::optional("size", 1),
            ArgSpec::positional(1),
        ]);

        let CmdMatch::Matched(cmd) = spec.match_input("test file -size 10") else {
            panic!("expected a full match");
        };
        assert!(cmd.args.contains(&VerifiedArg::positional(["file"])));
        assert!(cmd.args.contains(&VerifiedArg::labeled("size", ["10"])));
    }

    #[test]
    fn test_match_zero_or_more_consumes_greedily() {
        let spec = test_spec(vec![ArgSpec::positional(ValueCount::ZeroOrMore)]);

        let CmdMatch::Matched(cmd) = spec.match_input("test 1 2 3 4") else {
            panic!("expected a full match");
        };
        assert_eq!(cmd.args, vec![VerifiedArg::positional(["1", "2", "3", "4"])]);

        let CmdMatch::Matched(cmd) = spec.match_input("test") else {
            panic!("expected a full match");
        };
        assert_eq!(cmd.args, vec![VerifiedArg::default()]);
    }

    #[test]
    fn test_match_zero_or_more_starves_following_positional() {
        // Greedy matching leaves nothing for a later positional spec.
        let spec = test_spec(vec![
            ArgSpec::positional(ValueCount::ZeroOrMore),
            ArgSpec::positional(1),
        ]);
        assert_eq!(spec.match_input("test 1 2"), CmdMatch::BadArgs);
    }

    #[test]
    fn test_match_zero_or_more_stops_at_label() {
        let spec = test_spec(vec![
            ArgSpec::positional(ValueCount::ZeroOrMore),
            ArgSpec::flag("verbose"),
        ]);

        let CmdMatch::Matched(cmd) = spec.match_input("test 1 2 -verbose") else {
            panic!("expected a full match");
        };
        assert_eq!(
            cmd.args,
            vec![
                VerifiedArg::positional(["1", "2"]),
                VerifiedArg::flag("verbose"),
            ]
        );
    }

    #[test]
    fn test_match_one_or_more() {
        let spec = test_spec(vec![ArgSpec::positional(ValueCount::OneOrMore)]);

        assert!(spec.match_input("test 1").args_valid());
        assert!(spec.match_input("test 1 2 3").args_valid());
        assert_eq!(spec.match_input("test"), CmdMatch::BadArgs);
    }

    #[test]
    fn test_match_labeled_arg_with_values() {
        let spec = test_spec(vec![ArgSpec::optional("range", 2).abbrev("r")]);

        let CmdMatch::Matched(cmd) = spec.match_input("test -r 1 10") else {
            panic!("expected a full match");
        };
        assert_eq!(cmd.args, vec![VerifiedArg::labeled("range", ["1", "10"])]);

        assert_eq!(spec.match_input("test -r 1"), CmdMatch::BadArgs);
    }

    #[test]
    fn test_match_positional_values_then_flag() {
        let spec = test_spec(vec![ArgSpec::positional(2), ArgSpec::flag("scan")]);

        let CmdMatch::Matched(cmd) = spec.match_input("test abc 2 -scan") else {
            panic!("expected a full match");
        };
        assert_eq!(
            cmd.args,
            vec![
                VerifiedArg::positional(["abc", "2"]),
                VerifiedArg::flag("scan"),
            ]
        );
    }

    #[test]
    fn test_match_excess_positional_tokens_fail() {
        // Declared positional slots take 2 + 1 values; the fourth bare token
        // fits no optional spec and fails the match.
        let spec = test_spec(vec![
            ArgSpec::positional(2),
            ArgSpec::positional(1),
            ArgSpec::optional("size", 1),
            ArgSpec::flag("scan"),
        ]);

        assert_eq!(
            spec.match_input("test abc 2 3 4 -size 10 -scan"),
            CmdMatch::BadArgs
        );
        assert!(spec.match_input("test abc 2 3 -size 10 -scan").args_valid());
    }

    #[test]
    fn test_match_empty_arg_spec_is_ignored() {
        let spec = test_spec(vec![ArgSpec::default(), ArgSpec::positional(1)]);

        let CmdMatch::Matched(cmd) = spec.match_input("test abc") else {
            panic!("expected a full match");
        };
        assert_eq!(cmd.args, vec![VerifiedArg::positional(["abc"])]);
    }
}
