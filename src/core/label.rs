//! Command and argument labels with optional abbreviations.

/// A name with an optional short abbreviation.
///
/// Matching is case-insensitive against either the full name or the
/// abbreviation. A label constructed with only an abbreviation promotes the
/// abbreviation to be the name, so a label is never "abbreviation-only".
///
/// # Examples
///
/// ```
/// use bevy_ccon::core::Label;
///
/// let label = Label::new("help", "?");
/// assert!(label.matches("HELP"));
/// assert!(label.matches("?"));
/// assert!(!label.matches("h"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    name: String,
    abbrev: String,
}

impl Label {
    /// Create a new label.
    ///
    /// If `name` is empty but `abbrev` is not, the abbreviation becomes the
    /// name and the abbreviation is left empty.
    pub fn new(name: impl Into<String>, abbrev: impl Into<String>) -> Self {
        let mut name = name.into();
        let mut abbrev = abbrev.into();
        if name.is_empty() && !abbrev.is_empty() {
            std::mem::swap(&mut name, &mut abbrev);
        }
        Self { name, abbrev }
    }

    /// Get the full name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the label has an abbreviation.
    #[inline]
    pub fn has_abbreviation(&self) -> bool {
        !self.abbrev.is_empty()
    }

    /// Get the abbreviation (empty if none).
    #[inline]
    pub fn abbreviation(&self) -> &str {
        &self.abbrev
    }

    /// Check if the label is populated.
    #[inline]
    pub fn is_present(&self) -> bool {
        !self.name.is_empty()
    }

    /// Check if a candidate string matches the name or the abbreviation.
    ///
    /// Comparison is case-insensitive. An empty label matches only the empty
    /// candidate; a populated label never matches the empty candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return self.name.is_empty();
        }
        candidate.eq_ignore_ascii_case(&self.name)
            || (!self.abbrev.is_empty() && candidate.eq_ignore_ascii_case(&self.abbrev))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_abbreviation() {
        let label = Label::new("test", "t");
        assert_eq!(label.name(), "test");
        assert_eq!(label.abbreviation(), "t");
        assert!(label.has_abbreviation());
    }

    #[test]
    fn test_name_only() {
        let label = Label::new("test", "");
        assert_eq!(label.name(), "test");
        assert_eq!(label.abbreviation(), "");
        assert!(!label.has_abbreviation());
    }

    #[test]
    fn test_abbreviation_promoted_to_name() {
        let label = Label::new("", "t");
        assert_eq!(label.name(), "t");
        assert_eq!(label.abbreviation(), "");
    }

    #[test]
    fn test_is_present() {
        assert!(Label::new("test", "t").is_present());
        assert!(Label::new("test", "").is_present());
        assert!(Label::new("", "t").is_present());
        assert!(!Label::default().is_present());
    }

    #[test]
    fn test_matches_name_and_abbreviation() {
        let label = Label::new("test", "t");
        assert!(label.matches("test"));
        assert!(label.matches("t"));
        assert!(!label.matches("abc"));
    }

    #[test]
    fn test_matches_case_insensitive() {
        let label = Label::new("test", "t");
        assert!(label.matches("TEST"));
        assert!(label.matches("TeSt"));
        assert!(label.matches("T"));
    }

    #[test]
    fn test_empty_label_matches_only_empty() {
        let empty = Label::default();
        assert!(empty.matches(""));
        assert!(!empty.matches("abc"));

        let populated = Label::new("abc", "a");
        assert!(!populated.matches(""));
    }
}
