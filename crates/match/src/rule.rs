use std::fmt;

use crate::FullPattern;

/// Constraint an expectation places on the message of an actual error.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum MessageRule {
    /// The message must be present and equal to the text.
    Exact(String),
    /// The message must be present and matched in full by the pattern.
    Pattern(FullPattern),
    /// The message must be present and non-empty. Its content is not checked.
    #[default]
    NonEmpty,
}

impl MessageRule {
    /// Returns `true` if `message` satisfies the rule.
    #[must_use]
    pub fn accepts(&self, message: Option<&str>) -> bool {
        match self {
            Self::Exact(expected) => message == Some(expected.as_str()),
            Self::Pattern(pattern) => message.is_some_and(|text| pattern.is_full_match(text)),
            Self::NonEmpty => message.is_some_and(|text| !text.is_empty()),
        }
    }
}

impl From<FullPattern> for MessageRule {
    fn from(pattern: FullPattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl fmt::Display for MessageRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(text) => write!(f, "message={text}"),
            Self::Pattern(pattern) => write!(f, "message~={pattern}"),
            Self::NonEmpty => f.write_str("non-blank message"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_rule_requires_equal_text() {
        let rule = MessageRule::Exact("required".into());
        assert!(rule.accepts(Some("required")));
        assert!(!rule.accepts(Some("Required")));
        assert!(!rule.accepts(Some("required ")));
        assert!(!rule.accepts(None));
    }

    #[test]
    fn empty_exact_rule_matches_only_empty_message() {
        let rule = MessageRule::Exact(String::new());
        assert!(rule.accepts(Some("")));
        assert!(!rule.accepts(None));
    }

    #[test]
    fn pattern_rule_requires_present_message() {
        let rule = MessageRule::from(FullPattern::new(".*").unwrap());
        assert!(rule.accepts(Some("")));
        assert!(rule.accepts(Some("anything")));
        assert!(!rule.accepts(None));
    }

    #[test]
    fn non_empty_rule() {
        let rule = MessageRule::default();
        assert_eq!(rule, MessageRule::NonEmpty);
        assert!(rule.accepts(Some("x")));
        assert!(rule.accepts(Some(" ")));
        assert!(!rule.accepts(Some("")));
        assert!(!rule.accepts(None));
    }

    #[test]
    fn display_variants() {
        let cases = [
            (MessageRule::Exact("required".into()), "message=required"),
            (
                MessageRule::Pattern(FullPattern::new("req.*").unwrap()),
                "message~=req.*",
            ),
            (MessageRule::NonEmpty, "non-blank message"),
        ];

        for (rule, expected) in cases {
            assert_eq!(rule.to_string(), expected);
        }
    }
}
