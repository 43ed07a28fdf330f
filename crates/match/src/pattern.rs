use std::fmt;
use std::str::FromStr;

use regex_automata::meta;
use regex_syntax::ParserBuilder;
use regex_syntax::hir::{Hir, Look};

use crate::PatternError;

/// Syntax flags applied to a whole [`FullPattern`].
///
/// Each flag has the same meaning as its inline form (`i`, `m`, `s`, `x`),
/// which remains available inside the pattern text itself.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PatternFlags {
    /// Letters match regardless of case (`i`).
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries (`m`).
    pub multi_line: bool,
    /// `.` also matches `\n` (`s`).
    pub dot_matches_new_line: bool,
    /// Whitespace is ignored and `#` starts a comment (`x`).
    pub ignore_whitespace: bool,
}

impl PatternFlags {
    fn inline_letters(self) -> String {
        [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.ignore_whitespace, 'x'),
        ]
        .into_iter()
        .filter_map(|(set, letter)| set.then_some(letter))
        .collect()
    }
}

/// Regular expression that must match an entire message.
///
/// The pattern is parsed once and the parsed expression is wrapped between
/// start-of-text and end-of-text assertions, so
/// [`is_full_match`](Self::is_full_match) never accepts a message that merely
/// contains a match.
///
/// # Examples
///
/// ```
/// use matching::{FullPattern, PatternFlags};
///
/// let pattern = FullPattern::new("abc").unwrap();
/// assert!(pattern.is_full_match("abc"));
/// assert!(!pattern.is_full_match("xabcx"));
///
/// let flags = PatternFlags { case_insensitive: true, ..PatternFlags::default() };
/// let pattern = FullPattern::with_flags("abc", flags).unwrap();
/// assert!(pattern.is_full_match("ABC"));
/// ```
#[derive(Clone, Debug)]
pub struct FullPattern {
    pattern: String,
    flags: PatternFlags,
    anchored: meta::Regex,
}

impl FullPattern {
    /// Compiles `pattern` without flags.
    pub fn new(pattern: impl Into<String>) -> Result<Self, PatternError> {
        Self::with_flags(pattern, PatternFlags::default())
    }

    /// Compiles `pattern` with `flags` applied to the whole expression.
    pub fn with_flags(
        pattern: impl Into<String>,
        flags: PatternFlags,
    ) -> Result<Self, PatternError> {
        let pattern = pattern.into();
        let anchored = compile_anchored(&pattern, flags)?;
        Ok(Self {
            pattern,
            flags,
            anchored,
        })
    }

    /// Returns the pattern text as written by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the flags the pattern was compiled with.
    #[must_use]
    pub const fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Returns `true` if the pattern matches all of `text`.
    #[must_use]
    pub fn is_full_match(&self, text: &str) -> bool {
        self.anchored.is_match(text)
    }
}

fn compile_anchored(pattern: &str, flags: PatternFlags) -> Result<meta::Regex, PatternError> {
    let hir = ParserBuilder::new()
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_matches_new_line)
        .ignore_whitespace(flags.ignore_whitespace)
        .build()
        .parse(pattern)
        .map_err(|source| PatternError::Syntax {
            pattern: pattern.to_owned(),
            source: Box::new(source),
        })?;

    let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);

    meta::Regex::builder()
        .build_from_hir(&anchored)
        .map_err(|source| PatternError::Build {
            pattern: pattern.to_owned(),
            source: Box::new(source),
        })
}

impl PartialEq for FullPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.flags == other.flags
    }
}

impl Eq for FullPattern {}

impl FromStr for FullPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Writes the pattern text, prefixed with the equivalent inline flag group
/// when flags are set.
impl fmt::Display for FullPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = self.flags.inline_letters();
        if !letters.is_empty() {
            write!(f, "(?{letters})")?;
        }
        f.write_str(&self.pattern)
    }
}
