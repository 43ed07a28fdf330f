use thiserror::Error;

/// Error produced when a message pattern cannot be compiled.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern text is not a valid regular expression.
    #[error("failed to parse message pattern '{pattern}': {source}")]
    Syntax {
        /// The offending pattern.
        pattern: String,
        /// Parser diagnostic.
        #[source]
        source: Box<regex_syntax::Error>,
    },
    /// The pattern parsed but the matcher could not be built from it.
    #[error("failed to compile message pattern '{pattern}': {source}")]
    Build {
        /// The offending pattern.
        pattern: String,
        /// Compiler diagnostic.
        #[source]
        source: Box<regex_automata::meta::BuildError>,
    },
}

impl PatternError {
    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Syntax { pattern, .. } | Self::Build { pattern, .. } => pattern,
        }
    }
}
