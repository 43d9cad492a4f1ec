//! Error types surfaced by the NLP core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by generation, resources and the runtime facade.
#[derive(Debug, Error)]
pub enum NlpError {
    /// Input text was empty or only whitespace.
    #[error("input text must be a non-empty string")]
    EmptyInput,

    /// Requested flashcard count is outside the accepted range.
    #[error("requested {requested} question/answer pairs, expected between 1 and {max}")]
    PairCountOutOfRange {
        /// Count supplied by the caller.
        requested: usize,
        /// Upper bound from configuration.
        max: usize,
    },

    /// Linguistic resources could not be initialised.
    #[error("linguistic resources unavailable: {0}")]
    ResourceUnavailable(String),

    /// A user lexicon file could not be read or parsed.
    #[error("lexicon {path:?} could not be loaded: {reason}")]
    Lexicon {
        /// Lexicon file location.
        path: PathBuf,
        /// Underlying failure.
        reason: String,
    },

    /// A dynamically built pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Unexpected failure while processing input.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias used across the crate.
pub type NlpResult<T> = Result<T, NlpError>;
