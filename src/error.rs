//! Error types.
//!
//! [`ConfigError`] signals caller bugs (bad phrase-length ranges) and is
//! returned eagerly before any text processing. [`StopwordError`] signals an
//! unavailable stopword corpus; the engine recovers from it by degrading to
//! unfiltered analysis, so it surfaces as a warning rather than a failure.

use thiserror::Error;

/// Invalid analysis configuration supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `min_words` must be at least 1.
    #[error("min_words must be at least 1")]
    ZeroMinWords,

    /// `min_words` exceeds `max_words`.
    #[error("min_words ({min_words}) must not exceed max_words ({max_words})")]
    InvertedRange {
        min_words: usize,
        max_words: usize,
    },
}

/// The stopword corpus could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StopwordError {
    /// The provider has no list for the requested language.
    #[error("no stopword list available for language {language:?}")]
    UnsupportedLanguage { language: String },

    /// The corpus backing the provider could not be read.
    #[error("stopword corpus unavailable: {reason}")]
    CorpusUnavailable { reason: String },
}
