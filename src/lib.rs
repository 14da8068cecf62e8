//! # phrasefreq
//!
//! Phrase and n-gram frequency engine for social-media text analytics.
//!
//! This crate is the analytics core of a conference social-media dashboard:
//! it turns raw post text into ranked, deduplicated multi-word phrases under
//! configurable stopword and length policies. Rendering, filtering widgets,
//! and data ingestion live in the calling layer and consume plain
//! serializable results.
//!
//! ## Two pipelines
//!
//! [`PhraseFrequencyEngine`] exposes two deliberately distinct operations:
//!
//! - [`analyze_text_content`]: exhaustive analysis. Letters-only
//!   normalization, every phrase of 2..=8 words reported with count and term
//!   frequency score, no threshold, caller truncates.
//! - [`word_frequency`]: thresholded analysis. Contraction-preserving
//!   normalization, caller-chosen length range, all lengths pooled, phrases
//!   seen fewer than twice dropped, result ranked with a `top_n` view.
//!
//! ## Example
//!
//! ```
//! use phrasefreq::{FrequencyOptions, PhraseFrequencyEngine};
//!
//! let engine = PhraseFrequencyEngine::default();
//! let options = FrequencyOptions::new().with_min_words(2).with_max_words(2);
//! let phrases = engine
//!     .word_frequency(
//!         "Great talk on lung cancer. Great talk indeed! Lung cancer research matters.",
//!         &options,
//!     )
//!     .unwrap();
//!
//! assert_eq!(phrases.top_n(2), &[
//!     ("great talk".to_string(), 2),
//!     ("lung cancer".to_string(), 2),
//! ]);
//! ```
//!
//! ## Stopwords
//!
//! The base stopword list is an injected [`StopwordProvider`], loaded once
//! at engine construction: [`BundledStopwords`] (static English list, the
//! default) or [`IsoStopwords`] (multi-language via the `stop-words` crate).
//! A provider failure degrades to unfiltered analysis with a logged warning
//! instead of failing the caller.
//!
//! [`analyze_text_content`]: PhraseFrequencyEngine::analyze_text_content
//! [`word_frequency`]: PhraseFrequencyEngine::word_frequency

pub mod engine;
pub mod error;
pub mod filter;
pub mod ngram;
pub mod nlp;
pub mod social;
pub mod types;

pub use engine::{FrequencyOptions, PhraseFrequencyEngine};
pub use error::{ConfigError, StopwordError};
pub use filter::KeywordFilter;
pub use nlp::stopwords::{BundledStopwords, IsoStopwords, StopwordFilter, StopwordProvider};
pub use social::{hashtag_frequency, location_counts};
pub use types::{FrequencyMap, PhraseResult};
