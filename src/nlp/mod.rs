//! Natural language processing components.
//!
//! Text normalization and stopword filtering shared by both analysis
//! pipelines.

pub mod normalize;
pub mod stopwords;

pub use normalize::{clean_frequency, clean_strict, strip_urls};
pub use stopwords::{
    BundledStopwords, IsoStopwords, StopwordFilter, StopwordProvider,
    ANALYSIS_COMMON_TERMS, FREQUENCY_COMMON_TERMS,
};
