//! Stopword filtering.
//!
//! The engine excludes high-frequency, low-information words from phrase
//! analysis. The base list comes from a [`StopwordProvider`] injected at
//! engine construction: [`BundledStopwords`] (the default) carries a static
//! English list compiled into the crate, and [`IsoStopwords`] exposes the
//! multi-language lists of the `stop-words` crate. Per-operation extension
//! sets (social-media noise terms) are layered on top with
//! [`StopwordFilter::add_stopwords`].

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::error::StopwordError;

/// Social-media noise terms excluded by exhaustive analysis unless the
/// caller opts in to common terms.
pub const ANALYSIS_COMMON_TERMS: &[&str] = &["rt", "via", "amp"];

/// Social-media noise terms excluded by thresholded word frequency unless
/// the caller opts in to common terms. Deliberately a superset of
/// [`ANALYSIS_COMMON_TERMS`]; the two call sites have different policies.
pub const FREQUENCY_COMMON_TERMS: &[&str] = &["rt", "via", "amp", "new", "update"];

/// A source of base stopword lists.
///
/// Implementations must be cheap to call or internally cached; the engine
/// calls [`stopwords`](StopwordProvider::stopwords) once at construction and
/// holds the result for its lifetime.
pub trait StopwordProvider: Send + Sync {
    /// The base stopword list, lowercase.
    fn stopwords(&self) -> Result<Vec<String>, StopwordError>;
}

/// The default provider: a static English list bundled with the crate.
///
/// This is the classic 179-word English list used by mainstream NLP toolkits,
/// so results line up with what analysts expect from those tools. No I/O,
/// no network, infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStopwords;

impl StopwordProvider for BundledStopwords {
    fn stopwords(&self) -> Result<Vec<String>, StopwordError> {
        Ok(ENGLISH_STOPWORDS.iter().map(|s| s.to_string()).collect())
    }
}

/// Multi-language provider backed by the `stop-words` crate.
///
/// Useful for callers analyzing non-English streams. Note the ISO English
/// list is far larger than the bundled one and filters more aggressively.
#[derive(Debug, Clone)]
pub struct IsoStopwords {
    language: String,
}

impl IsoStopwords {
    /// Create a provider for the given language code (e.g. `"en"`, `"de"`).
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl StopwordProvider for IsoStopwords {
    fn stopwords(&self) -> Result<Vec<String>, StopwordError> {
        let lang = match self.language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "ru" | "russian" => LANGUAGE::Russian,
            "pl" | "polish" => LANGUAGE::Polish,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => {
                return Err(StopwordError::UnsupportedLanguage {
                    language: self.language.clone(),
                })
            }
        };

        Ok(get(lang).iter().map(|s| s.to_string()).collect())
    }
}

/// An immutable-after-setup set of words to exclude from analysis.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create an empty filter (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a filter from a word list. Words are lowercased.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let stopwords = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter.
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword. Expects lowercase input; the engine
    /// lowercases all text before tokenization.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Returns `true` if the filter excludes nothing.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// Bundled English stopword list.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "you're", "you've", "you'll", "you'd", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "she's", "her",
    "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were",
    "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off",
    "over", "under", "again", "further", "then", "once", "here", "there",
    "when", "where", "why", "how", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "don't", "should", "should've", "now", "d", "ll", "m",
    "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
    "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won",
    "won't", "wouldn", "wouldn't",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_provider() {
        let words = BundledStopwords.stopwords().unwrap();
        let filter = StopwordFilter::from_list(&words);

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("on"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("cancer"));
        assert!(!filter.is_stopword("indeed"));
        // Domain words must not be in the base list
        assert!(!filter.is_stopword("great"));
        assert!(!filter.is_stopword("talk"));
    }

    #[test]
    fn test_extension_sets_are_layered() {
        let words = BundledStopwords.stopwords().unwrap();
        let mut filter = StopwordFilter::from_list(&words);
        assert!(!filter.is_stopword("rt"));

        filter.add_stopwords(FREQUENCY_COMMON_TERMS);
        assert!(filter.is_stopword("rt"));
        assert!(filter.is_stopword("update"));

        filter.remove_stopwords(&["rt"]);
        assert!(!filter.is_stopword("rt"));
    }

    #[test]
    fn test_frequency_terms_superset_of_analysis_terms() {
        for term in ANALYSIS_COMMON_TERMS {
            assert!(FREQUENCY_COMMON_TERMS.contains(term));
        }
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_from_list_lowercases() {
        let filter = StopwordFilter::from_list(&["Custom", "WORDS"]);
        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_iso_provider_languages() {
        let filter = StopwordFilter::from_list(&IsoStopwords::new("de").stopwords().unwrap());
        assert!(filter.is_stopword("und"));

        let err = IsoStopwords::new("tlh").stopwords().unwrap_err();
        assert!(matches!(
            err,
            StopwordError::UnsupportedLanguage { .. }
        ));
    }
}
