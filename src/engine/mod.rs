//! Phrase frequency engine.
//!
//! Turns raw free-text posts into ranked multi-word phrases. Two operations
//! with deliberately different policies share the n-gram primitive but
//! nothing else:
//!
//! - [`analyze_text_content`]: exhaustive analysis. Strict letters-only
//!   normalization, phrase lengths 2..=8 reported per length, every distinct
//!   phrase emitted with a term-frequency score, no threshold or truncation.
//! - [`word_frequency`]: thresholded analysis. Lenient normalization that
//!   keeps contractions, caller-chosen length range, all lengths pooled into
//!   one counter, count >= 2 cutoff, ranked map output with a `top_n` view.
//!
//! The two also use different stopword extension sets. These asymmetries are
//! policy, not accident; keep the pipelines separate.
//!
//! [`analyze_text_content`]: PhraseFrequencyEngine::analyze_text_content
//! [`word_frequency`]: PhraseFrequencyEngine::word_frequency

use crate::error::ConfigError;
use crate::ngram::{count_ngrams, ngrams};
use crate::nlp::normalize::{clean_frequency, clean_strict};
use crate::nlp::stopwords::{
    BundledStopwords, StopwordFilter, StopwordProvider, ANALYSIS_COMMON_TERMS,
    FREQUENCY_COMMON_TERMS,
};
use crate::types::{FrequencyMap, PhraseResult};

/// Phrase lengths covered by exhaustive analysis.
const ANALYSIS_MIN_WORDS: usize = 2;
const ANALYSIS_MAX_WORDS: usize = 8;

/// Minimum occurrences for a phrase to survive thresholded analysis.
const MIN_PHRASE_COUNT: u64 = 2;

/// Tokens at or below this length are discarded before counting.
const MIN_TOKEN_LEN: usize = 2;

/// Options for [`PhraseFrequencyEngine::word_frequency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyOptions {
    /// Keep social-media noise terms (`rt`, `via`, ...) in the token stream.
    pub include_common: bool,
    /// Minimum phrase length in words (>= 1).
    pub min_words: usize,
    /// Maximum phrase length in words (>= `min_words`).
    pub max_words: usize,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        Self {
            include_common: false,
            min_words: 2,
            max_words: 5,
        }
    }
}

impl FrequencyOptions {
    /// Options with default range (2..=5 words, common terms excluded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep common social-media terms in the analysis.
    pub fn with_include_common(mut self, include_common: bool) -> Self {
        self.include_common = include_common;
        self
    }

    /// Set the minimum phrase length.
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Set the maximum phrase length.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Reject ranges the pipeline cannot honor. Bad ranges are caller bugs,
    /// so they fail fast instead of producing an empty result.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_words == 0 {
            return Err(ConfigError::ZeroMinWords);
        }
        if self.min_words > self.max_words {
            return Err(ConfigError::InvertedRange {
                min_words: self.min_words,
                max_words: self.max_words,
            });
        }
        Ok(())
    }
}

/// Stateless analyzer over raw post text.
///
/// Holds only the immutable base stopword set, loaded once from the injected
/// [`StopwordProvider`] at construction. Every operation is a pure function
/// of its inputs, so a shared engine is safe to use from many threads.
#[derive(Debug, Clone)]
pub struct PhraseFrequencyEngine {
    base_stopwords: StopwordFilter,
}

impl Default for PhraseFrequencyEngine {
    fn default() -> Self {
        Self::new(&BundledStopwords)
    }
}

impl PhraseFrequencyEngine {
    /// Create an engine with the given stopword provider.
    ///
    /// A provider failure is recoverable: the engine logs a warning and
    /// degrades to no base stopword filtering rather than propagating the
    /// error. The per-operation extension sets still apply.
    pub fn new(provider: &dyn StopwordProvider) -> Self {
        let base_stopwords = match provider.stopwords() {
            Ok(words) => StopwordFilter::from_list(&words),
            Err(err) => {
                log::warn!("stopword corpus unavailable, analysis will not filter stopwords: {err}");
                StopwordFilter::empty()
            }
        };
        Self { base_stopwords }
    }

    /// Number of words in the base stopword set (0 when degraded).
    pub fn base_stopword_count(&self) -> usize {
        self.base_stopwords.len()
    }

    /// Exhaustive phrase analysis of one raw text.
    ///
    /// Emits every distinct phrase of 2..=8 words with its count, term
    /// frequency score (`count / total_filtered_tokens`), and word count.
    /// Phrases of different lengths are counted independently. Sorted by
    /// descending count, then descending score; ties keep generation order
    /// (shorter phrases first, then first occurrence), so output is
    /// deterministic. Never fails: empty or all-noise input yields an empty
    /// vector. No threshold and no truncation; the caller truncates.
    pub fn analyze_text_content(&self, text: &str, include_common: bool) -> Vec<PhraseResult> {
        let cleaned = clean_strict(text);
        let tokens: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|t| t.len() > MIN_TOKEN_LEN)
            .filter(|t| !self.is_excluded(t, include_common, ANALYSIS_COMMON_TERMS))
            .collect();

        let total_tokens = tokens.len();
        let mut results = Vec::new();
        for n in ANALYSIS_MIN_WORDS..=ANALYSIS_MAX_WORDS {
            for (phrase, count) in count_ngrams(&tokens, n).iter() {
                let frequency_score = if total_tokens > 0 {
                    count as f64 / total_tokens as f64
                } else {
                    0.0
                };
                results.push(PhraseResult {
                    phrase: phrase.to_string(),
                    count,
                    frequency_score,
                    word_count: n,
                });
            }
        }

        // Stable sort: equal (count, score) pairs keep generation order
        results.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| b.frequency_score.total_cmp(&a.frequency_score))
        });
        results
    }

    /// Exhaustive phrase analysis over a collection of posts.
    ///
    /// Posts are joined with single spaces into one document, matching how
    /// the dashboard aggregates a filtered feed before charting.
    pub fn analyze_corpus<'a, I>(&self, texts: I, include_common: bool) -> Vec<PhraseResult>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.analyze_text_content(&join_corpus(texts), include_common)
    }

    /// Thresholded, ranged phrase frequency of one raw text.
    ///
    /// Pools n-grams of every length in `min_words..=max_words` into one
    /// counter, drops phrases seen fewer than twice, and ranks by descending
    /// count with ascending lexicographic tie-break. Returns an
    /// insertion-ordered map supporting `top_n`.
    pub fn word_frequency(
        &self,
        text: &str,
        options: &FrequencyOptions,
    ) -> Result<FrequencyMap, ConfigError> {
        options.validate()?;

        let cleaned = clean_frequency(text);
        if cleaned.is_empty() {
            return Ok(FrequencyMap::new());
        }

        let mut tokens: Vec<&str> = Vec::new();
        for raw in cleaned.split_whitespace() {
            let token = raw.trim_matches('\'');
            if token.chars().count() <= MIN_TOKEN_LEN {
                continue;
            }
            if self.is_excluded(token, options.include_common, FREQUENCY_COMMON_TERMS) {
                continue;
            }
            // Apostrophes are already trimmed; '#'/'@' markers are spaced out
            // by normalization. The prefix check still guards the contract.
            if matches!(token.chars().next(), Some('\'' | '#' | '@')) {
                continue;
            }
            tokens.push(token);
        }

        let mut counts = FrequencyMap::new();
        for n in options.min_words..=options.max_words {
            if n > tokens.len() {
                continue;
            }
            for phrase in ngrams(&tokens, n) {
                counts.increment(&phrase);
            }
        }

        counts.retain_min_count(MIN_PHRASE_COUNT);
        counts.rank();
        Ok(counts)
    }

    /// Thresholded phrase frequency over a collection of posts, joined with
    /// single spaces before analysis.
    pub fn word_frequency_corpus<'a, I>(
        &self,
        texts: I,
        options: &FrequencyOptions,
    ) -> Result<FrequencyMap, ConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.word_frequency(&join_corpus(texts), options)
    }

    fn is_excluded(&self, token: &str, include_common: bool, common_terms: &[&str]) -> bool {
        if self.base_stopwords.is_stopword(token) {
            return true;
        }
        !include_common && common_terms.contains(&token)
    }
}

fn join_corpus<'a, I: IntoIterator<Item = &'a str>>(texts: I) -> String {
    texts.into_iter().collect::<Vec<_>>().join(" ")
}
