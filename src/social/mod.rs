//! Peripheral single-pass counters over post collections.
//!
//! Hashtag and location frequency for the dashboard's side charts. Both are
//! stateless scans with no policy beyond missing-value handling; the phrase
//! engine is where the real analysis lives.

use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;

use crate::types::FrequencyMap;

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").unwrap());

/// Count hashtags across a collection of post texts.
///
/// Extracts every `#word` occurrence, lowercased, tag body only. Missing
/// texts are skipped silently. Extraction runs in parallel per post; the
/// merge is sequential, and the result is ranked by descending count with
/// ascending tag tie-break, so output is deterministic.
pub fn hashtag_frequency<S: AsRef<str> + Sync>(texts: &[Option<S>]) -> FrequencyMap {
    let per_post: Vec<Vec<String>> = texts
        .par_iter()
        .map(|text| match text {
            Some(text) => HASHTAG_RE
                .captures_iter(text.as_ref())
                .map(|cap| cap[1].to_lowercase())
                .collect(),
            None => Vec::new(),
        })
        .collect();

    let mut counts = FrequencyMap::new();
    for tags in &per_post {
        for tag in tags {
            counts.increment(tag);
        }
    }
    counts.rank();
    counts
}

/// Count posts per location, mapping missing values to `"Unknown"`.
///
/// Ranked by descending count with ascending name tie-break.
pub fn location_counts<S: AsRef<str>>(locations: &[Option<S>]) -> FrequencyMap {
    let mut counts = FrequencyMap::new();
    for location in locations {
        match location {
            Some(location) => counts.increment(location.as_ref()),
            None => counts.increment("Unknown"),
        };
    }
    counts.rank();
    counts
}
