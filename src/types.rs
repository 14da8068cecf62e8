//! Core result types shared across the crate.
//!
//! [`PhraseResult`] is the per-phrase record produced by exhaustive analysis,
//! and [`FrequencyMap`] is an insertion-ordered string counter with defined
//! increment and ranking semantics. Both serialize as plain data for the
//! rendering layer.

use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One ranked phrase from exhaustive analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseResult {
    /// The phrase, tokens joined by single spaces.
    pub phrase: String,
    /// Number of occurrences in the filtered token sequence.
    pub count: u64,
    /// Term frequency: `count / total_filtered_tokens` (0 for an empty pool).
    pub frequency_score: f64,
    /// Number of tokens in the phrase.
    pub word_count: usize,
}

/// An insertion-ordered counter over phrase strings.
///
/// Keys keep the order in which they were first inserted until [`rank`] is
/// called, which reorders entries by descending count with ascending
/// lexicographic tie-break. Lookups stay O(1) through an internal index.
///
/// [`rank`]: FrequencyMap::rank
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    /// Maps key -> position in `entries`.
    index: FxHashMap<String, usize>,
    /// Ordered (key, count) storage.
    entries: Vec<(String, u64)>,
}

impl FrequencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Increment the count for `key`, inserting it with count 1 if absent.
    ///
    /// New keys are appended, so iteration order is first-seen order.
    /// Returns the updated count.
    pub fn increment(&mut self, key: &str) -> u64 {
        if let Some(&pos) = self.index.get(key) {
            self.entries[pos].1 += 1;
            self.entries[pos].1
        } else {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push((key.to_string(), 1));
            1
        }
    }

    /// Get the count for `key`, if present.
    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no keys have been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in the current order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// All entries in the current order.
    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    /// The first `k` entries in the current order (fewer if the map is
    /// smaller). After [`rank`](FrequencyMap::rank) this is the top-k view.
    pub fn top_n(&self, k: usize) -> &[(String, u64)] {
        &self.entries[..k.min(self.entries.len())]
    }

    /// Drop every entry whose count is below `min_count`.
    pub fn retain_min_count(&mut self, min_count: u64) {
        self.entries.retain(|(_, c)| *c >= min_count);
        self.rebuild_index();
    }

    /// Reorder entries by descending count, ascending key on ties.
    pub fn rank(&mut self) {
        self.entries
            .sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (pos, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), pos);
        }
    }
}

impl Serialize for FrequencyMap {
    /// Serializes as a JSON map preserving entry order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a FrequencyMap {
    type Item = &'a (String, u64);
    type IntoIter = std::slice::Iter<'a, (String, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_preserves_first_seen_order() {
        let mut map = FrequencyMap::new();
        map.increment("beta");
        map.increment("alpha");
        map.increment("beta");

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![("beta", 2), ("alpha", 1)]);
    }

    #[test]
    fn test_get_and_len() {
        let mut map = FrequencyMap::new();
        assert!(map.is_empty());
        map.increment("x");
        map.increment("x");

        assert_eq!(map.get("x"), Some(2));
        assert_eq!(map.get("y"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_rank_orders_by_count_then_key() {
        let mut map = FrequencyMap::new();
        for key in ["zeta", "alpha", "zeta", "mid", "alpha", "mid", "mid"] {
            map.increment(key);
        }
        map.rank();

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![("mid", 3), ("alpha", 2), ("zeta", 2)]);
        // Index still valid after reordering
        assert_eq!(map.get("zeta"), Some(2));
    }

    #[test]
    fn test_retain_min_count() {
        let mut map = FrequencyMap::new();
        map.increment("once");
        map.increment("twice");
        map.increment("twice");
        map.retain_min_count(2);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("twice"), Some(2));
        assert_eq!(map.get("once"), None);
    }

    #[test]
    fn test_top_n_clamps_to_len() {
        let mut map = FrequencyMap::new();
        map.increment("a");
        map.increment("b");

        assert_eq!(map.top_n(1).len(), 1);
        assert_eq!(map.top_n(10).len(), 2);
        assert!(map.top_n(0).is_empty());
    }

    #[test]
    fn test_serialize_preserves_order() {
        let mut map = FrequencyMap::new();
        map.increment("zz");
        map.increment("aa");
        map.increment("zz");
        map.rank();

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zz":2,"aa":1}"#);
    }
}
