//! Keyword-based post filtering.
//!
//! The dashboard narrows a feed by words the posts must or must not
//! contain before the phrase engine runs. Matching is case-insensitive
//! substring containment: a post passes when it contains at least one
//! include term (if any are configured) and none of the exclude terms.

/// A configured include/exclude keyword filter.
#[derive(Debug, Clone, Default)]
pub struct KeywordFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl KeywordFilter {
    /// A filter that passes everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require posts to contain at least one of these terms. Terms are
    /// trimmed and lowercased; blank terms are dropped.
    pub fn with_include<S: AsRef<str>>(mut self, terms: &[S]) -> Self {
        self.include = normalize_terms(terms);
        self
    }

    /// Reject posts containing any of these terms. Terms are trimmed and
    /// lowercased; blank terms are dropped.
    pub fn with_exclude<S: AsRef<str>>(mut self, terms: &[S]) -> Self {
        self.exclude = normalize_terms(terms);
        self
    }

    /// Parse a comma-separated term list as the dashboard's text inputs
    /// provide it.
    pub fn parse_terms(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Returns `true` if there are no configured terms in either direction.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Check whether a post passes the filter.
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        if !self.include.is_empty() && !self.include.iter().any(|t| lowered.contains(t)) {
            return false;
        }
        !self.exclude.iter().any(|t| lowered.contains(t))
    }

    /// Keep only the posts that pass the filter, preserving order.
    pub fn retain<'a>(&self, posts: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        posts.into_iter().filter(|p| self.matches(p)).collect()
    }
}

fn normalize_terms<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms
        .iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
