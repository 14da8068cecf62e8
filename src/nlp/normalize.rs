//! Text normalization.
//!
//! Two cleaning policies feed the two analysis pipelines:
//!
//! - [`clean_strict`] keeps only lowercase letters and whitespace. Numbers,
//!   punctuation, hashtag/mention markers, and emoji all become spaces.
//! - [`clean_frequency`] keeps word characters and apostrophes (so
//!   contractions survive), deletes digit runs outright (`covid19` →
//!   `covid`), and collapses whitespace.
//!
//! Both lowercase first and strip URLs (`http`/`https`/`www` prefixes up to
//! the next whitespace). The policies are intentionally distinct; do not
//! merge them.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").unwrap());
static NON_ALPHA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z\s]").unwrap());
static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s']").unwrap());
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Remove every URL-like substring: anything from a `http`/`https`/`www`
/// prefix up to the next whitespace.
pub fn strip_urls(text: &str) -> String {
    URL_RE.replace_all(text, "").into_owned()
}

/// Strict cleaning for exhaustive phrase analysis.
///
/// Lowercases, strips URLs, then replaces every character that is not a
/// lowercase ASCII letter or whitespace with a single space. The result may
/// contain runs of spaces; callers split on whitespace.
pub fn clean_strict(text: &str) -> String {
    let text = text.to_lowercase();
    let text = strip_urls(&text);
    NON_ALPHA_RE.replace_all(&text, " ").into_owned()
}

/// Lenient cleaning for thresholded word frequency.
///
/// Lowercases, strips URLs, replaces characters that are not word
/// characters, whitespace, or apostrophes with a space, deletes digit runs
/// (adjacent segments concatenate), and collapses whitespace to single
/// spaces with no leading/trailing space. Returns an empty string when
/// nothing survives.
pub fn clean_frequency(text: &str) -> String {
    let text = text.to_lowercase();
    let text = strip_urls(&text);
    let text = NON_WORD_RE.replace_all(&text, " ");
    let text = DIGITS_RE.replace_all(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
