//! Sliding-window n-gram generation.
//!
//! The one primitive both analysis pipelines share: contiguous,
//! order-preserving windows over a token sequence, joined into space-
//! separated phrase strings.

use crate::types::FrequencyMap;

/// Iterate all contiguous n-grams of `tokens` as space-joined phrases.
///
/// Yields nothing when `n` is 0 or exceeds the token count.
pub fn ngrams<'a, S: AsRef<str>>(
    tokens: &'a [S],
    n: usize,
) -> impl Iterator<Item = String> + 'a {
    // windows() panics on size 0 and yields nothing past the sequence end
    let yield_count = if n == 0 { 0 } else { usize::MAX };
    tokens.windows(n.max(1)).take(yield_count).map(|window| {
        let mut phrase = String::new();
        for (i, token) in window.iter().enumerate() {
            if i > 0 {
                phrase.push(' ');
            }
            phrase.push_str(token.as_ref());
        }
        phrase
    })
}

/// Count all n-grams of one length, keyed in first-seen order.
pub fn count_ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> FrequencyMap {
    let mut counts = FrequencyMap::new();
    for phrase in ngrams(tokens, n) {
        counts.increment(&phrase);
    }
    counts
}
