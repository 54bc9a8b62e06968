//! Sentence-pair similarity via longest common subsequence.

use canonical::{canonicalize_tokens, tokenize};
use lexicon::Lexicon;

/// Length of the longest common subsequence of two token sequences.
///
/// Standard dynamic programming, `O(len_a * len_b)` time. Only two rows of the
/// table are kept alive.
pub fn lcs_length<A, B>(a: &[A], b: &[B]) -> usize
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for x in a {
        for (j, y) in b.iter().enumerate() {
            curr[j + 1] = if x.as_ref() == y.as_ref() {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// LCS length normalized by the average sequence length.
///
/// The average uses integer division, so `(3 + 4) / 2 == 3`. Two empty
/// sequences are identical (`1.0`); exactly one empty sequence scores `0.0`.
/// The result never exceeds `1.0` because the LCS is bounded by the shorter
/// sequence, which is at most the floored average.
pub fn lcs_similarity<A, B>(a: &[A], b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let avg_len = (a.len() + b.len()) / 2;
    if avg_len == 0 {
        return 0.0;
    }
    lcs_length(a, b) as f64 / avg_len as f64
}

/// Similarity of two sentences: tokenize, canonicalize, then [`lcs_similarity`].
pub fn pair_similarity<L: Lexicon + ?Sized>(a: &str, b: &str, lexicon: &L) -> f64 {
    let tokens_a = canonicalize_tokens(&tokenize(a, lexicon), lexicon);
    let tokens_b = canonicalize_tokens(&tokenize(b, lexicon), lexicon);
    lcs_similarity(&tokens_a, &tokens_b)
}
