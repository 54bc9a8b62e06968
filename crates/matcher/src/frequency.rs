//! Whole-text word-frequency cosine similarity.

use canonical::{canonicalize_tokens, tokenize};
use fxhash::FxHashMap;
use lexicon::Lexicon;

/// Occurrence count per canonical token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyVector<'a> {
    counts: FxHashMap<&'a str, u64>,
}

impl<'a> FrequencyVector<'a> {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        let mut counts: FxHashMap<&'a str, u64> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.as_ref()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Dot product; tokens absent from either side contribute zero.
    pub fn dot(&self, other: &FrequencyVector<'_>) -> u64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(token, count)| count * large.count(token))
            .sum()
    }

    /// Squared Euclidean norm.
    pub fn norm_squared(&self) -> u64 {
        self.counts.values().map(|c| c * c).sum()
    }

    /// Cosine similarity in `[0.0, 1.0]`; `0.0` when either vector is empty.
    pub fn cosine(&self, other: &FrequencyVector<'_>) -> f64 {
        let norm_a = self.norm_squared();
        let norm_b = other.norm_squared();
        if norm_a == 0 || norm_b == 0 {
            return 0.0;
        }
        // Counts are integers, so dot and squared norms are exact; one sqrt
        // over their product keeps identical distributions at exactly 1.0.
        let denom = (norm_a as f64 * norm_b as f64).sqrt();
        (self.dot(other) as f64 / denom).min(1.0)
    }
}

/// Cosine similarity between the canonical-token frequencies of two texts.
///
/// Each text is tokenized as a whole, not per sentence.
pub fn word_frequency_similarity<L: Lexicon + ?Sized>(a: &str, b: &str, lexicon: &L) -> f64 {
    let tokens_a = canonicalize_tokens(&tokenize(a, lexicon), lexicon);
    let tokens_b = canonicalize_tokens(&tokenize(b, lexicon), lexicon);
    FrequencyVector::from_tokens(&tokens_a).cosine(&FrequencyVector::from_tokens(&tokens_b))
}
