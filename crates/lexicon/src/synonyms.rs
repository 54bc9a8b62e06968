//! Synonym canonicalization table.

use fxhash::FxHashMap;

/// Maps a word to its canonical replacement.
///
/// Lookups are a single hash probe. Chains are not followed: if `a -> b` and
/// `b -> c` are both present, `a` canonicalizes to `b`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymMap {
    entries: FxHashMap<String, String>,
}

impl SynonymMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(word, canonical)` pairs. Repeated keys keep the last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::new();
        map.extend(pairs);
        map
    }

    /// Insert a pair, overwriting any previous mapping for `word`.
    pub fn insert(&mut self, word: impl Into<String>, canonical: impl Into<String>) {
        self.entries.insert(word.into(), canonical.into());
    }

    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (word, canonical) in pairs {
            self.insert(word, canonical);
        }
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Canonical form of `word`, or `word` itself when unmapped.
    pub fn canonical<'a>(&'a self, word: &'a str) -> &'a str {
        self.get(word).unwrap_or(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
