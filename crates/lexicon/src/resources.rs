use std::path::Path;
use std::sync::{Arc, OnceLock};

use fxhash::FxHashSet;
use tracing::debug;

use crate::error::LexiconError;
use crate::loader::{parse_char_table, parse_synonym_table, parse_word_table, read_table};
use crate::synonyms::SynonymMap;
use crate::tables::{NOISE_CHARS, STOPWORDS, SYNONYM_PAIRS, TERMINATORS};

/// Read-only lookups the similarity pipeline depends on.
///
/// Implementations must be immutable once shared: the pipeline calls these
/// from several threads when parallel matching is enabled.
pub trait Lexicon: Send + Sync {
    /// Characters dropped entirely during normalization.
    fn is_noise(&self, ch: char) -> bool;
    /// Characters that close a sentence.
    fn is_terminator(&self, ch: char) -> bool;
    /// Tokens excluded from scoring.
    fn is_stopword(&self, token: &str) -> bool;
    /// Canonical form of `token`; returns `token` itself when unmapped.
    fn canonical<'a>(&'a self, token: &'a str) -> &'a str;
}

/// The concrete lexical bundle, frozen into hash lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalResources {
    noise: FxHashSet<char>,
    terminators: FxHashSet<char>,
    stopwords: FxHashSet<String>,
    synonyms: SynonymMap,
}

impl LexicalResources {
    /// The embedded default tables.
    pub fn builtin() -> Self {
        Self {
            noise: NOISE_CHARS.iter().copied().collect(),
            terminators: TERMINATORS.iter().copied().collect(),
            stopwords: STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
            synonyms: SynonymMap::from_pairs(SYNONYM_PAIRS.iter().copied()),
        }
    }

    /// An empty builder; every table must be supplied.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    pub fn noise_chars(&self) -> &FxHashSet<char> {
        &self.noise
    }

    pub fn terminators(&self) -> &FxHashSet<char> {
        &self.terminators
    }

    pub fn stopwords(&self) -> &FxHashSet<String> {
        &self.stopwords
    }

    pub fn synonyms(&self) -> &SynonymMap {
        &self.synonyms
    }
}

impl Default for LexicalResources {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon for LexicalResources {
    fn is_noise(&self, ch: char) -> bool {
        self.noise.contains(&ch)
    }

    fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    fn canonical<'a>(&'a self, token: &'a str) -> &'a str {
        self.synonyms.canonical(token)
    }
}

/// Process-wide builtin lexicon, constructed on first use. Every call returns
/// a handle to the same tables.
pub fn default_lexicon() -> Arc<LexicalResources> {
    static DEFAULT: OnceLock<Arc<LexicalResources>> = OnceLock::new();
    Arc::clone(DEFAULT.get_or_init(|| Arc::new(LexicalResources::builtin())))
}

/// Assembles a [`LexicalResources`] from builtin data, files, and in-memory entries.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    noise: FxHashSet<char>,
    terminators: FxHashSet<char>,
    stopwords: FxHashSet<String>,
    synonyms: SynonymMap,
}

impl LexiconBuilder {
    /// Start from the builtin tables.
    pub fn from_builtin() -> Self {
        let LexicalResources {
            noise,
            terminators,
            stopwords,
            synonyms,
        } = LexicalResources::builtin();
        Self {
            noise,
            terminators,
            stopwords,
            synonyms,
        }
    }

    pub fn noise_chars<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.noise.extend(chars);
        self
    }

    pub fn terminators<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.terminators.extend(chars);
        self
    }

    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add synonym pairs; they overwrite existing keys.
    pub fn synonyms<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.synonyms.extend(pairs);
        self
    }

    /// Replace the noise table with the contents of a character table file.
    pub fn noise_chars_from_file(mut self, path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        self.noise = parse_char_table(&read_table(path.as_ref())?);
        Ok(self)
    }

    /// Replace the terminator table with the contents of a character table file.
    pub fn terminators_from_file(mut self, path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        self.terminators = parse_char_table(&read_table(path.as_ref())?);
        Ok(self)
    }

    /// Replace the stopword table with the contents of a word table file.
    pub fn stopwords_from_file(mut self, path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        self.stopwords = parse_word_table(&read_table(path.as_ref())?)
            .into_iter()
            .collect();
        Ok(self)
    }

    /// Replace the synonym table with the contents of a synonym table file.
    pub fn synonyms_from_file(mut self, path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let pairs = parse_synonym_table(path, &read_table(path)?)?;
        self.synonyms = SynonymMap::from_pairs(pairs);
        Ok(self)
    }

    /// Freeze the tables. A lexicon without terminators is rejected.
    pub fn build(self) -> Result<LexicalResources, LexiconError> {
        if self.terminators.is_empty() {
            return Err(LexiconError::EmptyTable {
                table: "terminators",
            });
        }
        debug!(
            noise_chars = self.noise.len(),
            terminators = self.terminators.len(),
            stopwords = self.stopwords.len(),
            synonyms = self.synonyms.len(),
            "lexicon_built"
        );
        Ok(LexicalResources {
            noise: self.noise,
            terminators: self.terminators,
            stopwords: self.stopwords,
            synonyms: self.synonyms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write table");
        file
    }

    #[test]
    fn builtin_lookups() {
        let lex = LexicalResources::builtin();
        assert!(lex.is_noise('龘'));
        assert!(!lex.is_noise('天'));
        assert!(lex.is_terminator('。'));
        assert!(lex.is_terminator('，'));
        assert!(!lex.is_terminator('、'));
        assert!(lex.is_stopword("的"));
        assert!(lex.is_stopword("我们"));
        assert!(!lex.is_stopword("天"));
        assert_eq!(lex.canonical("马铃薯"), "土豆");
        assert_eq!(lex.canonical("测试"), "测试");
    }

    #[test]
    fn builtin_repeated_key_keeps_last_value() {
        let lex = LexicalResources::builtin();
        assert_eq!(lex.canonical("稍后"), "过会儿");
    }

    #[test]
    fn default_lexicon_is_shared() {
        let a = default_lexicon();
        let b = default_lexicon();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, LexicalResources::builtin());
    }

    #[test]
    fn empty_builder_requires_terminators() {
        let res = LexicalResources::builder().build();
        assert!(matches!(
            res,
            Err(LexiconError::EmptyTable {
                table: "terminators"
            })
        ));
    }

    #[test]
    fn in_memory_fixture() {
        let lex = LexicalResources::builder()
            .terminators(['.'])
            .noise_chars(['~'])
            .stopwords(["a"])
            .synonyms([("big", "large")])
            .build()
            .expect("fixture lexicon");
        assert!(lex.is_noise('~'));
        assert!(lex.is_terminator('.'));
        assert!(!lex.is_terminator('。'));
        assert!(lex.is_stopword("a"));
        assert_eq!(lex.canonical("big"), "large");
    }

    #[test]
    fn files_replace_builtin_tables() {
        let noise = table_file("~ ^\n");
        let stop = table_file("x\n");
        let syn = table_file("# pairs\nq\tz\n");

        let lex = LexiconBuilder::from_builtin()
            .noise_chars_from_file(noise.path())
            .and_then(|b| b.stopwords_from_file(stop.path()))
            .and_then(|b| b.synonyms_from_file(syn.path()))
            .and_then(LexiconBuilder::build)
            .expect("lexicon from files");

        assert!(lex.is_noise('^'));
        assert!(!lex.is_noise('龘'));
        assert!(lex.is_stopword("x"));
        assert!(!lex.is_stopword("的"));
        assert_eq!(lex.canonical("q"), "z");
        assert_eq!(lex.canonical("马铃薯"), "马铃薯");
        assert!(lex.is_terminator('。'));
    }

    #[test]
    fn empty_terminator_file_is_rejected() {
        let term = table_file("# nothing here\n");
        let res = LexiconBuilder::from_builtin()
            .terminators_from_file(term.path())
            .and_then(LexiconBuilder::build);
        assert!(matches!(res, Err(LexiconError::EmptyTable { .. })));
    }

    #[test]
    fn missing_file_reports_path() {
        let res = LexiconBuilder::from_builtin().stopwords_from_file("/no/such/stopwords.txt");
        match res {
            Err(LexiconError::Io { path, source }) => {
                assert_eq!(path, Path::new("/no/such/stopwords.txt"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
