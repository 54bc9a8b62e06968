use serde::{Deserialize, Serialize};

use lexicon::Lexicon;

/// A token with its UTF-8 byte offsets in the segmented text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Byte offset (inclusive) in the segmented text.
    pub start: usize,
    /// Byte offset (exclusive) in the segmented text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits text into candidate tokens.
///
/// This is the seam for swapping the segmentation strategy. Segmenters do not
/// filter anything; stopword and whitespace removal happen in [`tokenize_with`].
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<Token>;
}

/// One token per `char`.
///
/// Stands in for real word segmentation on scripts written without spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharSegmenter;

impl Segmenter for CharSegmenter {
    fn segment(&self, text: &str) -> Vec<Token> {
        text.char_indices()
            .map(|(start, ch)| {
                let end = start + ch.len_utf8();
                Token {
                    text: text[start..end].to_string(),
                    start,
                    end,
                }
            })
            .collect()
    }
}

/// Tokenize with [`CharSegmenter`], dropping blanks and stopwords.
///
/// Order and duplicates are preserved.
///
/// ```rust
/// use canonical::tokenize;
/// use lexicon::LexicalResources;
///
/// let lexicon = LexicalResources::builtin();
/// let texts: Vec<String> = tokenize("我的 书", &lexicon).into_iter().map(|t| t.text).collect();
/// assert_eq!(texts, vec!["书"]);
/// ```
pub fn tokenize<L: Lexicon + ?Sized>(text: &str, lexicon: &L) -> Vec<Token> {
    tokenize_with(text, lexicon, &CharSegmenter)
}

/// Tokenize with an explicit segmenter.
pub fn tokenize_with<L, S>(text: &str, lexicon: &L, segmenter: &S) -> Vec<Token>
where
    L: Lexicon + ?Sized,
    S: Segmenter + ?Sized,
{
    segmenter
        .segment(text)
        .into_iter()
        .filter(|token| !is_blank(&token.text) && !lexicon.is_stopword(&token.text))
        .collect()
}

/// Replace each token's text with its canonical synonym. Offsets are kept.
pub fn canonicalize_tokens<L: Lexicon + ?Sized>(tokens: &[Token], lexicon: &L) -> Vec<Token> {
    tokens
        .iter()
        .map(|token| Token {
            text: lexicon.canonical(&token.text).to_string(),
            start: token.start,
            end: token.end,
        })
        .collect()
}

// Control characters count as blank alongside whitespace.
pub(crate) fn is_blank_char(ch: char) -> bool {
    ch.is_whitespace() || ch.is_control()
}

fn is_blank(text: &str) -> bool {
    text.chars().all(is_blank_char)
}
