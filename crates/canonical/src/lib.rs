//! textsim canonical text layer.
//!
//! Turns raw text into the canonical units the matcher compares.
//!
//! ## What we do
//!
//! - Noise-character removal and whitespace collapsing ([`normalize`])
//! - Sentence splitting on terminator punctuation ([`split_sentences`])
//! - Character-granularity tokenization with stopword filtering ([`tokenize`])
//! - Synonym canonicalization ([`canonicalize_tokens`])
//! - One-shot preparation of a whole text ([`prepare`])
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no global state. Every function is total over
//! `&str`: malformed or empty text produces empty output, never an error.
//! The language-specific knowledge comes from the [`lexicon::Lexicon`] passed
//! in by the caller.
//!
//! ## Segmentation
//!
//! Tokenization goes through the [`Segmenter`] trait. [`CharSegmenter`] emits
//! one token per character; a dictionary segmenter can replace it through
//! [`tokenize_with`] / [`prepare_with`] without touching anything downstream.

mod document;
mod pipeline;
mod sentence;
mod token;
mod whitespace;

pub use crate::document::{PreparedSentence, PreparedText};
pub use crate::pipeline::{prepare, prepare_with};
pub use crate::sentence::split_sentences;
pub use crate::token::{canonicalize_tokens, tokenize, tokenize_with, CharSegmenter, Segmenter, Token};
pub use crate::whitespace::normalize;

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon::LexicalResources;

    #[test]
    fn stages_compose() {
        let lex = LexicalResources::builtin();
        let normalized = normalize(" 苹果 香蕉 苹果 ", &lex);
        let sentences = split_sentences(&normalized, &lex);
        assert_eq!(sentences, vec!["苹果 香蕉 苹果"]);

        let tokens = canonicalize_tokens(&tokenize(sentences[0], &lex), &lex);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["苹", "果", "香", "蕉", "苹", "果"]);
    }

    #[test]
    fn prepared_text_serializes() {
        let lex = LexicalResources::builtin();
        let doc = prepare("天气晴。", &lex);
        let json = serde_json::to_string(&doc).expect("serialize");
        let back: PreparedText = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, doc);
    }
}
