//! Prepared text types.
//!
//! A [`PreparedText`] holds everything the matcher needs about one side of a
//! comparison: the normalized text, its sentences with canonical tokens, and
//! the canonical tokens of the whole text. Building it once per input keeps
//! sentence-pair scoring from re-tokenizing the same sentence for every pair.
//!
//! # Structure
//!
//! ```text
//! PreparedText
//! ├── normalized: String               # noise stripped, whitespace collapsed
//! ├── sentences: Vec<PreparedSentence>
//! │   ├── text: String                 # trimmed sentence, terminator included
//! │   └── tokens: Vec<Token>           # canonical tokens, offsets into `text`
//! └── tokens: Vec<Token>               # canonical tokens, offsets into `normalized`
//! ```

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// One sentence and its canonical tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreparedSentence {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// A text ready for comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreparedText {
    pub normalized: String,
    pub sentences: Vec<PreparedSentence>,
    pub tokens: Vec<Token>,
}

impl PreparedText {
    /// True when the text produced no sentences and cannot be compared.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Sentence texts in order.
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }
}
