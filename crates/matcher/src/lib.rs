//! # textsim Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` scores how much of a candidate text appears to be derived from
//! an original text. It consumes [`canonical::PreparedText`] values and
//! combines two signals:
//!
//! - **Sentence-set similarity**: for every candidate sentence, the best
//!   LCS-based similarity against the original sentences; the fraction of
//!   candidate sentences reaching [`MatchConfig::match_threshold`].
//! - **Word-frequency similarity**: cosine similarity of whole-text canonical
//!   token counts.
//!
//! The final score is `sentence_weight * sentence + frequency_weight * frequency`,
//! clamped to `[0.0, 1.0]`.
//!
//! ## Core Types
//!
//! - [`MatchConfig`]: weights, thresholds, and the parallelism switch.
//! - [`SimilarityEngine`]: holds a shared lexicon and a validated config.
//! - [`SimilarityReport`]: final score plus the partial scores and the best
//!   original sentence for each candidate sentence.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use lexicon::LexicalResources;
//! use textsim_matcher::{MatchConfig, SimilarityEngine};
//!
//! let engine = SimilarityEngine::new(
//!     Arc::new(LexicalResources::builtin()),
//!     MatchConfig::default(),
//! )
//! .expect("valid config");
//!
//! let text = "今天天气晴朗。我要去公园散步。";
//! assert_eq!(engine.score(text, text), 1.0);
//! assert_eq!(engine.score("", text), 0.0);
//! ```
//!
//! ## Totality
//!
//! Scoring never fails. Configuration is validated once in
//! [`SimilarityEngine::new`]; after that every `&str` pair, including empty
//! strings, yields a score.

pub mod engine;
pub mod frequency;
pub mod lcs;
pub mod sentence_set;
pub mod types;

pub use crate::engine::SimilarityEngine;
pub use crate::frequency::{word_frequency_similarity, FrequencyVector};
pub use crate::lcs::{lcs_length, lcs_similarity, pair_similarity};
pub use crate::sentence_set::{match_sentences, sentence_set_similarity, SentenceSetOutcome};
pub use crate::types::{MatchConfig, MatchError, SentenceMatch, SimilarityReport};
