//! textsim lexical resources.
//!
//! Everything the similarity pipeline needs to know about the language it is
//! comparing lives here: which characters are noise, which close a sentence,
//! which tokens are stopwords, and how tokens canonicalize through synonyms.
//!
//! The pipeline consumes these through the [`Lexicon`] trait, so tests can
//! inject small fixture tables while production uses
//! [`LexicalResources::builtin`] or tables loaded from disk via
//! [`LexiconBuilder`].
//!
//! ## Invariants
//!
//! - A built lexicon is immutable; share it behind `Arc` or `&'static`.
//! - Synonym lookup is a total function: unmapped tokens map to themselves.
//! - Synonym insertion is last-write-wins and chains are never followed.
//!
//! ## Known limitation
//!
//! The pipeline tokenizes one character at a time, so multi-character
//! stopwords and multi-character synonym keys never match a token. The
//! builtin synonym table consists entirely of such keys.

mod error;
mod loader;
mod resources;
mod synonyms;
pub mod tables;

pub use crate::error::LexiconError;
pub use crate::resources::{default_lexicon, LexicalResources, Lexicon, LexiconBuilder};
pub use crate::synonyms::SynonymMap;
