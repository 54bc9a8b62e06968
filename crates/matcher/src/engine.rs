use std::sync::Arc;
use std::time::Instant;

use canonical::{prepare, PreparedText};
use lexicon::{default_lexicon, LexicalResources, Lexicon};
use tracing::debug;

use crate::frequency::FrequencyVector;
use crate::sentence_set::match_sentences;
use crate::types::{MatchConfig, MatchError, SimilarityReport};


/// Compares texts against a shared lexicon with a validated configuration.
///
/// Build one engine at startup and reuse it; comparisons take `&self` and the
/// engine is `Send + Sync`.
#[derive(Debug)]
pub struct SimilarityEngine<L: Lexicon + ?Sized = LexicalResources> {
    lexicon: Arc<L>,
    cfg: MatchConfig,
}

impl<L: Lexicon + ?Sized> Clone for SimilarityEngine<L> {
    fn clone(&self) -> Self {
        Self {
            lexicon: Arc::clone(&self.lexicon),
            cfg: self.cfg.clone(),
        }
    }
}

impl SimilarityEngine<LexicalResources> {
    /// Engine over the shared builtin lexicon and default configuration.
    pub fn with_defaults() -> Self {
        Self {
            lexicon: default_lexicon(),
            cfg: MatchConfig::default(),
        }
    }
}

impl<L: Lexicon + ?Sized> SimilarityEngine<L> {
    /// Construct an engine, rejecting invalid configuration.
    pub fn new(lexicon: Arc<L>, cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { lexicon, cfg })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Normalize, split, and tokenize one side of a comparison.
    pub fn prepare(&self, text: &str) -> PreparedText {
        prepare(text, self.lexicon.as_ref())
    }

    /// Final score in `[0.0, 1.0]`.
    pub fn score(&self, original: &str, candidate: &str) -> f64 {
        self.compare(original, candidate).score
    }

    /// Compare raw texts and return the full breakdown.
    pub fn compare(&self, original: &str, candidate: &str) -> SimilarityReport {
        let original = self.prepare(original);
        let candidate = self.prepare(candidate);
        self.compare_prepared(&original, &candidate)
    }

    /// Compare texts that were already prepared with this engine's lexicon.
    pub fn compare_prepared(
        &self,
        original: &PreparedText,
        candidate: &PreparedText,
    ) -> SimilarityReport {
        let start = Instant::now();

        if original.is_empty() || candidate.is_empty() {
            debug!(
                original_sentences = original.sentence_count(),
                candidate_sentences = candidate.sentence_count(),
                "comparison_skipped_empty"
            );
            return SimilarityReport::incomparable(
                original.sentence_count(),
                candidate.sentence_count(),
            );
        }

        let sentences = match_sentences(&original.sentences, &candidate.sentences, &self.cfg);
        let frequency_score = FrequencyVector::from_tokens(&original.tokens)
            .cosine(&FrequencyVector::from_tokens(&candidate.tokens));

        let combined = self.cfg.sentence_weight * sentences.score
            + self.cfg.frequency_weight * frequency_score;
        let score = combined.clamp(0.0, 1.0);

        debug!(
            original_sentences = original.sentence_count(),
            candidate_sentences = candidate.sentence_count(),
            matched_sentences = sentences.matched,
            sentence_score = sentences.score,
            frequency_score,
            score,
            parallel = self.cfg.use_parallel,
            elapsed_micros = start.elapsed().as_micros() as u64,
            "comparison_complete"
        );

        SimilarityReport {
            score,
            sentence_score: sentences.score,
            frequency_score,
            original_sentences: original.sentence_count(),
            candidate_sentences: candidate.sentence_count(),
            matched_sentences: sentences.matched,
            best_matches: sentences.best_matches,
        }
    }
}
