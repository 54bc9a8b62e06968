use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning knobs for a comparison.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded in
/// higher-level configs. The defaults reproduce the reference scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Configuration schema version.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,
    /// Weight of the sentence-set score in the final score.
    #[serde(default = "MatchConfig::default_sentence_weight")]
    pub sentence_weight: f64,
    /// Weight of the word-frequency score in the final score.
    #[serde(default = "MatchConfig::default_frequency_weight")]
    pub frequency_weight: f64,
    /// A candidate sentence counts as matched when its best pair similarity
    /// reaches this value.
    #[serde(default = "MatchConfig::default_match_threshold")]
    pub match_threshold: f64,
    /// Stop scanning original sentences for a candidate sentence once its best
    /// similarity reaches this value. A later original sentence that would
    /// score higher is never seen.
    #[serde(default = "MatchConfig::default_early_exit")]
    pub early_exit: f64,
    /// Score candidate sentences on the rayon pool. Results are identical to
    /// the sequential path.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_sentence_weight() -> f64 {
        0.7
    }

    pub(crate) fn default_frequency_weight() -> f64 {
        0.3
    }

    pub(crate) fn default_match_threshold() -> f64 {
        0.5
    }

    pub(crate) fn default_early_exit() -> f64 {
        0.9
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, sentence_weight: f64, frequency_weight: f64) -> Self {
        self.sentence_weight = sentence_weight;
        self.frequency_weight = frequency_weight;
        self
    }

    pub fn with_match_threshold(mut self, match_threshold: f64) -> Self {
        self.match_threshold = match_threshold;
        self
    }

    pub fn with_early_exit(mut self, early_exit: f64) -> Self {
        self.early_exit = early_exit;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }

        let unit_fields = [
            ("sentence_weight", self.sentence_weight),
            ("frequency_weight", self.frequency_weight),
            ("match_threshold", self.match_threshold),
            ("early_exit", self.early_exit),
        ];
        for (name, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            sentence_weight: Self::default_sentence_weight(),
            frequency_weight: Self::default_frequency_weight(),
            match_threshold: Self::default_match_threshold(),
            early_exit: Self::default_early_exit(),
            use_parallel: false,
        }
    }
}

/// Best original sentence found for one candidate sentence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SentenceMatch {
    pub candidate_index: usize,
    /// `None` when no original sentence had a positive similarity.
    pub original_index: Option<usize>,
    pub similarity: f64,
}

/// Full breakdown of a comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityReport {
    /// Final score in `[0.0, 1.0]`.
    pub score: f64,
    /// Fraction of candidate sentences with a matching original sentence.
    pub sentence_score: f64,
    /// Cosine similarity of whole-text token frequencies.
    pub frequency_score: f64,
    pub original_sentences: usize,
    pub candidate_sentences: usize,
    pub matched_sentences: usize,
    pub best_matches: Vec<SentenceMatch>,
}

impl SimilarityReport {
    /// Report for a comparison where either side has no sentences.
    pub fn incomparable(original_sentences: usize, candidate_sentences: usize) -> Self {
        Self {
            score: 0.0,
            sentence_score: 0.0,
            frequency_score: 0.0,
            original_sentences,
            candidate_sentences,
            matched_sentences: 0,
            best_matches: Vec::new(),
        }
    }
}

/// Errors produced by the matching layer.
///
/// Scoring itself never fails; only engine construction validates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.sentence_weight, 0.7);
        assert_eq!(cfg.frequency_weight, 0.3);
        assert_eq!(cfg.match_threshold, 0.5);
        assert_eq!(cfg.early_exit, 0.9);
        assert!(!cfg.use_parallel);
    }

    #[test]
    fn zero_version_rejected() {
        let cfg = MatchConfig {
            version: 0,
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("version")),
        }
    }

    #[test]
    fn out_of_range_weight_rejected() {
        let cfg = MatchConfig::default().with_weights(1.5, 0.3);
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("sentence_weight")),
        }
    }

    #[test]
    fn nan_threshold_rejected() {
        let cfg = MatchConfig::default().with_match_threshold(f64::NAN);
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("match_threshold")),
        }
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: MatchConfig =
            serde_json::from_str(r#"{"use_parallel": true}"#).expect("deserialize");
        assert_eq!(cfg, MatchConfig::default().with_parallel(true));
    }
}
