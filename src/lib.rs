//! Workspace umbrella crate for textsim.
//!
//! This crate stitches together the lexicon, canonical, and matcher stages so
//! callers can score an original/candidate text pair with a single call. The
//! `textsim` binary in `src/main.rs` wraps the same API with file I/O.

pub mod cli;
pub mod config;

pub use canonical::{
    canonicalize_tokens, normalize, prepare, prepare_with, split_sentences, tokenize, tokenize_with,
    CharSegmenter, PreparedSentence, PreparedText, Segmenter, Token,
};
pub use config::{ConfigLoadError, LexiconYamlConfig, TextsimConfig};
pub use lexicon::{
    default_lexicon, LexicalResources, Lexicon, LexiconBuilder, LexiconError, SynonymMap,
};
pub use matcher::{
    lcs_length, lcs_similarity, match_sentences, pair_similarity, sentence_set_similarity,
    word_frequency_similarity, FrequencyVector, MatchConfig, MatchError, SentenceMatch,
    SentenceSetOutcome, SimilarityEngine, SimilarityReport,
};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use thiserror::Error;

/// Errors that can occur while running a comparison through the pipeline.
///
/// Scoring is total over text input; only configuration can fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    #[error("matcher configuration rejected: {0}")]
    Match(#[from] MatchError),
}

/// Metrics observer for comparisons.
pub trait PipelineMetrics: Send + Sync {
    fn record_comparison(
        &self,
        latency: Duration,
        result: Result<&SimilarityReport, &PipelineError>,
    );
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record(self, result: Result<&SimilarityReport, &PipelineError>) {
        self.recorder.record_comparison(self.start.elapsed(), result);
    }
}

fn default_engine() -> &'static SimilarityEngine {
    static ENGINE: OnceLock<SimilarityEngine> = OnceLock::new();
    ENGINE.get_or_init(SimilarityEngine::with_defaults)
}

/// Similarity of `candidate` to `original` in `[0.0, 1.0]` using the builtin
/// lexicon and default weights.
///
/// ```
/// let text = "今天是周一，天气晴朗。我要去公园散步。";
/// assert_eq!(textsim::compute_similarity(text, text), 1.0);
/// assert_eq!(textsim::compute_similarity(text, ""), 0.0);
/// ```
pub fn compute_similarity(original: &str, candidate: &str) -> f64 {
    compare_with_engine(default_engine(), original, candidate).score
}

/// Same as [`compute_similarity`] with an explicit lexicon and configuration.
pub fn compute_similarity_with<L>(
    original: &str,
    candidate: &str,
    lexicon: Arc<L>,
    cfg: &MatchConfig,
) -> Result<f64, PipelineError>
where
    L: Lexicon + ?Sized,
{
    compare(original, candidate, lexicon, cfg).map(|report| report.score)
}

/// Full comparison report with an explicit lexicon and configuration.
/// Fails only when `cfg` does not validate.
pub fn compare<L>(
    original: &str,
    candidate: &str,
    lexicon: Arc<L>,
    cfg: &MatchConfig,
) -> Result<SimilarityReport, PipelineError>
where
    L: Lexicon + ?Sized,
{
    match SimilarityEngine::new(lexicon, cfg.clone()) {
        Ok(engine) => Ok(compare_with_engine(&engine, original, candidate)),
        Err(err) => {
            let err = PipelineError::from(err);
            if let Some(span) = MetricsSpan::start() {
                span.record(Err(&err));
            }
            Err(err)
        }
    }
}

/// Compare with a prebuilt engine, reporting to the installed metrics recorder.
pub fn compare_with_engine<L>(
    engine: &SimilarityEngine<L>,
    original: &str,
    candidate: &str,
) -> SimilarityReport
where
    L: Lexicon + ?Sized,
{
    let span = MetricsSpan::start();
    let report = engine.compare(original, candidate);
    if let Some(span) = span {
        span.record(Ok(&report));
    }
    report
}

/// Render a score as a percentage with two decimals, e.g. `0.9103` -> `"91.03%"`.
pub fn format_percentage(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGINAL: &str = "今天是周一，天气晴朗。我要去公园散步。";
    const PARAPHRASE: &str = "今日是星期一，天气晴。我要去花园行走。";

    #[test]
    fn compute_similarity_uses_builtin_defaults() {
        let expected = SimilarityEngine::with_defaults().score(ORIGINAL, PARAPHRASE);
        assert_eq!(compute_similarity(ORIGINAL, PARAPHRASE), expected);
        assert!((compute_similarity(ORIGINAL, PARAPHRASE) - 1.0).abs() <= 0.1);
    }

    #[test]
    fn compute_similarity_with_rejects_bad_config() {
        let cfg = MatchConfig::default().with_weights(1.5, 0.3);
        let result =
            compute_similarity_with(ORIGINAL, ORIGINAL, Arc::new(LexicalResources::builtin()), &cfg);
        assert!(matches!(result, Err(PipelineError::Match(_))));
    }

    #[test]
    fn compare_returns_report() {
        let report = compare(
            ORIGINAL,
            PARAPHRASE,
            Arc::new(LexicalResources::builtin()),
            &MatchConfig::default(),
        )
        .expect("default config is valid");
        assert_eq!(report.original_sentences, 3);
        assert_eq!(report.candidate_sentences, 3);
        assert_eq!(report.score, compute_similarity(ORIGINAL, PARAPHRASE));
    }

    #[test]
    fn percentage_has_two_decimals() {
        assert_eq!(format_percentage(1.0), "100.00%");
        assert_eq!(format_percentage(0.0), "0.00%");
        assert_eq!(format_percentage(0.910_262_993_215_138_7), "91.03%");
        assert_eq!(format_percentage(0.5), "50.00%");
    }

    #[derive(Default)]
    struct CountingMetrics {
        events: Arc<RwLock<Vec<&'static str>>>,
    }

    impl CountingMetrics {
        fn snapshot(&self) -> Vec<&'static str> {
            self.events.read().unwrap().clone()
        }
    }

    impl PipelineMetrics for CountingMetrics {
        fn record_comparison(
            &self,
            _latency: Duration,
            result: Result<&SimilarityReport, &PipelineError>,
        ) {
            let label = if result.is_ok() {
                "comparison_ok"
            } else {
                "comparison_err"
            };
            self.events.write().unwrap().push(label);
        }
    }

    #[test]
    fn metrics_recorder_tracks_comparison_outcome() {
        let metrics = Arc::new(CountingMetrics::default());
        set_pipeline_metrics(Some(metrics.clone()));

        let _ = compute_similarity(ORIGINAL, PARAPHRASE);
        let bad = MatchConfig::default().with_early_exit(-1.0);
        let result = compare(ORIGINAL, ORIGINAL, Arc::new(LexicalResources::builtin()), &bad);
        assert!(result.is_err());

        let events = metrics.snapshot();
        assert!(events.contains(&"comparison_ok"));
        assert!(events.contains(&"comparison_err"));

        set_pipeline_metrics(None);
    }
}
