//! Sentence-set similarity: what fraction of candidate sentences have a
//! close enough counterpart among the original sentences.

use canonical::{canonicalize_tokens, tokenize, PreparedSentence, Token};
use lexicon::Lexicon;
use rayon::prelude::*;

use crate::lcs::lcs_similarity;
use crate::types::{MatchConfig, SentenceMatch};

/// Outcome of matching candidate sentences against original sentences.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceSetOutcome {
    /// `matched / candidate_count`, or `0.0` with no candidate sentences.
    pub score: f64,
    pub matched: usize,
    /// One entry per candidate sentence, in candidate order.
    pub best_matches: Vec<SentenceMatch>,
}

/// Score sentences given as text, tokenizing each once.
pub fn sentence_set_similarity<L, S>(
    original: &[S],
    candidate: &[S],
    lexicon: &L,
    cfg: &MatchConfig,
) -> f64
where
    L: Lexicon + ?Sized,
    S: AsRef<str>,
{
    let prepare = |sentences: &[S]| -> Vec<Vec<Token>> {
        sentences
            .iter()
            .map(|s| canonicalize_tokens(&tokenize(s.as_ref(), lexicon), lexicon))
            .collect()
    };
    let original = prepare(original);
    let candidate = prepare(candidate);
    match_token_sets(&original, &candidate, cfg).score
}

/// Score prepared sentences.
pub fn match_sentences(
    original: &[PreparedSentence],
    candidate: &[PreparedSentence],
    cfg: &MatchConfig,
) -> SentenceSetOutcome {
    let original: Vec<&[Token]> = original.iter().map(|s| s.tokens.as_slice()).collect();
    let candidate: Vec<&[Token]> = candidate.iter().map(|s| s.tokens.as_slice()).collect();
    match_token_sets(&original, &candidate, cfg)
}

fn match_token_sets<T>(original: &[T], candidate: &[T], cfg: &MatchConfig) -> SentenceSetOutcome
where
    T: AsRef<[Token]> + Sync,
{
    if candidate.is_empty() {
        return SentenceSetOutcome {
            score: 0.0,
            matched: 0,
            best_matches: Vec::new(),
        };
    }

    let best_matches: Vec<SentenceMatch> = if cfg.use_parallel {
        candidate
            .par_iter()
            .enumerate()
            .map(|(idx, tokens)| best_match(idx, tokens.as_ref(), original, cfg.early_exit))
            .collect()
    } else {
        candidate
            .iter()
            .enumerate()
            .map(|(idx, tokens)| best_match(idx, tokens.as_ref(), original, cfg.early_exit))
            .collect()
    };

    let matched = best_matches
        .iter()
        .filter(|m| m.similarity >= cfg.match_threshold)
        .count();

    SentenceSetOutcome {
        score: matched as f64 / candidate.len() as f64,
        matched,
        best_matches,
    }
}

/// Highest pair similarity for one candidate sentence, scanning originals in
/// order and stopping once `early_exit` is reached.
fn best_match<T: AsRef<[Token]>>(
    candidate_index: usize,
    candidate: &[Token],
    original: &[T],
    early_exit: f64,
) -> SentenceMatch {
    let mut best = SentenceMatch {
        candidate_index,
        original_index: None,
        similarity: 0.0,
    };

    for (idx, tokens) in original.iter().enumerate() {
        let similarity = lcs_similarity(tokens.as_ref(), candidate);
        if similarity > best.similarity {
            best.similarity = similarity;
            best.original_index = Some(idx);
        }
        if best.similarity >= early_exit {
            break;
        }
    }

    best
}
