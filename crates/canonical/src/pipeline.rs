use lexicon::Lexicon;

use crate::document::{PreparedSentence, PreparedText};
use crate::sentence::split_sentences;
use crate::token::{canonicalize_tokens, tokenize_with, CharSegmenter, Segmenter, Token};
use crate::whitespace::normalize;

/// Normalize, split, tokenize, and canonicalize `text` with the default segmenter.
pub fn prepare<L: Lexicon + ?Sized>(text: &str, lexicon: &L) -> PreparedText {
    prepare_with(text, lexicon, &CharSegmenter)
}

/// Same as [`prepare`] with an explicit segmenter.
pub fn prepare_with<L, S>(text: &str, lexicon: &L, segmenter: &S) -> PreparedText
where
    L: Lexicon + ?Sized,
    S: Segmenter + ?Sized,
{
    let normalized = normalize(text, lexicon);

    let sentences = split_sentences(&normalized, lexicon)
        .into_iter()
        .map(|sentence| PreparedSentence {
            text: sentence.to_string(),
            tokens: canonical_tokens(sentence, lexicon, segmenter),
        })
        .collect();

    // Whole-text tokens are taken from the normalized text, not stitched from
    // sentences, so offsets refer to `normalized`.
    let tokens = canonical_tokens(&normalized, lexicon, segmenter);

    PreparedText {
        normalized,
        sentences,
        tokens,
    }
}

fn canonical_tokens<L, S>(text: &str, lexicon: &L, segmenter: &S) -> Vec<Token>
where
    L: Lexicon + ?Sized,
    S: Segmenter + ?Sized,
{
    canonicalize_tokens(&tokenize_with(text, lexicon, segmenter), lexicon)
}
