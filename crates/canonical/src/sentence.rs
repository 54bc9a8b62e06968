//! Sentence segmentation by terminator punctuation.

use lexicon::Lexicon;

use crate::token::is_blank_char;

/// Split normalized text into sentences.
///
/// Each sentence ends at a terminator character, which stays attached to the
/// sentence it closes. Trailing text without a terminator becomes the last
/// sentence. Sentences are trimmed of whitespace and control characters, and
/// empty ones are dropped; a sentence made only of punctuation is still kept.
///
/// ```rust
/// use canonical::split_sentences;
/// use lexicon::LexicalResources;
///
/// let lexicon = LexicalResources::builtin();
/// assert_eq!(split_sentences("A。B！C", &lexicon), vec!["A。", "B！", "C"]);
/// assert!(split_sentences("", &lexicon).is_empty());
/// ```
pub fn split_sentences<'a, L: Lexicon + ?Sized>(text: &'a str, lexicon: &L) -> Vec<&'a str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if lexicon.is_terminator(ch) {
            let end = idx + ch.len_utf8();
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, raw: &'a str) {
    let sentence = raw.trim_matches(is_blank_char);
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon::LexicalResources;

    #[test]
    fn terminators_stay_with_their_sentence() {
        let lex = LexicalResources::builtin();
        let text = "这是第一句。这是第二句！这是第三句？这是最后一句";
        let sentences = split_sentences(text, &lex);
        assert_eq!(
            sentences,
            vec!["这是第一句。", "这是第二句！", "这是第三句？", "这是最后一句"]
        );
    }

    #[test]
    fn commas_split_clauses() {
        let lex = LexicalResources::builtin();
        let sentences = split_sentences("今天是周一，天气晴朗。", &lex);
        assert_eq!(sentences, vec!["今天是周一，", "天气晴朗。"]);
    }

    #[test]
    fn sentences_are_trimmed() {
        let lex = LexicalResources::builtin();
        let sentences = split_sentences("Hi. There! ", &lex);
        assert_eq!(sentences, vec!["Hi.", "There!"]);
    }

    #[test]
    fn punctuation_only_sentences_are_kept() {
        let lex = LexicalResources::builtin();
        assert_eq!(split_sentences("。。", &lex), vec!["。", "。"]);
        assert_eq!(split_sentences("好。 ！", &lex), vec!["好。", "！"]);
    }

    #[test]
    fn blank_segments_are_dropped() {
        let lex = LexicalResources::builtin();
        assert!(split_sentences(" ", &lex).is_empty());
        assert_eq!(split_sentences("a. ", &lex), vec!["a."]);
    }

    #[test]
    fn control_characters_are_trimmed_like_whitespace() {
        let lex = LexicalResources::builtin();
        assert_eq!(split_sentences("好。\u{1}", &lex), vec!["好。"]);
        assert_eq!(split_sentences("好。\u{1F}", &lex), vec!["好。"]);
        assert_eq!(split_sentences("\u{0}坏。\u{7F}", &lex), vec!["坏。"]);
        assert!(split_sentences("\u{1C}\u{1D}", &lex).is_empty());
    }

    #[test]
    fn concatenation_reconstructs_text_without_spaces() {
        let lex = LexicalResources::builtin();
        let text = "一。二，三";
        let joined: String = split_sentences(text, &lex).concat();
        assert_eq!(joined, text);
    }
}
