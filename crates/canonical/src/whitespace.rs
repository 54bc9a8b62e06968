//! Text normalization.
//!
//! [`normalize`] drops noise characters and collapses whitespace in a single
//! pass.
//!
//! # Whitespace Definition
//!
//! Unicode `White_Space` as reported by [`char::is_whitespace`], so tabs,
//! newlines, `U+3000` (ideographic space) and `U+00A0` all collapse.
//!
//! # Examples
//!
//! ```rust
//! use canonical::normalize;
//! use lexicon::LexicalResources;
//!
//! let lexicon = LexicalResources::builtin();
//! assert_eq!(normalize("  hello \r\n\t world  ", &lexicon), "hello world");
//! ```

use lexicon::Lexicon;

/// Strip noise characters and collapse whitespace runs to a single space.
///
/// Noise characters vanish without acting as separators, so `"a丽b"` becomes
/// `"ab"` when `丽` is noise. A whitespace run that straddles removed noise
/// still collapses to one space. The result never starts or ends with a space,
/// and whitespace-only input yields the empty string.
///
/// ```rust
/// use canonical::normalize;
/// use lexicon::LexicalResources;
///
/// let lexicon = LexicalResources::builtin();
/// assert_eq!(normalize("  a  b  ", &lexicon), "a b");
/// assert_eq!(normalize("龘天", &lexicon), "天");
/// assert_eq!(normalize(" \t\n ", &lexicon), "");
/// ```
pub fn normalize<L: Lexicon + ?Sized>(text: &str, lexicon: &L) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if lexicon.is_noise(ch) {
            continue;
        }
        if ch.is_whitespace() {
            // Leading whitespace never produces a space.
            if !normalized.is_empty() {
                pending_space = true;
            }
        } else {
            if pending_space {
                normalized.push(' ');
                pending_space = false;
            }
            normalized.push(ch);
        }
    }

    normalized
}
