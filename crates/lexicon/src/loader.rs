//! Plain-text table formats for replacing the builtin tables.
//!
//! - character tables: every non-whitespace character is a member
//! - word tables: one entry per line
//! - synonym tables: `word<whitespace>canonical` per line
//!
//! In all formats a line whose first non-blank character is `#` is a comment.

use std::fs;
use std::path::Path;

use fxhash::FxHashSet;

use crate::error::LexiconError;

pub(crate) fn read_table(path: &Path) -> Result<String, LexiconError> {
    fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

pub(crate) fn parse_char_table(text: &str) -> FxHashSet<char> {
    content_lines(text)
        .flat_map(|(_, line)| line.chars())
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

pub(crate) fn parse_word_table(text: &str) -> Vec<String> {
    content_lines(text).map(|(_, line)| line.to_string()).collect()
}

pub(crate) fn parse_synonym_table(
    path: &Path,
    text: &str,
) -> Result<Vec<(String, String)>, LexiconError> {
    let mut pairs = Vec::new();
    for (line_no, line) in content_lines(text) {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(word), Some(canonical), None) => {
                pairs.push((word.to_string(), canonical.to_string()));
            }
            _ => {
                return Err(LexiconError::MalformedSynonym {
                    path: path.to_path_buf(),
                    line: line_no,
                    content: line.to_string(),
                });
            }
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_table_ignores_comments_and_spacing() {
        let set = parse_char_table("# noise\n龘 靐\n齉\n\n");
        assert_eq!(set.len(), 3);
        assert!(set.contains(&'靐'));
        assert!(!set.contains(&'#'));
    }

    #[test]
    fn word_table_trims_lines() {
        let words = parse_word_table("  的  \n# comment\n我们\n");
        assert_eq!(words, vec!["的".to_string(), "我们".to_string()]);
    }

    #[test]
    fn synonym_table_accepts_tabs_and_spaces() {
        let pairs = parse_synonym_table(Path::new("syn.tsv"), "周一\t星期一\n晴朗 晴\n").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("周一".to_string(), "星期一".to_string()),
                ("晴朗".to_string(), "晴".to_string()),
            ]
        );
    }

    #[test]
    fn synonym_table_reports_bad_line() {
        let err = parse_synonym_table(Path::new("syn.tsv"), "周一\t星期一\n孤立\n").unwrap_err();
        match err {
            LexiconError::MalformedSynonym { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "孤立");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn synonym_table_rejects_extra_fields() {
        let res = parse_synonym_table(Path::new("syn.tsv"), "a b c\n");
        assert!(matches!(res, Err(LexiconError::MalformedSynonym { line: 1, .. })));
    }
}
