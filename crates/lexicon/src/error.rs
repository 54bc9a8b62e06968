use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling lexical resources.
///
/// These only surface at startup; a built [`LexicalResources`](crate::LexicalResources)
/// never fails a lookup.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed synonym entry in {path} at line {line}: {content:?}")]
    MalformedSynonym {
        path: PathBuf,
        line: usize,
        content: String,
    },
    #[error("lexicon table `{table}` is empty")]
    EmptyTable { table: &'static str },
}
