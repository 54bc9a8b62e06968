//! Command-line front end: argument parsing, file I/O, and exit codes.
//!
//! The binary in `src/main.rs` only installs logging and maps [`CliError`] to
//! a process exit status; everything else lives here so it can be tested
//! without spawning a process.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigLoadError, TextsimConfig};
use crate::{compare_with_engine, format_percentage, SimilarityEngine, SimilarityReport};

/// textsim: score how much of a candidate text is copied from an original.
#[derive(Debug, Clone, Parser)]
#[command(name = "textsim", version, about)]
pub struct Args {
    /// Path to the original text (UTF-8)
    pub original: PathBuf,

    /// Path to the candidate text checked against the original (UTF-8)
    pub candidate: PathBuf,

    /// Path the percentage result is written to
    pub output: PathBuf,

    /// YAML configuration with lexical tables and matcher settings
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also print the full similarity report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Failures of a command-line run, each with its own exit status.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            _ => CliError::Io { path, source },
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Internal(_) => 1,
            CliError::InvalidArguments(_) => 2,
            CliError::NotFound { .. } => 3,
            CliError::PermissionDenied { .. } => 4,
            CliError::Io { .. } => 5,
            CliError::Config(_) => 6,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Percentage string written to the output file, e.g. `91.03%`.
    pub percentage: String,
    pub report: SimilarityReport,
}

fn ensure_path(path: &Path, role: &str) -> Result<(), CliError> {
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        return Err(CliError::InvalidArguments(format!(
            "{role} path must not be empty"
        )));
    }
    Ok(())
}

/// Read a UTF-8 text file. Invalid UTF-8 is reported as an I/O failure.
pub fn read_text(path: &Path) -> Result<String, CliError> {
    ensure_path(path, "input")?;
    fs::read_to_string(path).map_err(|err| CliError::from_io(path, err))
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_result(path: &Path, contents: &str) -> Result<(), CliError> {
    ensure_path(path, "output")?;
    fs::write(path, contents).map_err(|err| CliError::from_io(path, err))
}

/// Load configuration and build the engine. Without a config file the
/// builtin lexicon and default weights are used.
pub fn build_engine(config: Option<&Path>) -> Result<SimilarityEngine, CliError> {
    let cfg = match config {
        Some(path) => {
            ensure_path(path, "config")?;
            TextsimConfig::from_file(path).map_err(|err| match err {
                ConfigLoadError::FileRead(source) => CliError::from_io(path, source),
                other => CliError::Config(other),
            })?
        }
        None => TextsimConfig::default(),
    };

    let lexicon = cfg.build_lexicon()?;
    SimilarityEngine::new(Arc::new(lexicon), cfg.match_config())
        .map_err(|err| CliError::Config(ConfigLoadError::Validation(err.to_string())))
}

/// Read both inputs, score them, and write the percentage to the output path.
pub fn run(args: &Args) -> Result<Outcome, CliError> {
    ensure_path(&args.output, "output")?;
    let engine = build_engine(args.config.as_deref())?;

    let original = read_text(&args.original)?;
    let candidate = read_text(&args.candidate)?;
    debug!(
        original_bytes = original.len(),
        candidate_bytes = candidate.len(),
        "inputs_read"
    );

    let report = compare_with_engine(&engine, &original, &candidate);
    let percentage = format_percentage(report.score);
    write_result(&args.output, &percentage)?;

    info!(
        score = report.score,
        output = %args.output.display(),
        "result_written"
    );

    Ok(Outcome { percentage, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn io_errors_are_classified() {
        let path = Path::new("x.txt");
        let not_found = CliError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        let denied = CliError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        let bad_data = CliError::from_io(path, io::Error::from(io::ErrorKind::InvalidData));

        assert_eq!(not_found.exit_code(), 3);
        assert_eq!(denied.exit_code(), 4);
        assert_eq!(bad_data.exit_code(), 5);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            CliError::Internal("boom".into()),
            CliError::InvalidArguments("empty".into()),
            CliError::NotFound { path: "a".into() },
            CliError::PermissionDenied { path: "a".into() },
            CliError::Io {
                path: "a".into(),
                source: io::Error::other("disk"),
            },
            CliError::Config(ConfigLoadError::Validation("bad".into())),
        ];
        let mut codes: Vec<u8> = errors.iter().map(CliError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_path_is_invalid_argument() {
        assert!(matches!(
            read_text(Path::new("")),
            Err(CliError::InvalidArguments(_))
        ));
        assert!(matches!(
            write_result(Path::new("   "), "0.00%"),
            Err(CliError::InvalidArguments(_))
        ));
    }

    #[test]
    fn missing_input_is_not_found() {
        let dir = tempdir().unwrap();
        let err = read_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, CliError::NotFound { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn invalid_utf8_is_io_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [0xff, 0xfe, 0x41]).unwrap();
        let err = read_text(&path).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn run_writes_percentage() {
        let dir = tempdir().unwrap();
        let original = dir.path().join("orig.txt");
        let candidate = dir.path().join("copy.txt");
        let output = dir.path().join("ans.txt");
        fs::write(&original, "今天是周一，天气晴朗。我要去公园散步。").unwrap();
        fs::write(&candidate, "今天是周一，天气晴朗。我要去公园散步。").unwrap();

        let args = Args {
            original,
            candidate,
            output: output.clone(),
            config: None,
            json: false,
        };
        let outcome = run(&args).unwrap();

        assert_eq!(outcome.percentage, "100.00%");
        assert_eq!(fs::read_to_string(&output).unwrap(), "100.00%");
        assert_eq!(outcome.report.matched_sentences, 3);
    }

    #[test]
    fn bad_config_maps_to_configuration_exit() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("textsim.yaml");
        fs::write(&config, "version: \"9\"\n").unwrap();

        let err = build_engine(Some(&config)).unwrap_err();
        assert_eq!(err.exit_code(), 6);

        let err = build_engine(Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn args_parse_positionals_and_flags() {
        let args = Args::try_parse_from([
            "textsim", "orig.txt", "copy.txt", "ans.txt", "--config", "t.yaml", "--json",
        ])
        .unwrap();
        assert_eq!(args.original, PathBuf::from("orig.txt"));
        assert_eq!(args.config, Some(PathBuf::from("t.yaml")));
        assert!(args.json);

        assert!(Args::try_parse_from(["textsim", "orig.txt", "copy.txt"]).is_err());
    }
}
