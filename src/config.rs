//! YAML Configuration File Support for textsim
//!
//! This module loads the lexical tables and matcher settings from a single
//! YAML file. Every section is optional; a missing section keeps the builtin
//! tables and the default weights.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # textsim configuration
//! version: "1.0"
//!
//! lexicon:
//!   noise_chars: tables/noise.txt
//!   terminators: tables/terminators.txt
//!   stopwords: tables/stopwords.txt
//!   synonyms: tables/synonyms.tsv
//!   extra_synonyms:
//!     今日: 今天
//!
//! matcher:
//!   version: 1
//!   sentence_weight: 0.7
//!   frequency_weight: 0.3
//!   match_threshold: 0.5
//!   early_exit: 0.9
//!   use_parallel: false
//! ```
//!
//! Relative table paths are resolved against the directory of the YAML file
//! when it is loaded with [`TextsimConfig::from_file`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use lexicon::{LexicalResources, LexiconBuilder, LexiconError};
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("failed to load lexical tables: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Top-level YAML configuration for a textsim run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct TextsimConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Lexical table overrides
    #[serde(default)]
    pub lexicon: LexiconYamlConfig,

    /// Scoring weights and thresholds
    #[serde(default)]
    pub matcher: MatchConfig,

    /// Directory relative table paths resolve against.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl TextsimConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: TextsimConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.lexicon.validate()?;
        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))?;

        Ok(())
    }

    /// Matcher settings for [`matcher::SimilarityEngine::new`].
    pub fn match_config(&self) -> MatchConfig {
        self.matcher.clone()
    }

    /// Build the lexicon: builtin tables, replaced by any configured table
    /// files, then extended with `extra_synonyms`.
    pub fn build_lexicon(&self) -> Result<LexicalResources, ConfigLoadError> {
        let lex = &self.lexicon;
        let mut builder = LexiconBuilder::from_builtin();

        if let Some(path) = &lex.noise_chars {
            builder = builder.noise_chars_from_file(self.resolve(path))?;
        }
        if let Some(path) = &lex.terminators {
            builder = builder.terminators_from_file(self.resolve(path))?;
        }
        if let Some(path) = &lex.stopwords {
            builder = builder.stopwords_from_file(self.resolve(path))?;
        }
        if let Some(path) = &lex.synonyms {
            builder = builder.synonyms_from_file(self.resolve(path))?;
        }
        builder = builder.synonyms(
            lex.extra_synonyms
                .iter()
                .map(|(word, canonical)| (word.as_str(), canonical.as_str())),
        );

        Ok(builder.build()?)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Default for TextsimConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            lexicon: LexiconYamlConfig::default(),
            matcher: MatchConfig::default(),
            base_dir: None,
        }
    }
}

/// Lexical table YAML configuration. Each path replaces the builtin table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexiconYamlConfig {
    #[serde(default)]
    pub noise_chars: Option<PathBuf>,

    #[serde(default)]
    pub terminators: Option<PathBuf>,

    #[serde(default)]
    pub stopwords: Option<PathBuf>,

    #[serde(default)]
    pub synonyms: Option<PathBuf>,

    /// Pairs merged after the synonym table; they win on conflicting keys.
    #[serde(default)]
    pub extra_synonyms: BTreeMap<String, String>,
}

impl LexiconYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        let paths = [
            ("noise_chars", &self.noise_chars),
            ("terminators", &self.terminators),
            ("stopwords", &self.stopwords),
            ("synonyms", &self.synonyms),
        ];
        for (name, path) in paths {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(ConfigLoadError::Validation(format!(
                    "lexicon.{name} must not be an empty path"
                )));
            }
        }

        for (word, canonical) in &self.extra_synonyms {
            if word.trim().is_empty() || canonical.trim().is_empty() {
                return Err(ConfigLoadError::Validation(
                    "lexicon.extra_synonyms entries must be non-empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon::Lexicon;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
matcher:
  sentence_weight: 0.6
  frequency_weight: 0.4
"#;

        let config = TextsimConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.matcher.sentence_weight, 0.6);
        assert_eq!(config.matcher.frequency_weight, 0.4);
        assert_eq!(config.matcher.early_exit, 0.9);
        assert!(config.lexicon.synonyms.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
matcher:
  use_parallel: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = TextsimConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert!(config.match_config().use_parallel);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = TextsimConfig::from_file(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = TextsimConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert_eq!(config.match_config(), MatchConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unsupported_version() {
        let result = TextsimConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = TextsimConfig::from_yaml("version: [1.0\n");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_matcher_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  match_threshold: 1.5
"#;

        let result = TextsimConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("match_threshold must be between"));
    }

    #[test]
    fn test_empty_extra_synonym_rejected() {
        let yaml = r#"
version: "1.0"
lexicon:
  extra_synonyms:
    今日: ""
"#;

        let result = TextsimConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigLoadError::Validation(msg)) if msg.contains("extra_synonyms")));
    }

    #[test]
    fn test_default_lexicon_is_builtin() {
        let lex = TextsimConfig::default().build_lexicon().unwrap();
        let builtin = LexicalResources::builtin();
        assert_eq!(lex.noise_chars(), builtin.noise_chars());
        assert_eq!(lex.stopwords(), builtin.stopwords());
        assert_eq!(lex.synonyms().len(), builtin.synonyms().len());
    }

    #[test]
    fn test_relative_tables_resolve_against_config_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("terminators.txt"), "# clause ends\n| \n").unwrap();
        fs::write(dir.path().join("synonyms.tsv"), "x\ty\n").unwrap();
        let yaml = r#"
version: "1.0"
lexicon:
  terminators: terminators.txt
  synonyms: synonyms.tsv
  extra_synonyms:
    a: b
"#;
        let config_path = dir.path().join("textsim.yaml");
        fs::write(&config_path, yaml).unwrap();

        let config = TextsimConfig::from_file(&config_path).unwrap();
        let lex = config.build_lexicon().unwrap();

        assert!(lex.is_terminator('|'));
        assert!(!lex.is_terminator('。'));
        assert_eq!(lex.canonical("x"), "y");
        assert_eq!(lex.canonical("a"), "b");
        assert_eq!(lex.synonyms().len(), 2);
        assert_eq!(lex.noise_chars(), LexicalResources::builtin().noise_chars());
    }

    #[test]
    fn test_missing_table_file_is_lexicon_error() {
        let yaml = r#"
version: "1.0"
lexicon:
  stopwords: /nonexistent/textsim/stopwords.txt
"#;
        let config = TextsimConfig::from_yaml(yaml).unwrap();
        let result = config.build_lexicon();
        assert!(matches!(
            result,
            Err(ConfigLoadError::Lexicon(LexiconError::Io { .. }))
        ));
    }

    #[test]
    fn test_full_yaml_roundtrip() {
        let yaml = r#"
version: "1.0"
name: "production"
lexicon:
  extra_synonyms:
    今日: 今天
    星期一: 周一
matcher:
  version: 1
  sentence_weight: 0.7
  frequency_weight: 0.3
  match_threshold: 0.5
  early_exit: 0.9
  use_parallel: false
"#;

        let config = TextsimConfig::from_yaml(yaml).unwrap();
        let rendered = serde_yaml::to_string(&config).unwrap();
        let reparsed = TextsimConfig::from_yaml(&rendered).unwrap();

        assert_eq!(reparsed, config);
        assert_eq!(reparsed.lexicon.extra_synonyms.len(), 2);
        assert_eq!(reparsed.matcher, MatchConfig::default());
    }
}
