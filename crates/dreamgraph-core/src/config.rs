//! Dreamgraph Configuration Management
//!
//! Vocabulary lists, stopwords, contraction rules and relation markers are
//! immutable configuration: loaded once (defaults, a TOML file, environment
//! overrides) and then handed to the pipeline explicitly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Word lists used for classification
    pub vocabulary: VocabularyConfig,

    /// Contraction expansion rules
    pub normalizer: NormalizerConfig,

    /// Stopword filtering
    pub tokenizer: TokenizerConfig,

    /// Marker words for positional relations
    pub relations: RelationConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_override()
    }

    /// Load from a TOML file. Missing sections keep their defaults.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Load an optional file, apply environment overrides and validate
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge with environment variables (env takes precedence)
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = lookup("LOG_FORMAT") {
            self.logging.json_format = match format.to_lowercase().as_str() {
                "json" => true,
                "text" | "pretty" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "LOG_FORMAT".to_string(),
                        value: format,
                    })
                }
            };
        }

        Ok(self)
    }

    /// Reject entries that could never match a token
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_words("vocabulary.places", &self.vocabulary.places)?;
        check_words("vocabulary.objects", &self.vocabulary.objects)?;
        check_words("vocabulary.descriptors", &self.vocabulary.descriptors)?;
        check_words("tokenizer.stopwords", &self.tokenizer.stopwords)?;
        check_words("relations.above_markers", &self.relations.above_markers)?;
        check_words(
            "relations.located_in_markers",
            &self.relations.located_in_markers,
        )?;

        for contraction in &self.normalizer.contractions {
            if contraction.from.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "normalizer.contractions.from".to_string(),
                    value: contraction.from.clone(),
                });
            }
        }

        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}

/// Tokens are maximal `[a-z]+` runs, so configured words must be too
fn check_words(key: &str, words: &[String]) -> Result<(), ConfigError> {
    for word in words {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: word.clone(),
            });
        }
    }
    Ok(())
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

/// Classification word lists, checked in precedence order:
/// places, then objects, then descriptors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub places: Vec<String>,
    pub objects: Vec<String>,
    pub descriptors: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            places: to_strings(&[
                "beach", "city", "forest", "desert", "ocean", "mountain", "space", "room",
                "street", "house", "clouds",
            ]),
            objects: to_strings(&[
                "tower",
                "towers",
                "ship",
                "car",
                "door",
                "tree",
                "trees",
                "building",
                "buildings",
            ]),
            descriptors: to_strings(&[
                "floating",
                "jacked",
                "dark",
                "bright",
                "glowing",
                "ruined",
                "ancient",
                "futuristic",
                "glass",
            ]),
        }
    }
}

/// A whole-word rewrite applied after lowercasing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contraction {
    pub from: String,
    pub to: String,
}

impl Contraction {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Normalizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Applied in list order
    pub contractions: Vec<Contraction>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            contractions: vec![
                Contraction::new("i'm", "i am"),
                Contraction::new("can't", "cannot"),
                Contraction::new("won't", "will not"),
            ],
        }
    }
}

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Words that never become entities. Marker words stay scannable.
    pub stopwords: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            stopwords: to_strings(&[
                "i", "am", "is", "are", "was", "were", "a", "an", "the", "and", "or", "but",
                "at", "in", "on", "of", "to", "with", "above", "below",
            ]),
        }
    }
}

/// Relation marker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationConfig {
    /// Words that trigger an `above` skip-search
    pub above_markers: Vec<String>,

    /// Words that trigger a `located_in` skip-search
    pub located_in_markers: Vec<String>,
}

impl Default for RelationConfig {
    fn default() -> Self {
        Self {
            above_markers: to_strings(&["above"]),
            located_in_markers: to_strings(&["in", "at"]),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// JSON format for logs
    pub json_format: bool,

    /// Include file/line in logs
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            include_location: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Failed to serialize config: {0}")]
    SerializeError(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.vocabulary.places.len(), 11);
        assert_eq!(config.vocabulary.objects.len(), 9);
        assert_eq!(config.vocabulary.descriptors.len(), 9);
        assert_eq!(config.tokenizer.stopwords.len(), 20);
        assert_eq!(config.normalizer.contractions.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_markers_are_stopwords() {
        let config = AppConfig::default();
        let markers = config
            .relations
            .above_markers
            .iter()
            .chain(&config.relations.located_in_markers);

        for marker in markers {
            assert!(config.tokenizer.stopwords.contains(marker));
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let rendered = config.to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[vocabulary]\nplaces = [\"castle\"]\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.vocabulary.places, vec!["castle".to_string()]);
        assert_eq!(config.vocabulary.objects, VocabularyConfig::default().objects);
        assert_eq!(config.tokenizer, TokenizerConfig::default());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file("/nonexistent/dreamgraph.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileReadError { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[vocabulary\nplaces = 3").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_validate_rejects_unmatchable_words() {
        let mut config = AppConfig::default();
        config.vocabulary.objects.push("Space Ship".to_string());

        match config.validate() {
            Err(ConfigError::InvalidValue { key, value }) => {
                assert_eq!(key, "vocabulary.objects");
                assert_eq!(value, "Space Ship");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }

        let mut config = AppConfig::default();
        config.tokenizer.stopwords.push(String::new());
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.normalizer.contractions.push(Contraction::new(" ", "x"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [("LOG_LEVEL", "trace"), ("LOG_FORMAT", "json")]
            .into_iter()
            .collect();

        let config = AppConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.logging.level, "trace");
        assert!(config.logging.json_format);
    }

    #[test]
    fn test_invalid_log_format() {
        let err = AppConfig::default()
            .with_overrides(|key| (key == "LOG_FORMAT").then(|| "xml".to_string()))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
