use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Retention rate must lie strictly between 0 and 1, got {0}")]
    InvalidRate(f64),
    #[error("Relation label for {0} must not be empty")]
    EmptyLabel(&'static str),
}

/// Relation labels the tree builder treats specially.
///
/// Labels are parser-specific strings; nothing checks them against a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationLabels {
    pub punct: String,
    pub cc: String,
    pub conj: String,
}

impl Default for RelationLabels {
    fn default() -> Self {
        Self {
            punct: "punct".into(),
            cc: "cc".into(),
            conj: "conj".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Target fraction of tokens to keep.
    pub rate: f64,
    pub relations: RelationLabels,
}

impl CompressionConfig {
    pub fn v0() -> Self {
        Self {
            rate: 0.5,
            relations: RelationLabels::default(),
        }
    }

    /// Read a JSON configuration; missing keys take their `v0` values.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration for a run: the file at `path` (or `v0`), with `rate`
    /// replacing the configured rate when given.
    pub fn resolve(path: Option<&Path>, rate: Option<f64>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::v0(),
        };
        if let Some(rate) = rate {
            validate_rate(rate)?;
            config.rate = rate;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_rate(self.rate)?;
        let labels = [
            ("punctuation", &self.relations.punct),
            ("coordinating conjunction", &self.relations.cc),
            ("conjunct", &self.relations.conj),
        ];
        for (name, label) in labels {
            if label.is_empty() {
                return Err(ConfigError::EmptyLabel(name));
            }
        }
        Ok(())
    }
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self::v0()
    }
}

pub fn validate_rate(rate: f64) -> Result<(), ConfigError> {
    if rate > 0.0 && rate < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRate(rate))
    }
}
