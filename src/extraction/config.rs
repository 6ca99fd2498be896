use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid extraction config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Thresholds for the ranked extraction pipeline.
///
/// Missing fields fall back to [`ExtractionConfig::reference`] when read
/// from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    /// Exclusive lower bound on token length.
    pub min_length: usize,
    /// Tokens kept after deduplication and length sort.
    pub limit_after_dedup: usize,
    /// Words returned.
    pub limit_final: usize,
}

impl ExtractionConfig {
    /// Longer than 12 characters, 100 shortest, 10 returned.
    pub const fn reference() -> Self {
        Self {
            min_length: 12,
            limit_after_dedup: 100,
            limit_final: 10,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::reference()
    }
}
