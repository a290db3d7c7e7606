//! Configuration for the lexpack service.
//!
//! Configuration is a plain serde structure with defaults for every field, so
//! a JSON file only needs to name the values it overrides:
//!
//! ```json
//! {
//!   "default_mode": "varbyte",
//!   "corrector": { "candidate_limit": 5 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::CompressionMode;
use crate::error::{LexpackError, Result};
use crate::spelling::CorrectorConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexpackConfig {
    /// Mode used when a request does not name one.
    pub default_mode: CompressionMode,
    /// Spelling corrector settings.
    pub corrector: CorrectorConfig,
}

impl LexpackConfig {
    /// Load configuration from a JSON file and validate it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: LexpackConfig = serde_json::from_str(&content).map_err(|e| {
            LexpackError::config(format!("failed to parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for unusable values.
    pub fn validate(&self) -> Result<()> {
        self.corrector.validate()
    }
}
