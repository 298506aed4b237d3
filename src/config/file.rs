//! Configuration file data structures

use serde::{Deserialize, Serialize};

use crate::error::CssSlimError;
use crate::pipeline::{PipelineConfig, MAX_CHARS};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".css-slim.toml";

/// css-slim configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Maximum input length in characters
    #[serde(rename = "max-chars", default = "default_max_chars")]
    pub max_chars: usize,

    /// Print notification lines on stderr
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_max_chars() -> usize {
    MAX_CHARS
}

fn default_notifications() -> bool {
    true
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            notifications: default_notifications(),
        }
    }
}

impl ConfigFile {
    /// Check value constraints that the TOML schema can't express
    pub fn validate(&self) -> Result<(), CssSlimError> {
        if self.max_chars == 0 {
            return Err(CssSlimError::InvalidConfig {
                reason: "max-chars must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Pipeline settings derived from this file
    ///
    /// `max_chars_override` (the `--max-chars` flag) wins over the file.
    pub fn pipeline_config(&self, max_chars_override: Option<usize>) -> PipelineConfig {
        PipelineConfig::with_max_chars(max_chars_override.unwrap_or(self.max_chars))
    }
}
