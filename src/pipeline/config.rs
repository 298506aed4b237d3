//! Pipeline configuration types

use super::input::MAX_CHARS;

/// Settings for a minify run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Maximum input length in characters; longer input is truncated
    pub max_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_chars: MAX_CHARS,
        }
    }
}

impl PipelineConfig {
    /// Configuration with a custom length ceiling
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self { max_chars }
    }
}
