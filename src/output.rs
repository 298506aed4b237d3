//! JSON output formatting for scripts and CI

use serde::{Deserialize, Serialize};

use crate::fmt::format_bytes;
use crate::pipeline::{MinifyOutcome, SizeReport};

/// JSON document printed by `css-slim minify --json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Run success status
    pub success: bool,
    /// Whether the input was cut at the length ceiling
    pub truncated: bool,
    /// Length ceiling in effect
    pub max_chars: usize,
    /// Size information
    pub size: SizeInfo,
    /// Minified CSS, when it was not written to a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Size report with human-readable companions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeInfo {
    /// Input size in bytes
    pub input_bytes: u64,
    /// Output size in bytes
    pub output_bytes: u64,
    /// Percentage saved, one decimal place
    pub saved_percent: f64,
    /// Formatted input size (e.g. "1.5KB")
    pub input_formatted: String,
    /// Formatted output size
    pub output_formatted: String,
}

impl SizeInfo {
    /// Create size info from a report
    pub fn new(report: &SizeReport) -> Self {
        Self {
            input_bytes: report.input_bytes,
            output_bytes: report.output_bytes,
            saved_percent: report.saved_percent,
            input_formatted: format_bytes(report.input_bytes),
            output_formatted: format_bytes(report.output_bytes),
        }
    }
}

impl JsonOutput {
    /// Build the document for a successful run
    ///
    /// `embed_output` controls whether the minified CSS is included.
    pub fn from_outcome(outcome: &MinifyOutcome, max_chars: usize, embed_output: bool) -> Self {
        Self {
            success: true,
            truncated: outcome.truncated,
            max_chars,
            size: SizeInfo::new(&outcome.report),
            output: embed_output.then(|| outcome.output.clone()),
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outcome() -> MinifyOutcome {
        MinifyOutcome {
            output: ".a{color:red}".to_string(),
            report: SizeReport::from_sizes(1536, 1024),
            truncated: false,
        }
    }

    #[test]
    fn test_size_info_formats_sizes() {
        let info = SizeInfo::new(&SizeReport::from_sizes(1536, 1024));
        assert_eq!(info.input_formatted, "1.5KB");
        assert_eq!(info.output_formatted, "1KB");
        assert_eq!(info.saved_percent, 33.3);
    }

    #[test]
    fn test_json_output_embeds_css_when_requested() {
        let json = JsonOutput::from_outcome(&sample_outcome(), 80_000, true)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["truncated"], false);
        assert_eq!(value["max_chars"], 80_000);
        assert_eq!(value["size"]["input_bytes"], 1536);
        assert_eq!(value["output"], ".a{color:red}");
    }

    #[test]
    fn test_json_output_omits_css_when_written_elsewhere() {
        let json = JsonOutput::from_outcome(&sample_outcome(), 80_000, false)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("output").is_none());
    }
}
