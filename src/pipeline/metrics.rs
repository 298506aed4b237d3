//! Size accounting for a minify run

use serde::{Deserialize, Serialize};

/// Byte counts before and after minification
///
/// Both sizes are UTF-8 byte lengths. `saved_percent` is rounded to one
/// decimal place and is `0.0` when the input is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeReport {
    /// Size of the text fed to the minifier (bytes)
    pub input_bytes: u64,
    /// Size of the minified output (bytes)
    pub output_bytes: u64,
    /// Percentage of the input removed, one decimal place
    pub saved_percent: f64,
}

impl SizeReport {
    /// Build a report from the text actually minified and its output
    ///
    /// # Examples
    ///
    /// ```
    /// use css_slim::pipeline::SizeReport;
    ///
    /// let report = SizeReport::measure(".a{color:red;}", ".a{color:red}");
    /// assert_eq!(report.input_bytes, 14);
    /// assert_eq!(report.output_bytes, 13);
    /// assert_eq!(report.saved_percent, 7.1);
    /// ```
    pub fn measure(input: &str, output: &str) -> Self {
        Self::from_sizes(input.len() as u64, output.len() as u64)
    }

    /// Build a report from raw byte counts
    pub fn from_sizes(input_bytes: u64, output_bytes: u64) -> Self {
        Self {
            input_bytes,
            output_bytes,
            saved_percent: saved_percent(input_bytes, output_bytes),
        }
    }

    /// Size reduction in bytes (negative if the output grew)
    pub fn saved_bytes(&self) -> i64 {
        self.input_bytes as i64 - self.output_bytes as i64
    }
}

/// Percentage of `input_bytes` removed, rounded to one decimal place
fn saved_percent(input_bytes: u64, output_bytes: u64) -> f64 {
    if input_bytes == 0 {
        return 0.0;
    }
    let raw = (input_bytes as f64 - output_bytes as f64) / input_bytes as f64 * 100.0;
    round1(raw)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
