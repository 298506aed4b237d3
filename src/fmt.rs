//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Rocket emoji for launch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

const UNITS: [&str; 3] = ["B", "KB", "MB"];

/// Format bytes as a compact human-readable size
///
/// Picks the largest of `B`, `KB`, `MB` (base 1024) whose quotient is at
/// least 1, rounds to two decimals and drops trailing zeros.
///
/// # Examples
///
/// ```
/// use css_slim::fmt::format_bytes;
///
/// assert_eq!(format_bytes(0), "0B");
/// assert_eq!(format_bytes(512), "512B");
/// assert_eq!(format_bytes(1024), "1KB");
/// assert_eq!(format_bytes(1536), "1.5KB");
/// assert_eq!(format_bytes(1_048_576), "1MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit + 1 < UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / scale as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}{}", rounded, UNITS[unit])
}

/// Format a character count the way the capacity gauge shows it
///
/// Counts above 999 are shown in thousands with one decimal, dropping a
/// trailing `.0`.
///
/// ```
/// use css_slim::fmt::format_char_count;
///
/// assert_eq!(format_char_count(999), "999");
/// assert_eq!(format_char_count(1234), "1.2k");
/// assert_eq!(format_char_count(80_000), "80k");
/// ```
pub fn format_char_count(chars: usize) -> String {
    if chars <= 999 {
        return chars.to_string();
    }
    let thousands = (chars as f64 / 100.0).round() / 10.0;
    format!("{}k", thousands)
}

/// How close an input is to the length ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLevel {
    /// At most half of the ceiling
    Normal,
    /// More than half of the ceiling
    Caution,
    /// More than 90% of the ceiling
    Critical,
}

impl CapacityLevel {
    /// Classify `chars` against `ceiling`
    pub fn for_len(chars: usize, ceiling: usize) -> Self {
        // chars > ceiling * 0.9, in integers wide enough not to overflow
        let (chars, ceiling) = (chars as u128, ceiling as u128);
        if chars * 10 > ceiling * 9 {
            Self::Critical
        } else if chars * 2 > ceiling {
            Self::Caution
        } else {
            Self::Normal
        }
    }
}
