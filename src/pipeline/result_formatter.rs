//! Minify result formatting and display

use console::style;

use super::executor::MinifyOutcome;
use crate::fmt::{format_bytes, format_char_count, CapacityLevel, CHART, SPARKLES, WARNING};

/// Formats and displays minify results
pub struct ResultFormatter;

impl ResultFormatter {
    /// Render the capacity gauge, e.g. `1.2k / 80k`
    pub fn capacity_line(chars: usize, ceiling: usize) -> String {
        let text = format!(
            "{} / {}",
            format_char_count(chars),
            format_char_count(ceiling)
        );
        match CapacityLevel::for_len(chars, ceiling) {
            CapacityLevel::Normal => style(text).dim().to_string(),
            CapacityLevel::Caution => style(text).yellow().to_string(),
            CapacityLevel::Critical => style(text).red().bold().to_string(),
        }
    }

    /// Print a formatted summary of a minify run to stderr
    ///
    /// `chars` is the character count of the input before truncation.
    pub fn print_summary(outcome: &MinifyOutcome, chars: usize, ceiling: usize) {
        eprint!("{}", Self::render_summary(outcome, chars, ceiling));
    }

    /// Render the summary without printing it
    pub fn render_summary(outcome: &MinifyOutcome, chars: usize, ceiling: usize) -> String {
        let report = &outcome.report;
        let mut out = String::new();

        out.push_str(&format!("\n{} {}\n", CHART, style("Minify Summary").bold()));
        out.push_str(&format!(
            "   {} Input:  {}  ({})\n",
            style("→").dim(),
            style(format_bytes(report.input_bytes)).yellow(),
            Self::capacity_line(chars, ceiling)
        ));
        out.push_str(&format!(
            "   {} Output: {}\n",
            style("→").dim(),
            style(format_bytes(report.output_bytes)).green().bold()
        ));
        out.push_str(&format!(
            "   {} Saved:  {} ({})\n",
            style("→").dim(),
            style(format!("{:.1}%", report.saved_percent)).green().bold(),
            format_bytes(report.saved_bytes().max(0) as u64)
        ));

        if outcome.truncated {
            out.push_str(&format!(
                "\n{} Input was truncated to {} characters\n",
                WARNING,
                style(ceiling).yellow()
            ));
        }

        out.push_str(&format!("\n{} {}\n", SPARKLES, style("SUCCESS").green().bold()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SizeReport;

    fn outcome(input: u64, output: u64, truncated: bool) -> MinifyOutcome {
        MinifyOutcome {
            output: String::new(),
            report: SizeReport::from_sizes(input, output),
            truncated,
        }
    }

    #[test]
    fn test_capacity_line_shows_count_and_ceiling() {
        console::set_colors_enabled(false);
        assert_eq!(ResultFormatter::capacity_line(500, 80_000), "500 / 80k");
        assert_eq!(ResultFormatter::capacity_line(1234, 80_000), "1.2k / 80k");
    }

    #[test]
    fn test_render_summary_reports_sizes_and_savings() {
        console::set_colors_enabled(false);
        let summary = ResultFormatter::render_summary(&outcome(1536, 1024, false), 1536, 80_000);

        assert!(summary.contains("Minify Summary"));
        assert!(summary.contains("Input:  1.5KB  (1.5k / 80k)"));
        assert!(summary.contains("Output: 1KB"));
        assert!(summary.contains("Saved:  33.3% (512B)"));
        assert!(!summary.contains("truncated"));
    }

    #[test]
    fn test_render_summary_with_truncation() {
        console::set_colors_enabled(false);
        let summary = ResultFormatter::render_summary(&outcome(80_000, 100, true), 90_000, 80_000);

        assert!(summary.contains("Input was truncated to 80000 characters"));
        assert!(summary.contains("90k / 80k"));
    }

    #[test]
    fn test_render_summary_with_zero_reduction() {
        console::set_colors_enabled(false);
        let summary = ResultFormatter::render_summary(&outcome(10, 10, false), 10, 80_000);
        assert!(summary.contains("Saved:  0.0% (0B)"));
    }

    #[test]
    fn test_render_summary_with_huge_ceiling() {
        console::set_colors_enabled(false);
        let summary = ResultFormatter::render_summary(&outcome(4, 4, false), 4, usize::MAX);
        assert!(summary.contains("Input:  4B  (4 / "));
    }
}
