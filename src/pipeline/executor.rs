//! Minify pipeline executor
//!
//! Runs one minification end to end:
//! 1. reject blank input
//! 2. apply the length ceiling
//! 3. run the rewrite rules
//! 4. measure the size reduction
//!
//! Every condition worth telling the user about is reported here, through
//! the injected sinks, never from inside the rewrite rules.

use super::config::PipelineConfig;
use super::error::PipelineError;
use super::input::{ensure_not_blank, prepare_input};
use super::metrics::SizeReport;
use super::rules::minify;
use super::sinks::{
    Diagnostic, DiagnosticSink, NoOpSink, Notification, NotificationKind, NotificationSink,
    Severity,
};

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct MinifyOutcome {
    /// Minified CSS
    pub output: String,
    /// Size accounting for the text actually minified
    pub report: SizeReport,
    /// Whether the input was cut at the length ceiling first
    pub truncated: bool,
}

/// Entry point tying the input gate, rewrite rules and size accounting together
///
/// # Examples
///
/// ```
/// use css_slim::pipeline::{MinifyPipeline, PipelineConfig, PipelineError};
///
/// let pipeline = MinifyPipeline::new(PipelineConfig::default());
///
/// let outcome = pipeline.run("/* comment */ .a { color: red; }")?;
/// assert_eq!(outcome.output, ".a{color:red}");
/// assert!(!outcome.truncated);
///
/// assert_eq!(pipeline.run("  \n\t"), Err(PipelineError::BlankInput));
/// # Ok::<(), PipelineError>(())
/// ```
pub struct MinifyPipeline<N: NotificationSink = NoOpSink, D: DiagnosticSink = NoOpSink> {
    config: PipelineConfig,
    notifier: N,
    diagnostics: D,
}

impl MinifyPipeline {
    /// Create a pipeline that reports nothing
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_sinks(config, NoOpSink, NoOpSink)
    }
}

impl Default for MinifyPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl<N: NotificationSink, D: DiagnosticSink> MinifyPipeline<N, D> {
    /// Create a pipeline with custom notification and diagnostic sinks
    pub fn with_sinks(config: PipelineConfig, notifier: N, diagnostics: D) -> Self {
        Self {
            config,
            notifier,
            diagnostics,
        }
    }

    /// Minify `source`
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::BlankInput`] if `source` is empty or
    /// whitespace-only. Nothing is minified or measured in that case.
    pub fn run(&self, source: &str) -> Result<MinifyOutcome, PipelineError> {
        if let Err(e) = ensure_not_blank(source) {
            self.notifier.notify(Notification::new(
                NotificationKind::Error,
                "Enter some CSS to minify",
                "400 Bad Request",
            ));
            return Err(e);
        }

        let ceiling = self.config.max_chars;
        let prepared = prepare_input(source, ceiling);
        if prepared.truncated {
            log::warn!("input exceeds {} chars, truncating", ceiling);
            self.notifier.notify(Notification::new(
                NotificationKind::Warning,
                format!("Character limit exceeded ({}). Input was truncated.", ceiling),
                "413 Payload Too Large",
            ));
            self.diagnostics.record(
                Diagnostic::new(
                    "BUFFER_OVERFLOW",
                    format!("Input exceeded {} chars. Truncated automatically.", ceiling),
                    Severity::Warning,
                )
                .with_code(413),
            );
        }

        let output = minify(prepared.text);
        let report = SizeReport::measure(prepared.text, &output);
        log::info!(
            "minified {} -> {} bytes ({:.1}% saved)",
            report.input_bytes,
            report.output_bytes,
            report.saved_percent
        );

        self.notifier.notify(Notification::new(
            NotificationKind::Success,
            "CSS minified successfully",
            "200 OK",
        ));
        self.diagnostics.record(Diagnostic::new(
            "MINIFY_COMPLETE",
            format!(
                "Minification complete. Reduced by {:.1}%.",
                report.saved_percent
            ),
            Severity::Info,
        ));

        Ok(MinifyOutcome {
            output,
            report,
            truncated: prepared.truncated,
        })
    }
}
