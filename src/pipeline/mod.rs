//! CSS minification pipeline
//!
//! Implements the complete minify run:
//! 1. input gate (blank rejection, length ceiling)
//! 2. lexical rewrite rules
//! 3. size accounting
//!
//! Notices and diagnostics leave through the sink ports in [`sinks`].

pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod metrics;
pub mod result_formatter;
pub mod rules;
pub mod sinks;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use executor::{MinifyOutcome, MinifyPipeline};
pub use input::{prepare_input, PreparedInput, MAX_CHARS};
pub use metrics::SizeReport;
pub use result_formatter::ResultFormatter;
pub use rules::{minify, Rule};
pub use sinks::{
    ConsoleNotifier, Diagnostic, DiagnosticSink, LogDiagnostics, MemorySink, NoOpSink,
    Notification, NotificationKind, NotificationSink, Severity,
};

/// Minify `source` with the default configuration and no sinks
///
/// # Examples
///
/// ```
/// use css_slim::pipeline::minify_css;
///
/// let outcome = minify_css(".a { color: red; }").unwrap();
/// assert_eq!(outcome.output, ".a{color:red}");
/// assert!(minify_css("   ").is_err());
/// ```
pub fn minify_css(source: &str) -> Result<MinifyOutcome, PipelineError> {
    MinifyPipeline::default().run(source)
}
