#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! css-slim library
//!
//! This library provides the CSS minification pipeline behind the
//! `css-slim` CLI. It can be used programmatically as well.
//!
//! # Basic Example
//!
//! ```
//! use css_slim::pipeline::minify;
//!
//! assert_eq!(minify("/* comment */ .a { color: red; }"), ".a{color:red}");
//! ```
//!
//! # Size Accounting
//!
//! The pipeline entry point rejects blank input, applies the length
//! ceiling and reports the byte savings:
//!
//! ```
//! use css_slim::fmt::format_bytes;
//! use css_slim::pipeline::{MinifyPipeline, PipelineConfig};
//!
//! let pipeline = MinifyPipeline::new(PipelineConfig::default());
//! let outcome = pipeline.run(".a ,  .b {\n  margin : 0 ;\n}").unwrap();
//!
//! assert_eq!(outcome.output, ".a,.b{margin:0}");
//! assert_eq!(outcome.report.input_bytes, 27);
//! assert_eq!(outcome.report.output_bytes, 15);
//! assert_eq!(outcome.report.saved_percent, 44.4);
//! assert_eq!(format_bytes(outcome.report.input_bytes), "27B");
//! ```
//!
//! # Observing a Run
//!
//! Notifications and diagnostics go to injected sinks:
//!
//! ```
//! use css_slim::pipeline::{MemorySink, MinifyPipeline, NotificationKind, PipelineConfig};
//!
//! let sink = MemorySink::new();
//! let pipeline = MinifyPipeline::with_sinks(PipelineConfig::with_max_chars(4), &sink, &sink);
//!
//! let outcome = pipeline.run("a { b: c }").unwrap();
//! assert!(outcome.truncated);
//! assert_eq!(sink.notifications()[0].kind, NotificationKind::Warning);
//! assert_eq!(sink.diagnostics()[0].code, Some(413));
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// JSON report output
pub mod output;
/// CSS minification pipeline
pub mod pipeline;
