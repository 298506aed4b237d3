//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Proper exit codes for scripting
//!
//! # Examples
//!
//! ```
//! use css_slim::error::CssSlimError;
//! use css_slim::pipeline::minify_css;
//!
//! match minify_css("   ") {
//!     Ok(outcome) => println!("{}", outcome.output),
//!     Err(e) => {
//!         let err = CssSlimError::from(e);
//!         assert_eq!(err.exit_code(), 65);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::pipeline::PipelineError;

/// css-slim errors with contextual suggestions
#[derive(Error, Debug)]
pub enum CssSlimError {
    /// Input file does not exist
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// Path to missing file
        path: PathBuf,
    },

    /// Input bytes are not valid UTF-8
    #[error("Input is not valid UTF-8: {source_name}")]
    InvalidEncoding {
        /// File path, or "<stdin>"
        source_name: String,
        #[source]
        /// Decoding error
        source: std::str::Utf8Error,
    },

    /// Configuration file is malformed or has invalid values
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong
        reason: String,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Pipeline rejected the input
    #[error("{0}")]
    Pipeline(#[from] PipelineError),
}

impl CssSlimError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use css_slim::error::CssSlimError;
    /// use std::path::PathBuf;
    ///
    /// let error = CssSlimError::InputNotFound {
    ///     path: PathBuf::from("style.css"),
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("style.css"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InputNotFound { path } => Some(format!(
                "Check that {} exists, or pipe CSS on stdin",
                path.display()
            )),
            Self::InvalidEncoding { .. } => {
                Some("Re-save the stylesheet as UTF-8 and try again".to_string())
            }
            Self::InvalidConfig { .. } => Some(
                "Fix .css-slim.toml, or run 'css-slim init --force' to restore defaults"
                    .to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
            Self::Pipeline(PipelineError::BlankInput) => {
                Some("Provide some CSS: pass a file path or pipe text on stdin".to_string())
            }
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    ///
    /// ```
    /// use css_slim::error::CssSlimError;
    /// use css_slim::pipeline::PipelineError;
    ///
    /// assert_eq!(CssSlimError::from(PipelineError::BlankInput).exit_code(), 65);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 66,   // EX_NOINPUT
            Self::InvalidEncoding { .. } => 65, // EX_DATAERR
            Self::InvalidConfig { .. } => 78,   // EX_CONFIG
            Self::Io { .. } => 74,              // EX_IOERR
            Self::Pipeline(PipelineError::BlankInput) => 65,
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and a suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(css_error) = error.downcast_ref::<CssSlimError>() {
            if let Some(suggestion) = css_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(css_error) = error.downcast_ref::<CssSlimError>() {
            css_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8_error() -> std::str::Utf8Error {
        let bytes = vec![0xffu8, 0xfe];
        std::str::from_utf8(&bytes).unwrap_err()
    }

    fn all_errors() -> Vec<CssSlimError> {
        vec![
            CssSlimError::InputNotFound {
                path: PathBuf::from("style.css"),
            },
            CssSlimError::InvalidEncoding {
                source_name: "<stdin>".to_string(),
                source: utf8_error(),
            },
            CssSlimError::InvalidConfig {
                reason: "max-chars must be greater than 0".to_string(),
            },
            CssSlimError::Io {
                context: "writing out.css".to_string(),
                source: std::io::Error::other("disk full"),
            },
            CssSlimError::Pipeline(PipelineError::BlankInput),
        ]
    }

    #[test]
    fn test_exit_codes_follow_conventions() {
        let codes: Vec<_> = all_errors().iter().map(CssSlimError::exit_code).collect();
        assert_eq!(codes, vec![66, 65, 78, 74, 65]);
    }

    #[test]
    fn test_all_error_variants_have_suggestions() {
        for err in all_errors() {
            let suggestion = err.suggestion();
            assert!(
                suggestion.as_deref().is_some_and(|s| !s.is_empty()),
                "Error {:?} should have a suggestion",
                err
            );
        }
    }

    #[test]
    fn test_input_not_found_names_the_path() {
        let err = CssSlimError::InputNotFound {
            path: PathBuf::from("theme.css"),
        };
        assert!(err.to_string().contains("theme.css"));
        assert!(err.suggestion().unwrap().contains("theme.css"));
    }

    #[test]
    fn test_io_error_has_context() {
        let err = CssSlimError::Io {
            context: "reading style.css".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let suggestion = err.suggestion().unwrap();
        assert!(suggestion.contains("permissions"));
        assert!(suggestion.contains("reading style.css"));
    }

    #[test]
    fn test_blank_input_converts_from_pipeline_error() {
        let err: CssSlimError = PipelineError::BlankInput.into();
        assert!(err.to_string().contains("blank"));
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_formatter_includes_cause_and_help() {
        console::set_colors_enabled(false);
        let err = anyhow::Error::new(CssSlimError::InvalidEncoding {
            source_name: "bad.css".to_string(),
            source: utf8_error(),
        });

        let formatted = ErrorFormatter::format(&err);
        assert!(formatted.contains("error: Input is not valid UTF-8: bad.css"));
        assert!(formatted.contains("caused by:"));
        assert!(formatted.contains("help:"));
        assert_eq!(ErrorFormatter::exit_code(&err), 65);
    }

    #[test]
    fn test_formatter_generic_error_exit_code() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
        assert!(!ErrorFormatter::format(&err).contains("help:"));
    }
}
