//! Error types for the minify pipeline

use thiserror::Error;

/// Errors that can occur at the pipeline boundary
///
/// The rewrite rules themselves never fail; everything here is detected
/// before the minifier runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Input was empty or whitespace-only
    #[error("Input is blank: nothing to minify")]
    BlankInput,
}
