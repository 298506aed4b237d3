//! Input gate: blank rejection and the length ceiling

use super::error::PipelineError;

/// Default maximum accepted input length, in characters
pub const MAX_CHARS: usize = 80_000;

/// Source text after the length ceiling has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreparedInput<'a> {
    /// The text to minify, possibly a prefix of the source
    pub text: &'a str,
    /// Whether the source exceeded the ceiling and was cut
    pub truncated: bool,
}

/// Apply the length ceiling to `source`
///
/// Lengths are counted in characters, so the cut never lands inside a
/// multi-byte sequence.
///
/// # Examples
///
/// ```
/// use css_slim::pipeline::prepare_input;
///
/// let long = "a".repeat(80_001);
/// let prepared = prepare_input(&long, 80_000);
/// assert_eq!(prepared.text.chars().count(), 80_000);
/// assert!(prepared.truncated);
/// ```
pub fn prepare_input(source: &str, ceiling: usize) -> PreparedInput<'_> {
    match source.char_indices().nth(ceiling) {
        Some((cut, _)) => PreparedInput {
            text: &source[..cut],
            truncated: true,
        },
        None => PreparedInput {
            text: source,
            truncated: false,
        },
    }
}

/// Reject input that is empty once surrounding whitespace is removed
pub fn ensure_not_blank(source: &str) -> Result<(), PipelineError> {
    if source.trim().is_empty() {
        return Err(PipelineError::BlankInput);
    }
    Ok(())
}
