//! The single error kind raised by color-string parsing.

use thiserror::Error;

/// A color string did not yield the numeric components its format calls for.
///
/// Every fallible conversion in this crate fails with this one kind. The
/// scanners are deliberately loose about surrounding text, so an error
/// means the input genuinely lacked the required groups (or a group was
/// out of range), not that punctuation was off.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed color string {input:?}: expected {expected}")]
pub struct MalformedColorString {
    /// The rejected input, verbatim.
    pub input: String,
    /// What the scanner was looking for.
    pub expected: &'static str,
}

impl MalformedColorString {
    pub(crate) fn new(input: &str, expected: &'static str) -> Self {
        Self {
            input: input.to_string(),
            expected,
        }
    }
}
