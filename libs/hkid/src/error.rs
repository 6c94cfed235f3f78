//! Error types for HKID number parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing, validating or describing HKID numbers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HkidError {
    /// The input (or a single field) does not match the HKID grammar.
    #[error("invalid HKID number format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// The input embeds a check digit that does not match the computed one.
    #[error("invalid check digit for HKID number '{input}': expected '{expected}', got '{actual}'")]
    InvalidCheckDigit {
        input: String,
        expected: char,
        actual: char,
    },

    /// The prefix is syntactically valid but not a defined prefix.
    #[error("unknown HKID prefix: {prefix}")]
    UnknownPrefix { prefix: String },
}

impl HkidError {
    pub(crate) fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        HkidError::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Replaces the input carried by a format error.
    pub(crate) fn with_input(self, input: &str) -> Self {
        match self {
            HkidError::InvalidFormat { reason, .. } => HkidError::invalid_format(input, reason),
            other => other,
        }
    }

    /// Returns true if the input failed the format grammar.
    pub fn is_format_error(&self) -> bool {
        matches!(self, HkidError::InvalidFormat { .. })
    }

    /// Returns true if the embedded check digit was wrong.
    pub fn is_check_digit_error(&self) -> bool {
        matches!(self, HkidError::InvalidCheckDigit { .. })
    }

    /// Returns true if a prefix description lookup found no entry.
    pub fn is_unknown_prefix(&self) -> bool {
        matches!(self, HkidError::UnknownPrefix { .. })
    }
}
