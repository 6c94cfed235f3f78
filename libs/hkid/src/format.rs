//! Textual layouts of an HKID number.
//!
//! Three layouts are accepted on input and produced on output:
//!
//! | Layout               | Example      |
//! |----------------------|--------------|
//! | `WithoutCheckDigit`  | `A123456`    |
//! | `WithoutParentheses` | `A1234563`   |
//! | `Complete`           | `A123456(3)` |
//!
//! Matching is done on ASCII upper-case text. The prefix is one or two
//! letters `A-Z`, the numerals exactly six digits `0-9`, and the check digit
//! one of `0-9` or `A`.

use serde::{Deserialize, Serialize};

use crate::HkidError;

/// Number of digits in the numeral part.
pub(crate) const NUMERALS_LEN: usize = 6;

/// Maximum number of letters in the prefix.
pub(crate) const MAX_PREFIX_LEN: usize = 2;

/// Layout of an HKID number string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// `X123456` or `XX123456`.
    #[default]
    WithoutCheckDigit,
    /// `X123456D` or `XX123456D`.
    WithoutParentheses,
    /// `X123456(D)` or `XX123456(D)`.
    Complete,
}

impl Format {
    /// All layouts, in recognition order.
    pub const ALL: [Format; 3] = [
        Format::WithoutCheckDigit,
        Format::WithoutParentheses,
        Format::Complete,
    ];

    /// Determines which layout `text` is written in.
    ///
    /// The input is upper-cased before matching.
    pub fn detect(text: &str) -> Result<Self, HkidError> {
        let upper = text.to_ascii_uppercase();
        split(&upper)
            .map(|parts| parts.format)
            .map_err(|e| e.with_input(text))
    }

    /// Renders the given fields in this layout.
    pub(crate) fn render(self, prefix: &str, numerals: &str, check_digit: char) -> String {
        match self {
            Format::WithoutCheckDigit => format!("{prefix}{numerals}"),
            Format::WithoutParentheses => format!("{prefix}{numerals}{check_digit}"),
            Format::Complete => format!("{prefix}{numerals}({check_digit})"),
        }
    }
}

/// Fields captured from a recognised HKID number string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Parts<'a> {
    pub format: Format,
    pub prefix: &'a str,
    pub numerals: &'a str,
    pub check_digit: Option<char>,
}

/// Splits upper-case `text` into its fields, recognising the layout.
pub(crate) fn split(text: &str) -> Result<Parts<'_>, HkidError> {
    if text.is_empty() {
        return Err(HkidError::invalid_format(text, "input is empty"));
    }

    let bytes = text.as_bytes();
    let prefix_len = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    if prefix_len == 0 || prefix_len > MAX_PREFIX_LEN {
        return Err(HkidError::invalid_format(
            text,
            "prefix must be one or two letters",
        ));
    }

    let rest = &bytes[prefix_len..];
    let numerals_len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if numerals_len < NUMERALS_LEN {
        return Err(HkidError::invalid_format(
            text,
            "numerals must be exactly 6 digits",
        ));
    }

    // A seventh digit may be the check digit of the unparenthesised layout.
    let tail = &rest[NUMERALS_LEN..];
    let (format, check_digit) = match tail {
        [] => (Format::WithoutCheckDigit, None),
        [d] if is_check_digit_char(*d) => (Format::WithoutParentheses, Some(*d as char)),
        [b'(', d, b')'] if is_check_digit_char(*d) => (Format::Complete, Some(*d as char)),
        _ => {
            return Err(HkidError::invalid_format(
                text,
                "does not match any HKID number layout",
            ))
        }
    };

    let numerals_end = prefix_len + NUMERALS_LEN;
    Ok(Parts {
        format,
        prefix: &text[..prefix_len],
        numerals: &text[prefix_len..numerals_end],
        check_digit,
    })
}

/// Returns true if `value` is one or two ASCII upper-case letters.
pub(crate) fn is_prefix(value: &str) -> bool {
    (1..=MAX_PREFIX_LEN).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_uppercase())
}

/// Returns true if `value` is exactly six ASCII digits.
pub(crate) fn is_numerals(value: &str) -> bool {
    value.len() == NUMERALS_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_check_digit_char(b: u8) -> bool {
    b.is_ascii_digit() || b == b'A'
}
