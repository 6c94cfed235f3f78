//! The HKID number record.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::checksum::{check_digit_of, verify};
use crate::format::{self, is_numerals, is_prefix, Format};
use crate::prefix::DefinedPrefix;
use crate::HkidError;

/// A Hong Kong Identity Card number.
///
/// The check digit is always derived from the prefix and numerals; it is
/// recomputed whenever either field changes and cannot be set directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HkidNumber {
    prefix: String,
    numerals: String,
    check_digit: char,
}

impl HkidNumber {
    /// Parses an HKID number in any of the accepted layouts.
    ///
    /// Input is matched case-insensitively. If the input embeds a check
    /// digit, it must equal the computed one.
    pub fn parse(s: &str) -> Result<Self, HkidError> {
        let upper = s.to_ascii_uppercase();
        let parts = format::split(&upper).map_err(|e| {
            debug!(input = s, reason = %e, "rejected HKID number");
            e.with_input(s)
        })?;

        let number = Self::from_valid_parts(parts.prefix, parts.numerals);

        if let Some(actual) = parts.check_digit {
            if actual != number.check_digit {
                debug!(
                    input = s,
                    expected = %number.check_digit,
                    actual = %actual,
                    "HKID check digit mismatch"
                );
                return Err(HkidError::InvalidCheckDigit {
                    input: s.to_string(),
                    expected: number.check_digit,
                    actual,
                });
            }
        }

        Ok(number)
    }

    /// Builds an HKID number from its parts.
    ///
    /// The parts are concatenated and parsed, so a supplied check digit is
    /// verified rather than trusted.
    pub fn from_parts(
        prefix: &str,
        numerals: &str,
        check_digit: Option<&str>,
    ) -> Result<Self, HkidError> {
        let text = format!("{prefix}{numerals}{}", check_digit.unwrap_or_default());
        Self::parse(&text)
    }

    /// Builds a number from fields already known to match their grammars.
    pub(crate) fn from_valid_parts(prefix: &str, numerals: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            numerals: numerals.to_string(),
            check_digit: check_digit_of(prefix, numerals),
        }
    }

    /// Returns the one or two letter prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the six digit numerals.
    pub fn numerals(&self) -> &str {
        &self.numerals
    }

    /// Returns the check digit, `'0'..='9'` or `'A'`.
    pub fn check_digit(&self) -> char {
        self.check_digit
    }

    /// Replaces the prefix and recomputes the check digit.
    ///
    /// On error the number is left unchanged.
    pub fn set_prefix(&mut self, value: &str) -> Result<(), HkidError> {
        if value.is_empty() {
            return Err(HkidError::invalid_format(value, "prefix cannot be empty"));
        }
        let upper = value.to_ascii_uppercase();
        if !is_prefix(&upper) {
            return Err(HkidError::invalid_format(
                value,
                "prefix must be one or two letters",
            ));
        }

        self.check_digit = check_digit_of(&upper, &self.numerals);
        self.prefix = upper;
        Ok(())
    }

    /// Replaces the numerals and recomputes the check digit.
    ///
    /// On error the number is left unchanged.
    pub fn set_numerals(&mut self, value: &str) -> Result<(), HkidError> {
        if value.is_empty() {
            return Err(HkidError::invalid_format(value, "numerals cannot be empty"));
        }
        if !is_numerals(value) {
            return Err(HkidError::invalid_format(
                value,
                "numerals must be exactly 6 digits",
            ));
        }

        self.check_digit = check_digit_of(&self.prefix, value);
        self.numerals = value.to_string();
        Ok(())
    }

    /// Formats the number in the given layout.
    #[must_use]
    pub fn format(&self, format: Format) -> String {
        format.render(&self.prefix, &self.numerals, self.check_digit)
    }

    /// Returns the defined prefix entry for this number's prefix.
    pub fn defined_prefix(&self) -> Result<&'static DefinedPrefix, HkidError> {
        DefinedPrefix::lookup(&self.prefix)
    }

    /// Returns the English description of this number's prefix.
    pub fn prefix_description(&self) -> Result<&'static str, HkidError> {
        self.defined_prefix().map(|p| p.description)
    }
}

/// Checks `candidate` against the check digit of a bare HKID number.
///
/// `text` must be in the `WithoutCheckDigit` layout; text that already
/// embeds a check digit, or fails to parse, yields `false`.
pub fn validate_check_digit(text: &str, candidate: &str) -> bool {
    match Format::detect(text) {
        Ok(Format::WithoutCheckDigit) => HkidNumber::parse(text)
            .map(|number| verify(&number.prefix, &number.numerals, candidate))
            .unwrap_or(false),
        _ => false,
    }
}

/// Renders the `WithoutCheckDigit` layout, or `Complete` with `{:#}`.
impl fmt::Display for HkidNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = if f.alternate() {
            Format::Complete
        } else {
            Format::default()
        };
        f.write_str(&self.format(layout))
    }
}

impl FromStr for HkidNumber {
    type Err = HkidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for HkidNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format(Format::Complete))
    }
}

impl<'de> serde::Deserialize<'de> for HkidNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
