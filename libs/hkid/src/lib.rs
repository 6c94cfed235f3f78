//! # hkid
//!
//! Parsing, validation, formatting and generation of Hong Kong Identity
//! Card (HKID) numbers.
//!
//! ## Number Format
//!
//! An HKID number is a one or two letter prefix, six numerals and a check
//! digit. Three layouts are accepted (case-insensitively) and produced:
//!
//! - `A123456` (no check digit)
//! - `A1234563` (check digit, no parentheses)
//! - `A123456(3)` (complete)
//!
//! The check digit is a weighted modulus-11 sum over the prefix and
//! numerals, written as `0-9` or `A` for ten. It is never stored
//! independently: changing the prefix or numerals recomputes it.
//!
//! ## Example
//!
//! ```
//! use hkid::{Format, HkidNumber};
//!
//! let mut number: HkidNumber = "a123456(3)".parse()?;
//! assert_eq!(number.format(Format::Complete), "A123456(3)");
//!
//! number.set_prefix("B")?;
//! assert_eq!(number.check_digit(), '6');
//!
//! assert!(hkid::validate_check_digit("A123456", "3"));
//! # Ok::<(), hkid::HkidError>(())
//! ```

pub mod checksum;
mod error;
mod format;
mod generate;
mod number;
mod prefix;

pub use error::HkidError;
pub use format::Format;
pub use generate::{generate, generate_random, generate_with, GenerateOptions, PrefixPolicy};
pub use number::{validate_check_digit, HkidNumber};
pub use prefix::{is_defined_prefix, DefinedPrefix, DEFINED_PREFIXES};
