//! Weighted modulus-11 check digit.
//!
//! Weights 9 down to 2 are applied left to right over a two-letter prefix
//! and the six numerals. Letters take the value `(index + 10) % 11` with
//! `'A'` at index 0. A one-letter prefix is treated as if preceded by a
//! blank letter of value 36, which always contributes 5 at weight 9.
//!
//! The remainder of the sum maps to the check digit as `0 -> '0'`,
//! `1 -> 'A'` and `r -> 11 - r` otherwise.

use tracing::trace;

use crate::format::{is_numerals, is_prefix};
use crate::HkidError;

const MODULUS: u32 = 11;

/// Weights applied to the two prefix positions.
const PREFIX_WEIGHTS: [u32; 2] = [9, 8];

/// Weights applied to the six numerals.
const NUMERAL_WEIGHTS: [u32; 6] = [7, 6, 5, 4, 3, 2];

/// Contribution of the absent first letter of a one-letter prefix.
const BLANK_LETTER_CONTRIBUTION: u32 = 5;

/// Computes the check digit for a prefix and numerals pair.
///
/// `prefix` must be one or two letters `A-Z` (either case) and `numerals`
/// exactly six digits.
pub fn compute_check_digit(prefix: &str, numerals: &str) -> Result<char, HkidError> {
    let upper = prefix.to_ascii_uppercase();
    if !is_prefix(&upper) {
        return Err(HkidError::invalid_format(
            prefix,
            "prefix must be one or two letters",
        ));
    }
    if !is_numerals(numerals) {
        return Err(HkidError::invalid_format(
            numerals,
            "numerals must be exactly 6 digits",
        ));
    }
    Ok(check_digit_of(&upper, numerals))
}

/// Returns true if `candidate` is the check digit of `prefix` and `numerals`.
///
/// Parts outside their grammars never verify.
pub fn verify(prefix: &str, numerals: &str, candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => compute_check_digit(prefix, numerals).is_ok_and(|digit| digit == c),
        _ => false,
    }
}

/// Check digit of parts already known to match their grammars.
pub(crate) fn check_digit_of(prefix: &str, numerals: &str) -> char {
    let letters = prefix.as_bytes();
    let mut sum = match letters {
        [single] => BLANK_LETTER_CONTRIBUTION + weighted(letter_value(*single), PREFIX_WEIGHTS[1]),
        _ => letters
            .iter()
            .zip(PREFIX_WEIGHTS)
            .map(|(&letter, weight)| weighted(letter_value(letter), weight))
            .sum(),
    };

    sum += numerals
        .bytes()
        .zip(NUMERAL_WEIGHTS)
        .map(|(digit, weight)| weighted(u32::from(digit.wrapping_sub(b'0')), weight))
        .sum::<u32>();

    let check_digit = match sum % MODULUS {
        0 => '0',
        1 => 'A',
        remainder => char::from_digit(MODULUS - remainder, 10).unwrap_or('0'),
    };

    trace!(prefix, numerals, %check_digit, "computed check digit");
    check_digit
}

fn letter_value(letter: u8) -> u32 {
    (u32::from(letter.wrapping_sub(b'A')) + 10) % MODULUS
}

fn weighted(value: u32, weight: u32) -> u32 {
    (value % MODULUS) * weight % MODULUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A", "123456", '3')]
    #[case("B", "123456", '6')]
    #[case("A", "654321", '1')]
    #[case("A", "100000", '7')]
    #[case("C", "123456", '9')]
    #[case("F", "123456", '7')]
    #[case("AB", "123456", '9')]
    #[case("BC", "987654", '8')]
    #[case("DE", "123456", '2')]
    #[case("ZZ", "999999", '9')]
    fn test_known_check_digits(#[case] prefix: &str, #[case] numerals: &str, #[case] expected: char) {
        assert_eq!(compute_check_digit(prefix, numerals), Ok(expected));
    }

    #[test]
    fn test_blank_letter_is_value_36() {
        assert_eq!(weighted(36, 9), BLANK_LETTER_CONTRIBUTION);
    }

    #[test]
    fn test_letter_values() {
        assert_eq!(letter_value(b'A'), 10);
        assert_eq!(letter_value(b'B'), 0);
        assert_eq!(letter_value(b'Z'), 2);
    }

    #[test]
    fn test_remainder_one_maps_to_a() {
        let found = (0..1_000_000u32)
            .map(|n| format!("{n:06}"))
            .find(|numerals| check_digit_of("A", numerals) == 'A')
            .expect("some numerals yield check digit A");
        assert!(verify("A", &found, "A"));
    }

    #[test]
    fn test_verify() {
        assert!(verify("A", "123456", "3"));
        assert!(!verify("A", "123456", "7"));
        assert!(!verify("A", "123456", ""));
        assert!(!verify("A", "123456", "33"));
        assert!(!verify("A", "123456", "(3)"));
        assert!(verify("a", "123456", "3"));
    }

    #[rstest]
    #[case("#", "123456")]
    #[case("", "123456")]
    #[case("ABC", "123456")]
    #[case("A1", "123456")]
    #[case("A", "12345")]
    #[case("A", "1234567")]
    #[case("A", "12345a")]
    #[case("A", "")]
    fn test_out_of_grammar_parts_are_rejected(#[case] prefix: &str, #[case] numerals: &str) {
        let err = compute_check_digit(prefix, numerals).unwrap_err();
        assert!(err.is_format_error(), "{prefix}/{numerals}: {err}");
        for candidate in ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A"] {
            assert!(!verify(prefix, numerals, candidate), "{prefix}/{numerals}/{candidate}");
        }
    }

    #[test]
    fn test_extra_numerals_do_not_verify() {
        let digit = check_digit_of("AB", "123456").to_string();
        assert!(verify("AB", "123456", &digit));
        assert!(!verify("AB", "1234567", &digit));
        assert!(!verify("a", "12345", "3"));
    }
}
