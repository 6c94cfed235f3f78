//! Random HKID number generation.
//!
//! Generated numbers always carry a correct check digit. The random source
//! is explicit in [`generate_with`]; [`generate`] and [`generate_random`]
//! use the thread-local generator from [`rand::rng`], so they are safe to
//! call from any thread.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::prefix::DEFINED_PREFIXES;
use crate::HkidNumber;

/// Exclusive upper bound of the numeral part.
const NUMERALS_BOUND: u32 = 1_000_000;

/// Which prefixes the generator may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixPolicy {
    /// Only prefixes from the defined prefix registry.
    #[default]
    Defined,
    /// Any one or two letters `A-Z`.
    Any,
}

/// Options for random generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    pub prefix_policy: PrefixPolicy,
}

impl GenerateOptions {
    /// Options restricted to defined prefixes when `only_defined_prefix` is set.
    pub fn new(only_defined_prefix: bool) -> Self {
        let prefix_policy = if only_defined_prefix {
            PrefixPolicy::Defined
        } else {
            PrefixPolicy::Any
        };
        Self { prefix_policy }
    }
}

/// Generates a random HKID number using the thread-local generator.
pub fn generate_random(only_defined_prefix: bool) -> HkidNumber {
    generate(&GenerateOptions::new(only_defined_prefix))
}

/// Generates a random HKID number with the given options.
pub fn generate(options: &GenerateOptions) -> HkidNumber {
    generate_with(&mut rand::rng(), options)
}

/// Generates a random HKID number drawing from `rng`.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, options: &GenerateOptions) -> HkidNumber {
    let prefix = match options.prefix_policy {
        PrefixPolicy::Defined => random_defined_prefix(rng),
        PrefixPolicy::Any => random_letters(rng),
    };
    let numerals = format!("{:06}", rng.random_range(0..NUMERALS_BOUND));

    let number = HkidNumber::from_valid_parts(&prefix, &numerals);
    trace!(
        prefix = number.prefix(),
        numerals = number.numerals(),
        check_digit = %number.check_digit(),
        "generated HKID number"
    );
    number
}

fn random_defined_prefix<R: Rng + ?Sized>(rng: &mut R) -> String {
    DEFINED_PREFIXES[rng.random_range(0..DEFINED_PREFIXES.len())]
        .code
        .to_string()
}

fn random_letters<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len: usize = rng.random_range(1..=2);
    (0..len)
        .map(|_| char::from(b'A' + rng.random_range(0..26u8)))
        .collect()
}
