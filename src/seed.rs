//! Seed normalization: any integer onto a trigram number or a line position.
//!
//! Both reductions take the absolute value, reduce by the modulus, and map a
//! zero remainder to the modulus itself. There is no zeroth trigram and no
//! zeroth line.

use crate::model::Trigram;

const TRIGRAM_MODULUS: u8 = 8;
const LINE_MODULUS: u8 = 6;

/// Maps `seed` onto 1..=8.
pub fn normalize_trigram_seed(seed: i64) -> u8 {
    wrap(seed, TRIGRAM_MODULUS)
}

/// Maps `seed` onto 1..=6.
pub fn normalize_line_seed(seed: i64) -> u8 {
    wrap(seed, LINE_MODULUS)
}

/// The trigram a seed lands on.
pub fn trigram_for_seed(seed: i64) -> Trigram {
    // 1..=8 always names a trigram; Kun (8) is the zero-remainder case.
    Trigram::from_number(normalize_trigram_seed(seed)).unwrap_or(Trigram::Kun)
}

#[allow(clippy::cast_possible_truncation)] // The remainder is below the modulus.
fn wrap(seed: i64, modulus: u8) -> u8 {
    match (seed.unsigned_abs() % u64::from(modulus)) as u8 {
        0 => modulus,
        r => r,
    }
}
