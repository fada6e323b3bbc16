//! Verhoeff checksum engine
//!
//! Table-driven implementation over the dihedral group D5. Digits are consumed
//! least-significant first; a numeral is valid when the accumulator returns to
//! the group identity.

use crate::error::{AadhaarError, Result};

/// Cayley table of the dihedral group D5
pub const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Positional permutations, cycling every 8 digits
pub const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 9, 3, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Multiplicative inverse of each element of D5
pub const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Convert a numeral into its digit values, most significant first.
pub fn digits(numeral: &str) -> Result<Vec<u8>> {
    numeral
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or(AadhaarError::InvalidDigit(c))
        })
        .collect()
}

/// Fold digits through the tables. `shift` offsets the permutation row: 0 when
/// validating, 1 when the check digit is still to be appended.
fn accumulate(digits: &[u8], shift: usize) -> u8 {
    digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |c, (i, &v)| {
            D[c as usize][P[(i + shift) % 8][v as usize] as usize]
        })
}

/// Check whether `numeral` carries a correct trailing Verhoeff check digit.
///
/// Never fails: empty or non-digit input is simply not valid.
pub fn is_valid(numeral: &str) -> bool {
    if numeral.is_empty() {
        return false;
    }

    match digits(numeral) {
        Ok(values) => accumulate(&values, 0) == 0,
        Err(_) => false,
    }
}

/// Compute the check digit that makes `numeral` Verhoeff-valid once appended.
///
/// # Errors
/// [`AadhaarError::InvalidArgument`] when `numeral` is empty or contains
/// anything other than ASCII digits.
pub fn generate_check_digit(numeral: &str) -> Result<u8> {
    if numeral.is_empty() {
        return Err(AadhaarError::InvalidArgument(
            "numeral must not be empty".to_string(),
        ));
    }

    let values = digits(numeral).map_err(|e| match e {
        AadhaarError::InvalidDigit(c) => {
            AadhaarError::InvalidArgument(format!("numeral contains non-digit {:?}", c))
        }
        other => other,
    })?;

    Ok(INV[accumulate(&values, 1) as usize])
}
