//! Carry propagation and digit extraction.
//!
//! Digit sequences are least significant first and may carry zero padding
//! at the top; `render` trims it.

use crate::calculator::MulError;
use crate::constants::{CHUNK_BASE, CHUNK_DIGITS, DIGIT_BASE};

fn overflow() -> MulError {
    MulError::Internal("carry propagation overflow".into())
}

/// Propagate carries through base-10 convolution coefficients.
#[allow(clippy::cast_possible_truncation)]
pub fn propagate_digits(coeffs: &[u64]) -> Result<Vec<u8>, MulError> {
    let mut digits = Vec::with_capacity(coeffs.len() + 20);
    let mut carry = 0u64;
    let mut iter = coeffs.iter();
    loop {
        let value = match iter.next() {
            Some(&c) => c.checked_add(carry).ok_or_else(overflow)?,
            None if carry != 0 => carry,
            None => break,
        };
        digits.push((value % DIGIT_BASE) as u8);
        carry = value / DIGIT_BASE;
    }
    Ok(digits)
}

/// Propagate carries through base-100000 coefficients, unpacking each chunk
/// into exactly five digits.
#[allow(clippy::cast_possible_truncation)]
pub fn propagate_chunks(coeffs: &[u128]) -> Result<Vec<u8>, MulError> {
    let base = u128::from(CHUNK_BASE);
    let mut digits = Vec::with_capacity((coeffs.len() + 8) * CHUNK_DIGITS);
    let mut carry = 0u128;
    let mut iter = coeffs.iter();
    loop {
        let value = match iter.next() {
            Some(&c) => c.checked_add(carry).ok_or_else(overflow)?,
            None if carry != 0 => carry,
            None => break,
        };
        let mut chunk = (value % base) as u64;
        for _ in 0..CHUNK_DIGITS {
            digits.push((chunk % 10) as u8);
            chunk /= 10;
        }
        carry = value / base;
    }
    Ok(digits)
}

/// Render least-significant-first digits as a decimal string without
/// leading zeros; all-zero (or empty) input renders as `"0"`.
#[must_use]
pub fn render(digits: &[u8]) -> String {
    if digits.is_empty() {
        return "0".to_string();
    }
    let top = digits.iter().rposition(|&d| d != 0).unwrap_or(0);
    digits[..=top]
        .iter()
        .rev()
        .map(|&d| char::from(b'0' + d))
        .collect()
}
