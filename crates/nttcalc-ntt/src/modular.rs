//! Modular arithmetic over a prime modulus.
//!
//! Every product is formed in `u128`, so any modulus below `2^64` is safe
//! from overflow; the moduli used by the transform are below `2^32`.

use crate::error::NttError;

/// Multiply `a * b mod p`.
///
/// Both operands are reduced first, then multiplied in a width that holds
/// `p^2` and reduced once.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    let a = u128::from(a % p);
    let b = u128::from(b % p);
    ((a * b) % u128::from(p)) as u64
}

/// Add two values already reduced modulo `p`.
#[inline]
#[must_use]
pub fn add_mod(a: u64, b: u64, p: u64) -> u64 {
    debug_assert!(a < p && b < p);
    let sum = a + b;
    if sum >= p {
        sum - p
    } else {
        sum
    }
}

/// Subtract two values already reduced modulo `p`.
#[inline]
#[must_use]
pub fn sub_mod(a: u64, b: u64, p: u64) -> u64 {
    debug_assert!(a < p && b < p);
    if a >= b {
        a - b
    } else {
        a + (p - b)
    }
}

/// Compute `base^exp mod p` by iterative binary exponentiation.
///
/// `exp == 0` yields 1 for any `p > 1`.
#[must_use]
pub fn pow_mod(base: u64, mut exp: u64, p: u64) -> u64 {
    let mut result = 1 % p;
    let mut base = base % p;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, p);
        }
        base = mul_mod(base, base, p);
        exp >>= 1;
    }
    result
}

/// Compute the inverse of `a` modulo the prime `p` (Fermat's little theorem).
///
/// Only meaningful when `p` is prime.
pub fn inv_mod(a: u64, p: u64) -> Result<u64, NttError> {
    if p < 2 || a % p == 0 {
        return Err(NttError::NotInvertible { value: a, modulus: p });
    }
    Ok(pow_mod(a, p - 2, p))
}
