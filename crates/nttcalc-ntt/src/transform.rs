//! Core transform: forward and inverse NTT over a prime field.

use crate::error::NttError;
use crate::modular::{add_mod, inv_mod, mul_mod, pow_mod, sub_mod};
use crate::modulus::Modulus;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Coefficients to evaluations.
    Forward,
    /// Evaluations back to coefficients (scaled by `n^{-1}`).
    Inverse,
}

/// Check that a transform of `n` points is possible over `modulus`.
pub fn check_size(n: usize, modulus: &Modulus) -> Result<(), NttError> {
    if n == 0 || !n.is_power_of_two() {
        return Err(NttError::InvalidLength { len: n });
    }
    if !modulus.supports(n) {
        return Err(NttError::UnsupportedSize {
            size: n,
            max: modulus.max_transform_size(),
            prime: modulus.prime,
        });
    }
    Ok(())
}

/// Perform an in-place NTT over `Z/prime`.
///
/// Iterative Cooley-Tukey: bit-reversal permutation, then butterflies on
/// blocks of doubling length. Elements must already be reduced modulo the
/// prime.
pub fn transform(data: &mut [u64], modulus: &Modulus, direction: Direction) -> Result<(), NttError> {
    let n = data.len();
    check_size(n, modulus)?;
    let p = modulus.prime;
    debug_assert!(data.iter().all(|&x| x < p));

    bit_reverse_permutation(data);

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let mut wlen = pow_mod(modulus.root, (p - 1) / len as u64, p);
        if direction == Direction::Inverse {
            wlen = inv_mod(wlen, p)?;
        }

        for start in (0..n).step_by(len) {
            let mut w = 1u64;
            for j in 0..half {
                let u = data[start + j];
                let v = mul_mod(data[start + j + half], w, p);
                data[start + j] = add_mod(u, v, p);
                data[start + j + half] = sub_mod(u, v, p);
                w = mul_mod(w, wlen, p);
            }
        }
        len <<= 1;
    }

    if direction == Direction::Inverse {
        let n_inv = inv_mod(n as u64, p)?;
        for elem in data.iter_mut() {
            *elem = mul_mod(*elem, n_inv, p);
        }
    }
    Ok(())
}

/// Forward NTT in place.
pub fn forward(data: &mut [u64], modulus: &Modulus) -> Result<(), NttError> {
    transform(data, modulus, Direction::Forward)
}

/// Inverse NTT in place.
pub fn inverse(data: &mut [u64], modulus: &Modulus) -> Result<(), NttError> {
    transform(data, modulus, Direction::Inverse)
}

/// Bit-reversal permutation.
fn bit_reverse_permutation(data: &mut [u64]) {
    let n = data.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}
