//! Pointwise products and cyclic convolution in the transform domain.

use crate::error::NttError;
use crate::modular::mul_mod;
use crate::modulus::Modulus;
use crate::transform::{check_size, forward, inverse};

/// Multiply `a` by `b` element-wise modulo `prime`, in place into `a`.
pub fn pointwise_multiply(a: &mut [u64], b: &[u64], prime: u64) -> Result<(), NttError> {
    if a.len() != b.len() {
        return Err(NttError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    for (x, &y) in a.iter_mut().zip(b) {
        *x = mul_mod(*x, y, prime);
    }
    Ok(())
}

/// Cyclic convolution of `a` and `b` modulo `modulus.prime`, written into `a`.
///
/// `b` is overwritten with its forward transform. Both slices must have the
/// same power-of-two length; callers zero-pad so that the product does not
/// wrap around.
pub fn cyclic_convolution(a: &mut [u64], b: &mut [u64], modulus: &Modulus) -> Result<(), NttError> {
    if a.len() != b.len() {
        return Err(NttError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    check_size(a.len(), modulus)?;

    forward(a, modulus)?;
    forward(b, modulus)?;
    pointwise_multiply(a, b, modulus.prime)?;
    inverse(a, modulus)?;

    tracing::trace!(prime = modulus.prime, size = a.len(), "convolution done");
    Ok(())
}
