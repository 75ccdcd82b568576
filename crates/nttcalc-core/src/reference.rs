//! Arbitrary-precision reference multiplier used for cross-checking.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::calculator::{CoreCalculator, MulError};
use crate::operand::Operand;
use crate::options::Options;

/// Schoolbook/Karatsuba multiplication through `num-bigint`.
///
/// Ignores transform limits, so it accepts any operand size.
#[derive(Debug, Default, Clone, Copy)]
pub struct BigIntReference;

impl BigIntReference {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn to_biguint(op: &Operand<'_>) -> Result<BigUint, MulError> {
    BigUint::parse_bytes(op.as_bytes(), 10)
        .ok_or_else(|| MulError::Internal(format!("cannot parse {} digits", op.len())))
}

impl CoreCalculator for BigIntReference {
    fn multiply_core(
        &self,
        a: &Operand<'_>,
        b: &Operand<'_>,
        _opts: &Options,
    ) -> Result<String, MulError> {
        let product = to_biguint(a)? * to_biguint(b)?;
        if product.is_zero() {
            return Ok("0".to_string());
        }
        Ok(product.to_str_radix(10))
    }

    fn name(&self) -> &'static str {
        "BigIntReference"
    }
}
