//! NTT-friendly prime descriptors.

use crate::error::NttError;
use crate::modular::pow_mod;

/// A prime of the form `k * 2^m + 1` paired with a generator of its
/// 2-power subgroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modulus {
    /// The prime.
    pub prime: u64,
    /// Primitive root used to derive the roots of unity.
    pub root: u64,
}

impl Modulus {
    /// 998244353 = 119 * 2^23 + 1.
    pub const P1: Self = Self::new(998_244_353, 3);
    /// 469762049 = 7 * 2^26 + 1.
    pub const P2: Self = Self::new(469_762_049, 3);
    /// 167772161 = 5 * 2^25 + 1.
    pub const P3: Self = Self::new(167_772_161, 3);

    /// Create a descriptor without validating it.
    #[must_use]
    pub const fn new(prime: u64, root: u64) -> Self {
        Self { prime, root }
    }

    /// Exponent `m` of the largest power of two dividing `prime - 1`.
    #[must_use]
    pub fn two_adicity(&self) -> u32 {
        (self.prime - 1).trailing_zeros()
    }

    /// Largest transform size this modulus supports.
    #[must_use]
    pub fn max_transform_size(&self) -> u64 {
        1u64 << self.two_adicity()
    }

    /// Whether a transform of length `n` is possible over this modulus.
    #[must_use]
    pub fn supports(&self, n: usize) -> bool {
        n.is_power_of_two() && (self.prime - 1) % (n as u64) == 0
    }

    /// Check that the descriptor can drive a transform.
    ///
    /// The root must be a quadratic non-residue, which makes it a generator
    /// of the full 2-power subgroup of the multiplicative group.
    pub fn validate(&self) -> Result<(), NttError> {
        let fail = |reason| NttError::InvalidModulus {
            prime: self.prime,
            root: self.root,
            reason,
        };
        if self.prime <= 2 || self.prime % 2 == 0 {
            return Err(fail("prime must be odd and greater than 2"));
        }
        if self.prime >= 1 << 32 {
            return Err(fail("prime must be below 2^32"));
        }
        if self.root < 2 || self.root >= self.prime {
            return Err(fail("root must lie in [2, prime)"));
        }
        if pow_mod(self.root, (self.prime - 1) / 2, self.prime) != self.prime - 1 {
            return Err(fail("root does not generate the 2-power subgroup"));
        }
        Ok(())
    }
}
