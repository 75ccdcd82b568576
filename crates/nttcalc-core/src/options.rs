//! Multiplication options and configuration.

use nttcalc_ntt::Modulus;

use crate::calculator::MulError;
use crate::constants::{
    CHUNK_BASE, DEFAULT_HYBRID_MAX_TRANSFORM, DEFAULT_HYBRID_MODULI, DEFAULT_HYBRID_THRESHOLD,
    DEFAULT_SIMPLE_MAX_TRANSFORM, DEFAULT_SIMPLE_MODULUS, DIGIT_BASE,
};
use crate::crt::CrtBasis;

/// Options for a multiplication query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Operand length (digits) at which the hybrid path is selected.
    pub hybrid_threshold: usize,
    /// Largest transform size on the simple path.
    pub simple_max_transform: usize,
    /// Largest transform size on the hybrid path.
    pub hybrid_max_transform: usize,
    /// Modulus of the simple path.
    pub simple_modulus: Modulus,
    /// Moduli combined by CRT on the hybrid path.
    pub hybrid_moduli: [Modulus; 3],
    /// Run the three hybrid convolutions on the rayon pool.
    pub parallel_moduli: bool,
    /// Memory limit in bytes (0 = unlimited).
    pub memory_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hybrid_threshold: DEFAULT_HYBRID_THRESHOLD,
            simple_max_transform: DEFAULT_SIMPLE_MAX_TRANSFORM,
            hybrid_max_transform: DEFAULT_HYBRID_MAX_TRANSFORM,
            simple_modulus: DEFAULT_SIMPLE_MODULUS,
            hybrid_moduli: DEFAULT_HYBRID_MODULI,
            parallel_moduli: false,
            memory_limit: 0,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.hybrid_threshold == 0 {
            self.hybrid_threshold = DEFAULT_HYBRID_THRESHOLD;
        }
        if self.simple_max_transform == 0 {
            self.simple_max_transform = DEFAULT_SIMPLE_MAX_TRANSFORM;
        }
        if self.hybrid_max_transform == 0 {
            self.hybrid_max_transform = DEFAULT_HYBRID_MAX_TRANSFORM;
        }
        self
    }

    /// Check that the configuration can only produce exact products.
    ///
    /// Every convolution coefficient must stay below the modulus (simple
    /// path) or below the CRT product (hybrid path) at the largest allowed
    /// transform size.
    pub fn validate(&self) -> Result<(), MulError> {
        if self.hybrid_threshold == 0 {
            return Err(MulError::Config("hybrid threshold must be positive".into()));
        }

        check_transform_limit("simple", self.simple_max_transform, &[self.simple_modulus])?;
        let simple_bound = coefficient_bound(DIGIT_BASE, self.simple_max_transform);
        if u128::from(self.simple_modulus.prime) <= simple_bound {
            return Err(MulError::Config(format!(
                "simple modulus {} cannot hold coefficients up to {simple_bound}",
                self.simple_modulus.prime
            )));
        }

        check_transform_limit("hybrid", self.hybrid_max_transform, &self.hybrid_moduli)?;
        let basis = CrtBasis::new(self.hybrid_moduli)?;
        let hybrid_bound = coefficient_bound(CHUNK_BASE, self.hybrid_max_transform);
        if basis.product() <= hybrid_bound {
            return Err(MulError::Config(format!(
                "CRT modulus product {} cannot hold coefficients up to {hybrid_bound}",
                basis.product()
            )));
        }

        let widest_simple = (self.hybrid_threshold - 1).checked_mul(2);
        if widest_simple.map_or(true, |points| points > self.simple_max_transform) {
            return Err(MulError::Config(format!(
                "hybrid threshold {} needs a simple transform above {} points",
                self.hybrid_threshold, self.simple_max_transform
            )));
        }
        Ok(())
    }
}

/// Largest possible convolution coefficient: `(base - 1)^2 * n`.
fn coefficient_bound(base: u64, n: usize) -> u128 {
    let digit = u128::from(base - 1);
    digit * digit * n as u128
}

fn check_transform_limit(path: &str, max: usize, moduli: &[Modulus]) -> Result<(), MulError> {
    if !max.is_power_of_two() {
        return Err(MulError::Config(format!(
            "{path} max transform size {max} is not a power of two"
        )));
    }
    for m in moduli {
        m.validate()
            .map_err(|e| MulError::Config(e.to_string()))?;
        if !m.supports(max) {
            return Err(MulError::Config(format!(
                "{path} max transform size {max} exceeds {} supported by modulus {}",
                m.max_transform_size(),
                m.prime
            )));
        }
    }
    Ok(())
}
