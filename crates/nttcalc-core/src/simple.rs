//! Single-modulus multiplication with one decimal digit per coefficient.

use nttcalc_ntt::{cyclic_convolution, BufferPool};

use crate::calculator::{CoreCalculator, MulError};
use crate::carry::{propagate_digits, render};
use crate::encode::encode_digits;
use crate::operand::Operand;
use crate::options::Options;
use crate::strategy::{Path, Plan};

/// Base-10 NTT multiplication over `opts.simple_modulus`.
///
/// Coefficients never exceed `81 * n`, far below the ~2^30 modulus.
pub struct SimpleNtt {
    pool: BufferPool,
}

impl SimpleNtt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool: BufferPool::default(),
        }
    }

    /// Buffer pool backing this calculator.
    #[must_use]
    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }
}

impl Default for SimpleNtt {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for SimpleNtt {
    fn multiply_core(
        &self,
        a: &Operand<'_>,
        b: &Operand<'_>,
        opts: &Options,
    ) -> Result<String, MulError> {
        let plan = Plan::new(Path::Simple, a, b, opts)?;

        let mut fa = self.pool.acquire(plan.size);
        let mut fb = self.pool.acquire(plan.size);
        encode_digits(a, &mut fa);
        encode_digits(b, &mut fb);

        cyclic_convolution(&mut fa, &mut fb, &opts.simple_modulus)?;
        let digits = propagate_digits(&fa)?;

        self.pool.release(fa);
        self.pool.release(fb);
        tracing::trace!(stats = ?self.pool.stats(), "simple pool");

        Ok(render(&digits))
    }

    fn name(&self) -> &'static str {
        "SimpleNtt"
    }
}
