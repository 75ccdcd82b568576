//! Three-modulus multiplication with five-digit chunks and CRT.

use nttcalc_ntt::{cyclic_convolution, BufferPool, Modulus};

use crate::calculator::{CoreCalculator, MulError};
use crate::carry::{propagate_chunks, render};
use crate::crt::CrtBasis;
use crate::encode::encode_chunks;
use crate::operand::Operand;
use crate::options::Options;
use crate::strategy::{Path, Plan};

/// Base-100000 NTT multiplication over three primes, recombined by CRT.
///
/// Convolution coefficients reach `99999^2 * n`, which no single ~2^30
/// prime can hold; the product of the three primes can.
pub struct HybridNtt {
    pool: BufferPool,
}

impl HybridNtt {
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

    /// Convolve the chunked operands modulo one prime.
    fn convolve_mod(&self, a: &[u64], b: &[u64], modulus: &Modulus) -> Result<Vec<u64>, MulError> {
        let p = modulus.prime;
        let mut fa = self.pool.acquire(a.len());
        let mut fb = self.pool.acquire(b.len());
        for (dst, &src) in fa.iter_mut().zip(a) {
            *dst = src % p;
        }
        for (dst, &src) in fb.iter_mut().zip(b) {
            *dst = src % p;
        }

        cyclic_convolution(&mut fa, &mut fb, modulus)?;
        self.pool.release(fb);
        tracing::trace!(prime = p, "hybrid residue ready");
        Ok(fa)
    }

    fn residues(
        &self,
        a: &[u64],
        b: &[u64],
        moduli: &[Modulus; 3],
        parallel: bool,
    ) -> Result<[Vec<u64>; 3], MulError> {
        let [m1, m2, m3] = moduli;
        if parallel {
            let (r1, (r2, r3)) = rayon::join(
                || self.convolve_mod(a, b, m1),
                || {
                    rayon::join(
                        || self.convolve_mod(a, b, m2),
                        || self.convolve_mod(a, b, m3),
                    )
                },
            );
            Ok([r1?, r2?, r3?])
        } else {
            Ok([
                self.convolve_mod(a, b, m1)?,
                self.convolve_mod(a, b, m2)?,
                self.convolve_mod(a, b, m3)?,
            ])
        }
    }
}

impl Default for HybridNtt {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for HybridNtt {
    fn multiply_core(
        &self,
        a: &Operand<'_>,
        b: &Operand<'_>,
        opts: &Options,
    ) -> Result<String, MulError> {
        let plan = Plan::new(Path::Hybrid, a, b, opts)?;
        let basis = CrtBasis::new(opts.hybrid_moduli)?;

        let mut ca = self.pool.acquire(plan.size);
        let mut cb = self.pool.acquire(plan.size);
        encode_chunks(a, &mut ca);
        encode_chunks(b, &mut cb);

        let [r1, r2, r3] = self.residues(&ca, &cb, basis.moduli(), opts.parallel_moduli)?;
        let coeffs = basis.reconstruct_all(&r1, &r2, &r3);

        for buf in [ca, cb, r1, r2, r3] {
            self.pool.release(buf);
        }
        tracing::trace!(stats = ?self.pool.stats(), "hybrid pool");

        let digits = propagate_chunks(&coeffs)?;
        Ok(render(&digits))
    }

    fn name(&self) -> &'static str {
        "HybridNtt"
    }
}
