//! Chinese Remainder Theorem reconstruction over three NTT primes.
//!
//! Garner's algorithm: the residues are folded in one modulus at a time,
//! so no intermediate exceeds `P1 * P2 * P3` and everything fits in `u128`.

use nttcalc_ntt::modular::{inv_mod, mul_mod, sub_mod};
use nttcalc_ntt::Modulus;

use crate::calculator::MulError;

/// Three moduli with the constants Garner's algorithm needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrtBasis {
    moduli: [Modulus; 3],
    /// `P1^{-1} mod P2`.
    inv_p1_mod_p2: u64,
    /// `(P1 * P2)^{-1} mod P3`.
    inv_p1p2_mod_p3: u64,
    p1: u128,
    p1p2: u128,
}

impl CrtBasis {
    /// Precompute the Garner constants for `moduli`.
    ///
    /// Fails with `ModulusInverseUndefined` when the moduli are not
    /// pairwise coprime.
    pub fn new(moduli: [Modulus; 3]) -> Result<Self, MulError> {
        let [m1, m2, m3] = moduli;
        let (p1, p2, p3) = (m1.prime, m2.prime, m3.prime);

        let inv_p1_mod_p2 = inv_mod(p1 % p2, p2)?;
        let inv_p1p2_mod_p3 = inv_mod(mul_mod(p1, p2, p3), p3)?;

        Ok(Self {
            moduli,
            inv_p1_mod_p2,
            inv_p1p2_mod_p3,
            p1: u128::from(p1),
            p1p2: u128::from(p1) * u128::from(p2),
        })
    }

    /// The three moduli, in reconstruction order.
    #[must_use]
    pub fn moduli(&self) -> &[Modulus; 3] {
        &self.moduli
    }

    /// `P1 * P2 * P3`; reconstructed values lie in `[0, product)`.
    #[must_use]
    pub fn product(&self) -> u128 {
        self.p1p2 * u128::from(self.moduli[2].prime)
    }

    /// Solve `x = r1 (mod P1)`, `x = r2 (mod P2)`, `x = r3 (mod P3)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn reconstruct(&self, r1: u64, r2: u64, r3: u64) -> u128 {
        let p2 = self.moduli[1].prime;
        let p3 = self.moduli[2].prime;

        let k1 = mul_mod(sub_mod(r2 % p2, r1 % p2, p2), self.inv_p1_mod_p2, p2);
        let x12 = u128::from(r1) + u128::from(k1) * self.p1;

        let x12_mod_p3 = (x12 % u128::from(p3)) as u64;
        let k2 = mul_mod(sub_mod(r3 % p3, x12_mod_p3, p3), self.inv_p1p2_mod_p3, p3);

        x12 + u128::from(k2) * self.p1p2
    }

    /// Reconstruct index-aligned residue arrays.
    #[must_use]
    pub fn reconstruct_all(&self, r1: &[u64], r2: &[u64], r3: &[u64]) -> Vec<u128> {
        debug_assert!(r1.len() == r2.len() && r2.len() == r3.len());
        r1.iter()
            .zip(r2)
            .zip(r3)
            .map(|((&a, &b), &c)| self.reconstruct(a, b, c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HYBRID_MODULI;

    fn basis() -> CrtBasis {
        CrtBasis::new(DEFAULT_HYBRID_MODULI).unwrap()
    }

    fn residues(x: u128, b: &CrtBasis) -> (u64, u64, u64) {
        let [m1, m2, m3] = *b.moduli();
        (
            (x % u128::from(m1.prime)) as u64,
            (x % u128::from(m2.prime)) as u64,
            (x % u128::from(m3.prime)) as u64,
        )
    }

    #[test]
    fn reconstructs_small_values() {
        let b = basis();
        for x in [0u128, 1, 42, 998_244_352, 998_244_353] {
            let (r1, r2, r3) = residues(x, &b);
            assert_eq!(b.reconstruct(r1, r2, r3), x);
        }
    }

    #[test]
    fn reconstructs_worst_case_coefficient() {
        let b = basis();
        let x = 99_999u128 * 99_999 * (1 << 19);
        let (r1, r2, r3) = residues(x, &b);
        assert_eq!(b.reconstruct(r1, r2, r3), x);
    }

    #[test]
    fn reconstructs_product_minus_one() {
        let b = basis();
        let x = b.product() - 1;
        let (r1, r2, r3) = residues(x, &b);
        assert_eq!(b.reconstruct(r1, r2, r3), x);
    }

    #[test]
    fn product_value() {
        let b = basis();
        assert_eq!(
            b.product(),
            998_244_353u128 * 469_762_049 * 167_772_161
        );
    }

    #[test]
    fn reconstruct_all_aligns() {
        let b = basis();
        let xs = [5u128, 10_000_000_000, 123_456_789_012_345];
        let (mut r1, mut r2, mut r3) = (Vec::new(), Vec::new(), Vec::new());
        for &x in &xs {
            let (a, c, d) = residues(x, &b);
            r1.push(a);
            r2.push(c);
            r3.push(d);
        }
        assert_eq!(b.reconstruct_all(&r1, &r2, &r3), xs.to_vec());
    }

    #[test]
    fn duplicate_moduli_rejected() {
        let err = CrtBasis::new([Modulus::P1, Modulus::P2, Modulus::P2]).unwrap_err();
        assert!(matches!(err, MulError::ModulusInverseUndefined { .. }));
    }
}
