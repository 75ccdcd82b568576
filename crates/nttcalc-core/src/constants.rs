//! Constants for path selection, chunking and transform limits.

use nttcalc_ntt::Modulus;

/// Operand length (in digits) at which the hybrid path takes over.
pub const DEFAULT_HYBRID_THRESHOLD: usize = 20_000;

/// Largest transform size allowed on the simple path.
pub const DEFAULT_SIMPLE_MAX_TRANSFORM: usize = 1 << 16;

/// Largest transform size allowed on the hybrid path.
pub const DEFAULT_HYBRID_MAX_TRANSFORM: usize = 1 << 19;

/// Decimal digits per coefficient on the hybrid path.
pub const CHUNK_DIGITS: usize = 5;

/// Coefficient base on the hybrid path (`10^CHUNK_DIGITS`).
pub const CHUNK_BASE: u64 = 100_000;

/// Coefficient base on the simple path.
pub const DIGIT_BASE: u64 = 10;

/// Modulus used by the simple path.
pub const DEFAULT_SIMPLE_MODULUS: Modulus = Modulus::P1;

/// Moduli combined by CRT on the hybrid path.
pub const DEFAULT_HYBRID_MODULI: [Modulus; 3] = [Modulus::P1, Modulus::P2, Modulus::P3];

/// Session sentinel that ends the read loop.
pub const DEFAULT_SENTINEL: &str = "exit";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Rejected operand.
    pub const ERROR_INPUT: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_base_matches_digits() {
        assert_eq!(CHUNK_BASE, 10u64.pow(CHUNK_DIGITS as u32));
    }

    #[test]
    fn simple_path_holds_every_below_threshold_query() {
        assert!(2 * (DEFAULT_HYBRID_THRESHOLD - 1) <= DEFAULT_SIMPLE_MAX_TRANSFORM);
    }

    #[test]
    fn transform_limits_fit_moduli() {
        assert!(DEFAULT_SIMPLE_MODULUS.supports(DEFAULT_SIMPLE_MAX_TRANSFORM));
        for m in DEFAULT_HYBRID_MODULI {
            assert!(m.supports(DEFAULT_HYBRID_MAX_TRANSFORM));
        }
    }
}
