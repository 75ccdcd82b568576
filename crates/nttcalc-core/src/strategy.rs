//! Path selection and transform planning.
//!
//! Short operands use one digit per coefficient over a single prime; long
//! operands use five-digit chunks over three primes and CRT, which keeps the
//! transform five times smaller at the cost of wider coefficients.

use std::fmt;

use nttcalc_ntt::{estimate_hybrid_memory, estimate_simple_memory};

use crate::calculator::MulError;
use crate::constants::CHUNK_DIGITS;
use crate::encode::{chunk_count, digit_count};
use crate::operand::Operand;
use crate::options::Options;

/// Which multiplication path handles a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Path {
    /// Base 10, one modulus.
    Simple,
    /// Base 100000, three moduli and CRT.
    Hybrid,
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => f.write_str("simple"),
            Self::Hybrid => f.write_str("hybrid"),
        }
    }
}

/// Choose the path from the operand lengths in digits.
#[must_use]
pub fn select_path(len1: usize, len2: usize, threshold: usize) -> Path {
    if len1.max(len2) < threshold {
        Path::Simple
    } else {
        Path::Hybrid
    }
}

/// Sizing of one query on one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    /// Path the plan is for.
    pub path: Path,
    /// Coefficient count of the first operand.
    pub len_a: usize,
    /// Coefficient count of the second operand.
    pub len_b: usize,
    /// Transform size: smallest power of two holding the full product.
    pub size: usize,
}

impl Plan {
    /// Size a query for `path`, rejecting it if it exceeds the configured limits.
    pub fn new(path: Path, a: &Operand<'_>, b: &Operand<'_>, opts: &Options) -> Result<Self, MulError> {
        let (len_a, len_b) = match path {
            Path::Simple => (digit_count(a.len()), digit_count(b.len())),
            Path::Hybrid => (chunk_count(a.len()), chunk_count(b.len())),
        };
        let size = transform_size(len_a, len_b);
        let (max, memory) = match path {
            Path::Simple => (opts.simple_max_transform, estimate_simple_memory(size)),
            Path::Hybrid => (
                opts.hybrid_max_transform,
                estimate_hybrid_memory(size, CHUNK_DIGITS),
            ),
        };

        if size > max {
            return Err(MulError::OperandTooLarge {
                path,
                required: size,
                max,
            });
        }
        if opts.memory_limit > 0 && memory > opts.memory_limit {
            return Err(MulError::MemoryLimitExceeded {
                required: memory,
                limit: opts.memory_limit,
            });
        }

        tracing::debug!(%path, len_a, len_b, size, memory, "planned multiplication");
        Ok(Self {
            path,
            len_a,
            len_b,
            size,
        })
    }
}

/// Smallest power of two at least `len_a + len_b`.
#[must_use]
pub fn transform_size(len_a: usize, len_b: usize) -> usize {
    (len_a + len_b).next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_below_threshold_is_simple() {
        assert_eq!(select_path(19_999, 1, 20_000), Path::Simple);
        assert_eq!(select_path(1, 19_999, 20_000), Path::Simple);
    }

    #[test]
    fn select_at_threshold_is_hybrid() {
        assert_eq!(select_path(20_000, 1, 20_000), Path::Hybrid);
        assert_eq!(select_path(3, 25_000, 20_000), Path::Hybrid);
    }

    #[test]
    fn transform_size_values() {
        assert_eq!(transform_size(1, 1), 2);
        assert_eq!(transform_size(3, 3), 8);
        assert_eq!(transform_size(4, 4), 8);
        assert_eq!(transform_size(5, 4), 16);
    }

    #[test]
    fn plan_simple() {
        let a = Operand::parse("123").unwrap();
        let b = Operand::parse("456").unwrap();
        let plan = Plan::new(Path::Simple, &a, &b, &Options::default()).unwrap();
        assert_eq!(plan.len_a, 3);
        assert_eq!(plan.size, 8);
    }

    #[test]
    fn plan_hybrid_counts_chunks() {
        let a = Operand::parse("123456").unwrap();
        let b = Operand::parse("7").unwrap();
        let plan = Plan::new(Path::Hybrid, &a, &b, &Options::default()).unwrap();
        assert_eq!((plan.len_a, plan.len_b), (2, 1));
        assert_eq!(plan.size, 4);
    }

    #[test]
    fn plan_rejects_oversized_simple() {
        let long = "9".repeat(40_000);
        let a = Operand::parse(&long).unwrap();
        let err = Plan::new(Path::Simple, &a, &a, &Options::default()).unwrap_err();
        assert_eq!(
            err,
            MulError::OperandTooLarge {
                path: Path::Simple,
                required: 1 << 17,
                max: 1 << 16,
            }
        );
    }

    #[test]
    fn plan_rejects_memory_limit() {
        let a = Operand::parse("12345").unwrap();
        let opts = Options {
            memory_limit: 8,
            ..Options::default()
        };
        assert!(matches!(
            Plan::new(Path::Simple, &a, &a, &opts),
            Err(MulError::MemoryLimitExceeded { limit: 8, .. })
        ));
    }

    #[test]
    fn path_display() {
        assert_eq!(Path::Simple.to_string(), "simple");
        assert_eq!(Path::Hybrid.to_string(), "hybrid");
    }
}
