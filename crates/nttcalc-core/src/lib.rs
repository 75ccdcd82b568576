//! # nttcalc-core
//!
//! Exact multiplication of non-negative decimal integers via the
//! number-theoretic transform. Short operands go through a single-prime
//! base-10 path; long operands through a three-prime base-100000 path
//! recombined with the Chinese Remainder Theorem.

pub mod auto;
pub mod calculator;
pub(crate) mod carry;
pub mod constants;
pub mod crt;
pub(crate) mod encode;
pub mod hybrid;
pub mod operand;
pub mod options;
pub mod reference;
pub mod registry;
pub mod simple;
pub mod strategy;

// Re-exports
pub use auto::AutoNtt;
pub use calculator::{Calculator, CoreCalculator, MulCalculator, MulError};
pub use constants::{
    exit_codes, CHUNK_BASE, CHUNK_DIGITS, DEFAULT_HYBRID_MAX_TRANSFORM, DEFAULT_HYBRID_THRESHOLD,
    DEFAULT_SENTINEL, DEFAULT_SIMPLE_MAX_TRANSFORM,
};
pub use crt::CrtBasis;
pub use hybrid::HybridNtt;
pub use operand::Operand;
pub use options::Options;
pub use reference::BigIntReference;
pub use registry::{CalculatorFactory, DefaultFactory};
pub use simple::SimpleNtt;
pub use strategy::{select_path, Path, Plan};

use std::sync::Arc;

/// Multiply two decimal strings with default options and automatic path
/// selection.
///
/// For custom thresholds, transform limits or moduli, build an
/// [`Options`] and use the [`Calculator`] trait directly.
///
/// # Example
/// ```
/// assert_eq!(nttcalc_core::multiply("123", "456").unwrap(), "56088");
/// assert_eq!(nttcalc_core::multiply("0", "999").unwrap(), "0");
/// ```
pub fn multiply(a: &str, b: &str) -> Result<String, MulError> {
    let calc = MulCalculator::new(Arc::new(AutoNtt::new()));
    calc.multiply(a, b, &Options::default())
}
