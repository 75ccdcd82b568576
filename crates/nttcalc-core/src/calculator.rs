//! Calculator traits and the `MulCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration and the CLI.
//! `CoreCalculator` is the internal trait implemented by algorithms.
//! `MulCalculator` is a decorator that validates operands and options and
//! adds the zero fast path.

use std::sync::Arc;

use nttcalc_ntt::NttError;

use crate::operand::Operand;
use crate::options::Options;
use crate::strategy::Path;

/// Error type for multiplication queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MulError {
    /// An operand has no digits.
    #[error("operand is empty")]
    EmptyOperand,

    /// An operand contains a character that is not a decimal digit.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigitInput {
        /// Zero-based character position.
        position: usize,
        /// Offending character.
        found: char,
    },

    /// The operands need a larger transform than the path allows.
    #[error("operands too large for the {path} path: transform size {required} exceeds {max}")]
    OperandTooLarge {
        /// Path that was asked to run.
        path: Path,
        /// Transform size the operands need.
        required: usize,
        /// Configured maximum for the path.
        max: usize,
    },

    /// Estimated working memory exceeds the configured limit.
    #[error("estimated memory {required} bytes exceeds limit {limit} bytes")]
    MemoryLimitExceeded {
        /// Estimated bytes.
        required: usize,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// A modulus has no inverse where CRT or the transform needs one.
    #[error("no inverse of {value} modulo {modulus}; check the configured moduli")]
    ModulusInverseUndefined {
        /// Value to invert.
        value: u64,
        /// Modulus.
        modulus: u64,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Transform contract violated.
    #[error("transform error: {0}")]
    Transform(NttError),

    /// Internal invariant broken (overflow in carry propagation).
    #[error("internal error: {0}")]
    Internal(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

impl MulError {
    /// Whether the error was caused by the operands rather than the setup.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyOperand
                | Self::InvalidDigitInput { .. }
                | Self::OperandTooLarge { .. }
                | Self::MemoryLimitExceeded { .. }
        )
    }
}

impl From<NttError> for MulError {
    fn from(err: NttError) -> Self {
        match err {
            NttError::NotInvertible { value, modulus } => {
                Self::ModulusInverseUndefined { value, modulus }
            }
            other => Self::Transform(other),
        }
    }
}

/// Public trait for multipliers, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Multiply two decimal strings.
    fn multiply(&self, a: &str, b: &str, opts: &Options) -> Result<String, MulError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `MulCalculator` which adds validation and the zero fast path.
pub trait CoreCalculator: Send + Sync {
    /// Multiply two validated, non-zero operands.
    fn multiply_core(&self, a: &Operand<'_>, b: &Operand<'_>, opts: &Options)
        -> Result<String, MulError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreCalculator` with validation and the zero fast path.
pub struct MulCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl MulCalculator {
    /// Create a new `MulCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for MulCalculator {
    fn multiply(&self, a: &str, b: &str, opts: &Options) -> Result<String, MulError> {
        let a = Operand::parse(a)?;
        let b = Operand::parse(b)?;
        opts.validate()?;

        if a.is_zero() || b.is_zero() {
            return Ok("0".to_string());
        }

        self.inner.multiply_core(&a, &b, opts)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
