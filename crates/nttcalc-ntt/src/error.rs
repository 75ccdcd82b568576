//! Error type for transform operations.

/// Errors raised by the modular kernel and the transform engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NttError {
    /// Transform length is zero or not a power of two.
    #[error("transform length {len} is not a power of two")]
    InvalidLength {
        /// Offending length.
        len: usize,
    },

    /// Transform length does not divide `prime - 1`.
    #[error("transform size {size} exceeds the 2-power order {max} of modulus {prime}")]
    UnsupportedSize {
        /// Requested transform size.
        size: usize,
        /// Largest power of two dividing `prime - 1`.
        max: u64,
        /// The prime.
        prime: u64,
    },

    /// Value has no inverse modulo the given modulus.
    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible {
        /// Value to invert.
        value: u64,
        /// Modulus.
        modulus: u64,
    },

    /// Modulus descriptor is not usable for transforms.
    #[error("invalid modulus ({prime}, {root}): {reason}")]
    InvalidModulus {
        /// The prime.
        prime: u64,
        /// The primitive root.
        root: u64,
        /// What check failed.
        reason: &'static str,
    },

    /// Operand arrays of a pointwise operation differ in length.
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch {
        /// Left operand length.
        left: usize,
        /// Right operand length.
        right: usize,
    },
}
