//! Memory estimation for transform-based multiplication.

const WORD: usize = std::mem::size_of::<u64>();
const WIDE: usize = std::mem::size_of::<u128>();

/// Estimate working memory for a single-modulus multiplication of size `n`.
///
/// Two coefficient buffers plus one output digit per coefficient.
#[must_use]
pub fn estimate_simple_memory(n: usize) -> usize {
    n.saturating_mul(2 * WORD + 1)
}

/// Estimate working memory for a three-modulus multiplication of size `n`.
///
/// Two buffers per modulus, one wide accumulator per coefficient, and
/// `chunk_digits` output digits per coefficient.
#[must_use]
pub fn estimate_hybrid_memory(n: usize, chunk_digits: usize) -> usize {
    n.saturating_mul(6 * WORD + WIDE + chunk_digits)
}
