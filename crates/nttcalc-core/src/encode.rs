//! Digit chunking: decimal operands to coefficient arrays.

use crate::constants::CHUNK_DIGITS;
use crate::operand::Operand;

/// Coefficient count on the simple path (one per digit).
#[must_use]
pub fn digit_count(len: usize) -> usize {
    len
}

/// Coefficient count on the hybrid path (one per five-digit group).
#[must_use]
pub fn chunk_count(len: usize) -> usize {
    len.div_ceil(CHUNK_DIGITS)
}

/// Write one digit per coefficient, least significant first.
///
/// `out` must be zeroed and at least `op.len()` long; slots past the
/// operand stay zero.
pub fn encode_digits(op: &Operand<'_>, out: &mut [u64]) {
    debug_assert!(out.len() >= op.len());
    for (slot, &c) in out.iter_mut().zip(op.as_bytes().iter().rev()) {
        *slot = u64::from(c - b'0');
    }
}

/// Write one five-digit group per coefficient, least significant first.
///
/// Groups are cut from the right; the most significant group may be
/// shorter. Returns the number of coefficients written.
pub fn encode_chunks(op: &Operand<'_>, out: &mut [u64]) -> usize {
    let bytes = op.as_bytes();
    debug_assert!(out.len() >= chunk_count(bytes.len()));
    for (slot, group) in out.iter_mut().zip(bytes.rchunks(CHUNK_DIGITS)) {
        *slot = group
            .iter()
            .fold(0u64, |acc, &c| acc * 10 + u64::from(c - b'0'));
    }
    chunk_count(bytes.len())
}
