//! Validated decimal operands.

use crate::calculator::MulError;

/// A non-empty, unsigned decimal digit string borrowed from the caller.
///
/// Leading zeros are kept; they only add zero coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand<'a> {
    digits: &'a str,
}

impl<'a> Operand<'a> {
    /// Validate `s` as a decimal operand.
    pub fn parse(s: &'a str) -> Result<Self, MulError> {
        if s.is_empty() {
            return Err(MulError::EmptyOperand);
        }
        if let Some((position, found)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(MulError::InvalidDigitInput { position, found });
        }
        Ok(Self { digits: s })
    }

    /// Digit characters, most significant first.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.digits.as_bytes()
    }

    /// The operand as written.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.digits
    }

    /// Number of digit characters, leading zeros included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; operands have at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Whether every digit is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.bytes().all(|b| b == b'0')
    }
}
