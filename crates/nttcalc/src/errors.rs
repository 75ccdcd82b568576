//! Error handling and exit codes.

use nttcalc_core::calculator::MulError;
use nttcalc_core::constants::exit_codes;

/// Exit code for a multiplication error.
#[must_use]
pub fn handle_error(err: &MulError) -> i32 {
    match err {
        MulError::EmptyOperand
        | MulError::InvalidDigitInput { .. }
        | MulError::OperandTooLarge { .. }
        | MulError::MemoryLimitExceeded { .. } => exit_codes::ERROR_INPUT,
        MulError::Config(_) | MulError::ModulusInverseUndefined { .. } => exit_codes::ERROR_CONFIG,
        MulError::Mismatch => exit_codes::ERROR_MISMATCH,
        MulError::Transform(_) | MulError::Internal(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for a top-level error; anything that is not a `MulError` is
/// a generic failure.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<MulError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
