//! Orchestration interfaces.

use std::time::Duration;

use nttcalc_core::calculator::MulError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one calculator's product for the operands `a` and `b`.
    fn present_result(&self, result: &CalculationResult, a: &str, b: &str, details: bool);

    /// Present a side-by-side comparison of several calculators.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Calculator name.
    pub algorithm: String,
    /// The decimal product or a structured error.
    pub outcome: Result<String, MulError>,
    /// Wall-clock duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// The product, if the calculation succeeded.
    #[must_use]
    pub fn product(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }
}
