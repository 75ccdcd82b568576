//! Calculator selection logic.

use std::sync::Arc;

use nttcalc_core::calculator::{Calculator, MulError};
use nttcalc_core::registry::CalculatorFactory;

/// Get calculators to run based on algorithm selection.
///
/// `"all"` expands to every registered calculator, in registry order.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, MulError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
