//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use nttcalc_core::calculator::{Calculator, MulError};
use nttcalc_core::options::Options;

use crate::interfaces::CalculationResult;

/// Multiply `a` by `b` with every given calculator, one after another.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    a: &str,
    b: &str,
    opts: &Options,
) -> Vec<CalculationResult> {
    calculators
        .iter()
        .map(|calc| {
            let start = Instant::now();
            let outcome = calc.multiply(a, b, opts);
            let duration = start.elapsed();
            tracing::debug!(
                algorithm = calc.name(),
                ok = outcome.is_ok(),
                ?duration,
                "calculation finished"
            );
            CalculationResult {
                algorithm: calc.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Runs several calculators on every query and returns their common
/// product, or `Mismatch` when they disagree.
pub struct CrossCheck {
    calculators: Vec<Arc<dyn Calculator>>,
}

impl CrossCheck {
    #[must_use]
    pub fn new(calculators: Vec<Arc<dyn Calculator>>) -> Self {
        Self { calculators }
    }
}

impl Calculator for CrossCheck {
    fn multiply(&self, a: &str, b: &str, opts: &Options) -> Result<String, MulError> {
        let results = execute_calculations(&self.calculators, a, b, opts);
        analyze_comparison_results(&results)?;
        // analysis succeeded, so at least one product exists
        results
            .into_iter()
            .find_map(|r| r.outcome.ok())
            .ok_or(MulError::Mismatch)
    }

    fn name(&self) -> &str {
        "CrossCheck"
    }
}

/// Analyze comparison results for mismatches.
///
/// Failed entries are skipped. With no successful entry the first error is
/// returned as is.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), MulError> {
    let mut products = results.iter().filter_map(CalculationResult::product);

    let Some(first) = products.next() else {
        return Err(results
            .iter()
            .find_map(|r| r.outcome.clone().err())
            .unwrap_or_else(|| MulError::Internal("no calculation results".into())));
    };

    if products.any(|p| p != first) {
        return Err(MulError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use nttcalc_core::registry::{CalculatorFactory, DefaultFactory};

    fn ok(name: &str, product: &str) -> CalculationResult {
        CalculationResult {
            algorithm: name.into(),
            outcome: Ok(product.into()),
            duration: Duration::from_millis(1),
        }
    }

    fn failed(name: &str, err: MulError) -> CalculationResult {
        CalculationResult {
            algorithm: name.into(),
            outcome: Err(err),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn execute_single_calculator() {
        let factory = DefaultFactory::new();
        let calc = factory.get("auto").unwrap();
        let results = execute_calculations(&[calc], "123", "456", &Options::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].algorithm, "AutoNtt");
        assert_eq!(results[0].product(), Some("56088"));
    }

    #[test]
    fn execute_all_calculators_agree() {
        let factory = DefaultFactory::new();
        let calcs: Vec<_> = factory
            .available()
            .into_iter()
            .map(|n| factory.get(n).unwrap())
            .collect();
        let a = "999999999999999999";
        let results = execute_calculations(&calcs, a, a, &Options::default());
        assert_eq!(results.len(), 4);
        for r in &results {
            assert_eq!(
                r.product(),
                Some("999999999999999998000000000000000001"),
                "calculator {} failed",
                r.algorithm
            );
        }
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn execute_propagates_input_errors() {
        let factory = DefaultFactory::new();
        let calc = factory.get("simple").unwrap();
        let results = execute_calculations(&[calc], "12a", "1", &Options::default());
        assert!(matches!(
            results[0].outcome,
            Err(MulError::InvalidDigitInput { position: 2, .. })
        ));
    }

    #[test]
    fn cross_check_returns_common_product() {
        let factory = DefaultFactory::new();
        let calcs = factory
            .available()
            .into_iter()
            .map(|n| factory.get(n).unwrap())
            .collect();
        let check = CrossCheck::new(calcs);
        assert_eq!(check.name(), "CrossCheck");
        assert_eq!(
            check.multiply("123", "456", &Options::default()).unwrap(),
            "56088"
        );
        assert_eq!(
            check.multiply("12", "x", &Options::default()),
            Err(MulError::InvalidDigitInput {
                position: 0,
                found: 'x'
            })
        );
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![ok("A", "56088"), ok("B", "56088")];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![ok("A", "56088"), ok("B", "56089")];
        assert_eq!(analyze_comparison_results(&results), Err(MulError::Mismatch));
    }

    #[test]
    fn analyze_third_result_mismatches() {
        let results = vec![ok("A", "81"), ok("B", "81"), ok("C", "18")];
        assert_eq!(analyze_comparison_results(&results), Err(MulError::Mismatch));
    }

    #[test]
    fn analyze_ignores_error_entries() {
        let results = vec![
            ok("A", "81"),
            failed("B", MulError::EmptyOperand),
            ok("C", "81"),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_only_errors_returns_first_error() {
        let results = vec![
            failed("A", MulError::EmptyOperand),
            failed("B", MulError::Mismatch),
        ];
        assert_eq!(
            analyze_comparison_results(&results),
            Err(MulError::EmptyOperand)
        );
    }

    #[test]
    fn analyze_empty_results() {
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(MulError::Internal(_))
        ));
    }
}
