//! Property-based tests for the multiplication entry points.

use std::sync::Arc;

use num_bigint::BigUint;
use proptest::prelude::*;

use nttcalc_core::calculator::{Calculator, MulCalculator};
use nttcalc_core::options::Options;
use nttcalc_core::registry::{CalculatorFactory, DefaultFactory};
use nttcalc_core::AutoNtt;
use nttcalc_lib::config::parse_memory_limit;

fn reference(a: &str, b: &str) -> String {
    let x = BigUint::parse_bytes(a.as_bytes(), 10).unwrap();
    let y = BigUint::parse_bytes(b.as_bytes(), 10).unwrap();
    (x * y).to_string()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every registered calculator agrees with num-bigint.
    #[test]
    fn calculators_match_reference(a in "[0-9]{1,200}", b in "[0-9]{1,200}") {
        let factory = DefaultFactory::new();
        let want = reference(&a, &b);
        for name in factory.available() {
            let calc = factory.get(name).unwrap();
            prop_assert_eq!(calc.multiply(&a, &b, &Options::default()).unwrap(), want.clone(), "{}", name);
        }
    }

    /// A small threshold forces the hybrid path without changing results.
    #[test]
    fn threshold_does_not_change_products(a in "[1-9][0-9]{0,80}", b in "[1-9][0-9]{0,80}", t in 1usize..100) {
        let calc = MulCalculator::new(Arc::new(AutoNtt::new()));
        let opts = Options { hybrid_threshold: t, ..Options::default() };
        prop_assert_eq!(calc.multiply(&a, &b, &opts).unwrap(), reference(&a, &b));
    }

    /// Any non-digit character is rejected at its position.
    #[test]
    fn non_digits_rejected(prefix in "[0-9]{0,20}", bad in "[^0-9]", suffix in "[0-9]{0,20}") {
        let calc = MulCalculator::new(Arc::new(AutoNtt::new()));
        let operand = format!("{prefix}{bad}{suffix}");
        let err = calc.multiply(&operand, "7", &Options::default()).unwrap_err();
        prop_assert!(err.is_input_error());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Memory limits in megabytes scale by 2^20.
    #[test]
    fn memory_limit_megabytes(n in 0usize..100_000) {
        prop_assert_eq!(parse_memory_limit(&format!("{n}M")).unwrap(), n << 20);
    }
}
