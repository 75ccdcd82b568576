//! CLI result presenter.

use std::fmt::Write as _;

use nttcalc_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_duration, format_number, format_result};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Build the report printed for one result.
    ///
    /// Quiet mode reduces it to the bare product.
    #[must_use]
    pub fn render_result(
        &self,
        result: &CalculationResult,
        a: &str,
        b: &str,
        details: bool,
    ) -> String {
        let product = match &result.outcome {
            Ok(p) => p.as_str(),
            Err(e) => return format!("{}: {e}", result.algorithm),
        };
        if self.quiet {
            return product.to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "Algorithm: {}", result.algorithm);
        let _ = writeln!(
            out,
            "Operands: {} x {} digits",
            format_number(a.len() as u64),
            format_number(b.len() as u64)
        );
        let _ = writeln!(out, "Duration: {}", format_duration(result.duration));
        if details {
            let _ = writeln!(out, "Product digits: {}", format_number(product.len() as u64));
        }
        let _ = write!(out, "Product: {}", format_result(product, self.verbose));
        out
    }

    /// Build the comparison table; empty in quiet mode.
    #[must_use]
    pub fn render_comparison(&self, results: &[CalculationResult]) -> String {
        if self.quiet {
            return String::new();
        }
        let mut out = String::from("\nComparison Results:\n");
        let _ = writeln!(out, "{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() { "ERROR" } else { "OK" };
            let _ = writeln!(
                out,
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
        out
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult, a: &str, b: &str, details: bool) {
        println!("{}", self.render_result(result, a, b, details));
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if !self.quiet {
            print!("{}", self.render_comparison(results));
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
