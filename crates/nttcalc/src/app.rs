//! Application entry point and dispatch.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::Result;

use nttcalc_calibration::calibration::{CalibrationEngine, CalibrationMode};
use nttcalc_cli::output::write_to_file;
use nttcalc_cli::presenter::CLIResultPresenter;
use nttcalc_cli::session::{run_session, SessionConfig};
use nttcalc_core::calculator::Calculator;
use nttcalc_core::constants::exit_codes;
use nttcalc_core::options::Options;
use nttcalc_core::registry::DefaultFactory;
use nttcalc_orchestration::calculator_selection::get_calculators_to_run;
use nttcalc_orchestration::interfaces::{CalculationResult, ResultPresenter};
use nttcalc_orchestration::orchestrator::{
    analyze_comparison_results, execute_calculations, CrossCheck,
};

use crate::config::AppConfig;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        nttcalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    if config.calibrate || config.auto_calibrate {
        return run_calibration(config);
    }

    let profile = if config.threshold == 0 {
        nttcalc_calibration::io::load_validated_profile()
    } else {
        None
    };
    let opts = config.options(profile.as_ref())?;
    tracing::debug!(?opts, "options");

    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.algo, &factory)?;

    match config.operands() {
        Some((a, b)) => run_once(config, &calculators, a, b, &opts),
        None => run_interactive(config, calculators, &opts),
    }
}

fn run_once(
    config: &AppConfig,
    calculators: &[Arc<dyn Calculator>],
    a: &str,
    b: &str,
    opts: &Options,
) -> Result<i32> {
    let results = execute_calculations(calculators, a, b, opts);
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);

    if results.len() > 1 {
        if !config.quiet {
            for result in &results {
                match &result.outcome {
                    Ok(_) => presenter.present_result(result, a, b, config.details),
                    Err(e) => presenter.present_error(&format!("{}: {e}", result.algorithm)),
                }
            }
            presenter.present_comparison(&results);
        }
        analyze_comparison_results(&results)?;
    }

    let product = match results.iter().find_map(CalculationResult::product) {
        Some(product) => product,
        None => match results.first() {
            Some(CalculationResult { outcome: Err(err), .. }) => return Err(err.clone().into()),
            _ => anyhow::bail!("no calculator selected"),
        },
    };
    if let [only] = results.as_slice() {
        presenter.present_result(only, a, b, config.details);
    } else if config.quiet {
        println!("{product}");
    }

    if let Some(ref path) = config.output {
        write_to_file(path, product)?;
    }
    Ok(exit_codes::SUCCESS)
}

fn run_interactive(
    config: &AppConfig,
    mut calculators: Vec<Arc<dyn Calculator>>,
    opts: &Options,
) -> Result<i32> {
    let calculator: Arc<dyn Calculator> = if calculators.len() == 1 {
        calculators.remove(0)
    } else {
        Arc::new(CrossCheck::new(calculators))
    };

    let stdin = io::stdin();
    let session = SessionConfig {
        sentinel: config.sentinel.clone(),
        prompt: stdin.is_terminal() && !config.quiet,
    };
    let stats = run_session(
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        calculator.as_ref(),
        opts,
        &session,
    )?;
    tracing::info!(
        products = stats.products,
        errors = stats.errors,
        "session ended"
    );
    Ok(exit_codes::SUCCESS)
}

fn run_calibration(config: &AppConfig) -> Result<i32> {
    let mode = if config.calibrate {
        CalibrationMode::Full
    } else {
        CalibrationMode::Auto
    };

    let quiet = config.quiet;
    let engine = CalibrationEngine::new(mode).with_progress(Box::new(move |p| {
        if !quiet {
            eprintln!("[{}/{}] {}", p.current, p.total, p.step);
        }
    }));
    let profile = engine.calibrate();
    let path = nttcalc_calibration::io::save_profile(&profile)?;

    if !config.quiet {
        nttcalc_cli::ui::print_header("Calibration complete");
        println!("  Hybrid threshold: {} digits", profile.hybrid_threshold);
        println!("  Parallel moduli: {}", profile.parallel_moduli);
        println!("  CPU: {} ({} cores)", profile.cpu_model, profile.num_cores);
        nttcalc_cli::ui::print_success(&format!("Profile saved to {}", path.display()));
    }
    Ok(exit_codes::SUCCESS)
}
