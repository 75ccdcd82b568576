//! nttcalc: exact decimal multiplication via the number-theoretic transform.

use nttcalc_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();
    init_tracing(config.verbose);

    let code = match app::run(&config) {
        Ok(code) => code,
        Err(err) => {
            nttcalc_cli::ui::print_error(&format!("{err:#}"));
            errors::exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

/// Log to stderr so stdout carries only products. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
