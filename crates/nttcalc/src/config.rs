//! Application configuration from CLI flags and environment.

use clap::Parser;

use nttcalc_calibration::CalibrationProfile;
use nttcalc_core::calculator::MulError;
use nttcalc_core::constants::DEFAULT_SENTINEL;
use nttcalc_core::options::Options;

/// Exact multiplication of arbitrarily long decimal integers via the
/// number-theoretic transform.
///
/// With two operands, prints their product and exits. Without operands,
/// reads operand pairs from stdin until `exit` or end of input.
#[derive(Parser, Debug)]
#[command(name = "nttcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// First operand (decimal digits).
    #[arg(value_name = "A", requires = "b")]
    pub a: Option<String>,

    /// Second operand (decimal digits).
    #[arg(value_name = "B")]
    pub b: Option<String>,

    /// Algorithm to use: auto, simple, hybrid, bigint, or all.
    #[arg(long, default_value = "auto")]
    pub algo: String,

    /// Operand length in digits from which the hybrid path is used
    /// (0 = calibration profile or built-in default).
    #[arg(long, default_value = "0", env = "NTTCALC_THRESHOLD")]
    pub threshold: usize,

    /// Largest simple-path transform size (0 = default).
    #[arg(long, default_value = "0")]
    pub simple_max_size: usize,

    /// Largest hybrid-path transform size (0 = default).
    #[arg(long, default_value = "0")]
    pub hybrid_max_size: usize,

    /// Run the three hybrid-path convolutions in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Memory limit (e.g., "512M", "2G").
    #[arg(long, default_value = "")]
    pub memory_limit: String,

    /// Verbose output: debug logging and untruncated products.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the product to a file (one-shot mode).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Token that ends an interactive session.
    #[arg(long, default_value = DEFAULT_SENTINEL)]
    pub sentinel: String,

    /// Run full calibration.
    #[arg(long)]
    pub calibrate: bool,

    /// Run automatic calibration.
    #[arg(long)]
    pub auto_calibrate: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Operands for one-shot mode, if both were given.
    #[must_use]
    pub fn operands(&self) -> Option<(&str, &str)> {
        Some((self.a.as_deref()?, self.b.as_deref()?))
    }

    /// Build validated multiplication options.
    ///
    /// A zero threshold takes the profile's threshold when one is given and
    /// it fits the configured limits, otherwise the default.
    pub fn options(&self, profile: Option<&CalibrationProfile>) -> Result<Options, MulError> {
        let memory_limit = parse_memory_limit(&self.memory_limit).map_err(MulError::Config)?;
        let mut opts = Options {
            hybrid_threshold: self.threshold,
            simple_max_transform: self.simple_max_size,
            hybrid_max_transform: self.hybrid_max_size,
            parallel_moduli: self.parallel,
            memory_limit,
            ..Options::default()
        };

        if let (0, Some(p)) = (self.threshold, profile) {
            let candidate = Options {
                hybrid_threshold: p.hybrid_threshold,
                parallel_moduli: self.parallel || p.parallel_moduli,
                ..opts.clone()
            }
            .normalize();
            if candidate.validate().is_ok() {
                tracing::debug!(threshold = p.hybrid_threshold, "threshold from calibration profile");
                opts = candidate;
            } else {
                tracing::warn!(
                    threshold = p.hybrid_threshold,
                    "profile threshold does not fit the configured limits, using default"
                );
            }
        }

        let opts = opts.normalize();
        opts.validate()?;
        Ok(opts)
    }
}

/// Parse a memory size like "512M", "2G", "64K" or a plain byte count.
/// An empty string means unlimited (0).
pub fn parse_memory_limit(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1usize << 30)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1 << 20)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1 << 10)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit {s:?}: {e}"))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("memory limit {s:?} is too large"))
}
