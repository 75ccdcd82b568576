//! Calibration profile (serializable).

use serde::{Deserialize, Serialize};

use nttcalc_core::constants::{
    DEFAULT_HYBRID_MAX_TRANSFORM, DEFAULT_HYBRID_THRESHOLD, DEFAULT_SIMPLE_MAX_TRANSFORM,
};
use nttcalc_core::options::Options;

/// Current profile format version.
pub const PROFILE_VERSION: u32 = 1;

/// Calibration profile holding the measured selection threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationProfile {
    /// Profile format version for compatibility checking.
    pub version: u32,
    /// Operand length (digits) from which the hybrid path is used.
    pub hybrid_threshold: usize,
    /// Simple-path transform limit the threshold was measured under.
    pub simple_max_transform: usize,
    /// Hybrid-path transform limit the threshold was measured under.
    pub hybrid_max_transform: usize,
    /// Whether the three hybrid convolutions ran faster in parallel.
    #[serde(default)]
    pub parallel_moduli: bool,
    /// CPU model used for calibration.
    pub cpu_model: String,
    /// Number of CPU cores.
    pub num_cores: usize,
    /// CPU fingerprint for invalidation.
    pub cpu_fingerprint: String,
    /// Calibration timestamp.
    pub timestamp: String,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            hybrid_threshold: DEFAULT_HYBRID_THRESHOLD,
            simple_max_transform: DEFAULT_SIMPLE_MAX_TRANSFORM,
            hybrid_max_transform: DEFAULT_HYBRID_MAX_TRANSFORM,
            parallel_moduli: false,
            cpu_model: String::new(),
            num_cores: core_count(),
            cpu_fingerprint: String::new(),
            timestamp: String::new(),
        }
    }
}

impl CalibrationProfile {
    /// Profile for this machine with the given measurements.
    #[must_use]
    pub fn for_current_machine(hybrid_threshold: usize, parallel_moduli: bool) -> Self {
        Self {
            hybrid_threshold,
            parallel_moduli,
            cpu_model: cpu_model(),
            cpu_fingerprint: cpu_fingerprint(),
            timestamp: current_timestamp(),
            ..Self::default()
        }
    }

    /// Whether the file format matches this build.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == PROFILE_VERSION
    }

    /// Whether the profile was recorded on a CPU with this fingerprint.
    /// An empty fingerprint on either side matches anything.
    #[must_use]
    pub fn matches_cpu(&self, fingerprint: &str) -> bool {
        match (self.cpu_fingerprint.as_str(), fingerprint) {
            ("", _) | (_, "") => true,
            (recorded, current) => recorded == current,
        }
    }

    /// Whether the stored limits and threshold form a valid configuration.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.apply(Options::default()).validate().is_ok()
    }

    /// Overlay the profile's threshold and limits onto `opts`.
    #[must_use]
    pub fn apply(&self, opts: Options) -> Options {
        Options {
            hybrid_threshold: self.hybrid_threshold,
            simple_max_transform: self.simple_max_transform,
            hybrid_max_transform: self.hybrid_max_transform,
            ..opts
        }
    }
}

fn core_count() -> usize {
    std::thread::available_parallelism().map_or(1, usize::from)
}

/// `cores=N` plus the CPU brand when sysinfo reports one.
#[must_use]
pub fn cpu_fingerprint() -> String {
    match cpu_model() {
        model if model.is_empty() => format!("cores={}", core_count()),
        model => format!("cores={};model={model}", core_count()),
    }
}

/// Brand string of the first CPU, empty when unknown.
#[must_use]
pub fn cpu_model() -> String {
    let sys = sysinfo::System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_owned())
        .unwrap_or_default()
}

/// `unix:<seconds since the epoch>`.
#[must_use]
pub fn current_timestamp() -> String {
    let secs = std::time::UNIX_EPOCH
        .elapsed()
        .map_or(0, |since| since.as_secs());
    format!("unix:{secs}")
}
