//! Calibration engine: measure, then build a profile.

use crate::adaptive::{self, EstimatedThreshold, FULL_SAMPLES, QUICK_SAMPLES};
use crate::microbench;
use crate::profile::CalibrationProfile;

/// How much measuring to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationMode {
    /// Dense samples, four bisection rounds, and a parallel-moduli trial.
    Full,
    /// Few samples and two bisection rounds.
    Auto,
    /// No measuring: the saved profile if usable, else defaults.
    Cached,
}

impl CalibrationMode {
    /// Default sample lengths, timed runs per sample, bisection rounds.
    fn budget(self) -> (&'static [usize], u32, u32) {
        match self {
            Self::Full => (&FULL_SAMPLES, 5, 4),
            Self::Auto | Self::Cached => (&QUICK_SAMPLES, 2, 2),
        }
    }
}

/// Called once at the start of every calibration step.
pub type ProgressCallback = Box<dyn Fn(CalibrationProgress) + Send>;

/// Step announcement passed to a [`ProgressCallback`].
#[derive(Debug, Clone)]
pub struct CalibrationProgress {
    pub step: String,
    /// 1-based.
    pub current: usize,
    pub total: usize,
}

/// Operand length for the parallel-moduli trial.
const PARALLEL_TRIAL_DIGITS: usize = 200_000;

/// Parallel moduli are enabled only above this speedup.
const PARALLEL_MIN_SPEEDUP: f64 = 1.1;

/// Runs a calibration in the chosen mode.
pub struct CalibrationEngine {
    mode: CalibrationMode,
    samples: Option<Vec<usize>>,
    progress_cb: Option<ProgressCallback>,
}

impl CalibrationEngine {
    #[must_use]
    pub fn new(mode: CalibrationMode) -> Self {
        Self {
            mode,
            samples: None,
            progress_cb: None,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, cb: ProgressCallback) -> Self {
        self.progress_cb = Some(cb);
        self
    }

    /// Sample these operand lengths instead of the mode's defaults.
    #[must_use]
    pub fn with_samples(mut self, samples: Vec<usize>) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Run the calibration.
    #[must_use]
    pub fn calibrate(&self) -> CalibrationProfile {
        if self.mode == CalibrationMode::Cached {
            return load_cached();
        }

        let steps: &[&str] = match self.mode {
            CalibrationMode::Full => &[
                "Sampling simple and hybrid paths",
                "Measuring parallel moduli",
                "Building profile",
            ],
            _ => &["Running adaptive estimation", "Building profile"],
        };
        let mut step = steps.iter().enumerate();
        let mut next_step = || {
            if let Some((i, name)) = step.next() {
                self.announce(name, i + 1, steps.len());
            }
        };

        next_step();
        let estimate = self.estimate();

        let parallel_moduli = if self.mode == CalibrationMode::Full {
            next_step();
            let overhead = microbench::measure_parallel_moduli(PARALLEL_TRIAL_DIGITS);
            tracing::info!(speedup = overhead.speedup, "parallel moduli trial");
            overhead.speedup > PARALLEL_MIN_SPEEDUP
        } else {
            false
        };

        next_step();
        tracing::info!(
            mode = ?self.mode,
            threshold = estimate.hybrid_threshold,
            measured = estimate.measured,
            parallel_moduli,
            "calibration finished"
        );
        CalibrationProfile::for_current_machine(estimate.hybrid_threshold, parallel_moduli)
    }

    fn estimate(&self) -> EstimatedThreshold {
        let (defaults, runs, rounds) = self.mode.budget();
        let samples = self.samples.as_deref().unwrap_or(defaults);
        adaptive::estimate_threshold(samples, runs, rounds)
    }

    fn announce(&self, step: &str, current: usize, total: usize) {
        tracing::debug!(step, current, total, "calibration step");
        if let Some(cb) = &self.progress_cb {
            cb(CalibrationProgress {
                step: step.to_string(),
                current,
                total,
            });
        }
    }
}

fn load_cached() -> CalibrationProfile {
    crate::io::load_validated_profile().unwrap_or_else(|| {
        tracing::warn!("no usable cached profile, using defaults");
        CalibrationProfile::default()
    })
}
