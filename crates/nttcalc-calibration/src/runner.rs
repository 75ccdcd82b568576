//! Timing harness for calibration runs.

use std::time::{Duration, Instant};

/// Time `runs` individual calls to `f` after `warmup` untimed ones.
pub fn benchmark_detailed<F: FnMut()>(warmup: u32, runs: u32, mut f: F) -> Timing {
    (0..warmup).for_each(|_| f());
    let samples = (0..runs.max(1))
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    Timing::from_samples(samples)
}

/// Order statistics over a set of timed calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    /// What was measured, e.g. `hybrid_20000`.
    pub label: String,
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    /// Number of timed calls.
    pub runs: u32,
}

impl Timing {
    /// Summarize raw samples; an empty set yields all-zero statistics.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_samples(mut samples: Vec<Duration>) -> Self {
        samples.sort_unstable();
        let runs = samples.len() as u32;
        let median = match samples.len() {
            0 => Duration::ZERO,
            n if n % 2 == 1 => samples[n / 2],
            n => (samples[n / 2 - 1] + samples[n / 2]) / 2,
        };
        Self {
            label: String::new(),
            mean: samples.iter().sum::<Duration>() / runs.max(1),
            median,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            runs,
        }
    }

    /// Attach a label.
    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Median in nanoseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn median_ns(&self) -> u64 {
        u64::try_from(self.median.as_nanos()).unwrap_or(u64::MAX)
    }
}
