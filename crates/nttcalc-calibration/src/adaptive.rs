//! Adaptive threshold estimation.

use nttcalc_core::constants::DEFAULT_HYBRID_THRESHOLD;
use nttcalc_core::options::Options;

use crate::microbench::{self, max_simple_digits};

/// Lengths sampled by a quick estimate.
pub const QUICK_SAMPLES: [usize; 5] = [1_000, 4_000, 10_000, 20_000, 32_000];

/// Lengths sampled by a full calibration.
pub const FULL_SAMPLES: [usize; 10] = [
    500, 1_000, 2_000, 4_000, 8_000, 12_000, 16_000, 20_000, 26_000, 32_000,
];

/// Threshold estimated from crossover samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatedThreshold {
    /// Digits from which the hybrid path is used.
    pub hybrid_threshold: usize,
    /// Whether a sample actually showed the hybrid path winning.
    pub measured: bool,
}

/// Estimate the hybrid threshold from `samples`, refining the first
/// winning interval with `refine_steps` bisection rounds.
#[must_use]
pub fn estimate_threshold(samples: &[usize], iterations: u32, refine_steps: u32) -> EstimatedThreshold {
    let crossovers = microbench::find_hybrid_crossover(samples, iterations);
    let Some(idx) = crossovers.iter().position(|c| c.hybrid_is_faster) else {
        tracing::info!("hybrid path never faster at sampled lengths, keeping default threshold");
        return EstimatedThreshold {
            hybrid_threshold: clamp_threshold(DEFAULT_HYBRID_THRESHOLD),
            measured: false,
        };
    };

    let high = crossovers[idx].digits;
    let low = if idx > 0 { crossovers[idx - 1].digits } else { high };
    let threshold = binary_search_crossover(low, high, iterations, refine_steps);
    EstimatedThreshold {
        hybrid_threshold: clamp_threshold(threshold),
        measured: true,
    }
}

/// Narrow the crossover between a length where the simple path wins (`low`)
/// and one where the hybrid path wins (`high`).
fn binary_search_crossover(mut low: usize, mut high: usize, iterations: u32, steps: u32) -> usize {
    for _ in 0..steps {
        if high - low < 256 {
            break;
        }
        let mid = low + (high - low) / 2;
        let faster = microbench::find_hybrid_crossover(&[mid], iterations)
            .first()
            .is_some_and(|p| p.hybrid_is_faster);
        if faster {
            high = mid;
        } else {
            low = mid;
        }
    }
    high
}

/// Keep a threshold inside what the default simple transform can serve.
#[must_use]
pub fn clamp_threshold(threshold: usize) -> usize {
    let max = max_simple_digits(&Options::default()) + 1;
    threshold.clamp(1, max)
}
