//! Micro-benchmarks for calibration.

use nttcalc_core::calculator::CoreCalculator;
use nttcalc_core::operand::Operand;
use nttcalc_core::options::Options;
use nttcalc_core::{HybridNtt, SimpleNtt};
use nttcalc_ntt::BufferPool;

use crate::runner::{benchmark_detailed, Timing};

/// Time both paths at each length and report which one wins.
///
/// Lengths the simple path cannot handle under default limits count as
/// hybrid wins. A length the hybrid path rejects is reported as a simple
/// win.
#[must_use]
pub fn find_hybrid_crossover(lengths: &[usize], iterations: u32) -> Vec<CrossoverPoint> {
    let simple = SimpleNtt::new();
    let hybrid = HybridNtt::new();
    let opts = Options::default();
    let simple_limit = max_simple_digits(&opts);

    lengths
        .iter()
        .map(|&digits| {
            let (a, b) = make_operands(digits);
            let hybrid_time = timed(&hybrid, hybrid.pool(), &a, &b, &opts, iterations);
            let simple_time = if digits > simple_limit {
                None
            } else {
                timed(&simple, simple.pool(), &a, &b, &opts, iterations)
            };
            let point = CrossoverPoint::new(digits, simple_time.as_ref(), hybrid_time.as_ref());
            tracing::debug!(
                digits,
                simple_ns = point.simple_ns,
                hybrid_ns = point.hybrid_ns,
                "crossover sample"
            );
            point
        })
        .collect()
}

/// Compare sequential and parallel per-modulus convolution on the hybrid path.
///
/// A length the hybrid path rejects reports a speedup of 1.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn measure_parallel_moduli(digits: usize) -> ParallelOverhead {
    let calc = HybridNtt::new();
    let (a, b) = make_operands(digits);
    let sequential_opts = Options::default();
    let parallel_opts = Options {
        parallel_moduli: true,
        ..Options::default()
    };

    let sequential = timed(&calc, calc.pool(), &a, &b, &sequential_opts, 5);
    let parallel = timed(&calc, calc.pool(), &a, &b, &parallel_opts, 5);
    let (seq_ns, par_ns) = match (sequential, parallel) {
        (Some(s), Some(p)) => (s.median_ns(), p.median_ns()),
        _ => (0, 0),
    };

    ParallelOverhead {
        digits,
        sequential_ns: seq_ns,
        parallel_ns: par_ns,
        speedup: if par_ns > 0 {
            seq_ns as f64 / par_ns as f64
        } else {
            1.0
        },
    }
}

/// Longest operand pair the simple path accepts under `opts`.
#[must_use]
pub fn max_simple_digits(opts: &Options) -> usize {
    opts.simple_max_transform / 2
}

/// Time `calc` on one operand pair, or `None` if it rejects the pair.
///
/// The untimed first call fills `pool`; its buffers are dropped afterwards
/// so a sweep over lengths does not keep every size class alive.
fn timed(
    calc: &dyn CoreCalculator,
    pool: &BufferPool,
    a: &str,
    b: &str,
    opts: &Options,
    iterations: u32,
) -> Option<Timing> {
    let (a, b) = (Operand::parse(a).ok()?, Operand::parse(b).ok()?);
    if let Err(e) = calc.multiply_core(&a, &b, opts) {
        tracing::warn!(calculator = calc.name(), digits = a.len(), error = %e, "sample skipped");
        return None;
    }

    pool.reset_stats();
    let timing = benchmark_detailed(0, iterations, || {
        std::hint::black_box(calc.multiply_core(&a, &b, opts).ok());
    })
    .labeled(format!("{}_{}", calc.name(), a.len()));

    tracing::trace!(
        label = %timing.label,
        pool = ?pool.stats(),
        pooled = pool.total_pooled(),
        "timed sample"
    );
    pool.clear();
    Some(timing)
}

/// Two deterministic non-zero operands of exactly `digits` digits.
#[allow(clippy::cast_possible_truncation)]
fn make_operands(digits: usize) -> (String, String) {
    let digits = digits.max(1);
    let a = (0..digits)
        .map(|i| char::from(b'1' + (i * 7 % 9) as u8))
        .collect();
    let b = (0..digits)
        .map(|i| char::from(b'1' + (i * 5 % 9) as u8))
        .collect();
    (a, b)
}

/// Timing of both paths at one operand length.
///
/// A path that could not run reports `u64::MAX`.
#[derive(Debug, Clone)]
pub struct CrossoverPoint {
    pub digits: usize,
    pub simple_ns: u64,
    pub hybrid_ns: u64,
    pub hybrid_is_faster: bool,
}

impl CrossoverPoint {
    fn new(digits: usize, simple: Option<&Timing>, hybrid: Option<&Timing>) -> Self {
        let simple_ns = simple.map_or(u64::MAX, Timing::median_ns);
        let hybrid_ns = hybrid.map_or(u64::MAX, Timing::median_ns);
        Self {
            digits,
            simple_ns,
            hybrid_ns,
            hybrid_is_faster: hybrid_ns < simple_ns,
        }
    }
}

/// Sequential vs parallel hybrid timing at one operand length.
#[derive(Debug, Clone)]
pub struct ParallelOverhead {
    pub digits: usize,
    pub sequential_ns: u64,
    pub parallel_ns: u64,
    pub speedup: f64,
}
