//! Timing of the benchmark's outer iterations.
//!
//! A single [`Instant`] brackets the whole timed loop and yields the reported
//! average. A lap is also taken at the end of every outer iteration; laps
//! partition the same interval and feed [`TimingStats`].

use std::time::{Duration, Instant};

use serde::Serialize;

/// Timing statistics over lap samples.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TimingStats {
    /// Mean time in nanoseconds.
    pub mean_ns: f64,

    /// Population standard deviation in nanoseconds.
    pub std_dev_ns: f64,

    /// Minimum time in nanoseconds.
    pub min_ns: u64,

    /// Maximum time in nanoseconds.
    pub max_ns: u64,

    /// Number of samples.
    pub sample_count: usize,
}

impl TimingStats {
    /// Computes statistics from timing samples in nanoseconds.
    ///
    /// An empty slice yields all-zero statistics.
    pub fn from_samples(samples: &[u64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let n = samples.len();
        let sum: u64 = samples.iter().sum();
        let mean = sum as f64 / n as f64;

        let variance: f64 = samples
            .iter()
            .map(|&x| {
                let diff = x as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / n as f64;

        let min = samples.iter().copied().min().unwrap_or(0);
        let max = samples.iter().copied().max().unwrap_or(0);

        Self {
            mean_ns: mean,
            std_dev_ns: variance.sqrt(),
            min_ns: min,
            max_ns: max,
            sample_count: n,
        }
    }

    /// Mean time in milliseconds.
    pub fn mean_ms(&self) -> f64 {
        self.mean_ns / 1_000_000.0
    }

    /// Coefficient of variation as a percentage; 0 when the mean is 0.
    pub fn cv_percent(&self) -> f64 {
        if self.mean_ns > 0.0 {
            (self.std_dev_ns / self.mean_ns) * 100.0
        } else {
            0.0
        }
    }
}

/// Elapsed time of the timed loop.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IterationTiming {
    /// Wall-clock time of the whole loop in nanoseconds.
    pub total_ns: u64,

    /// Number of outer iterations timed.
    pub iterations: usize,

    /// Elapsed time of each outer iteration in nanoseconds.
    pub laps_ns: Vec<u64>,

    /// Summary of `laps_ns`.
    pub lap_stats: TimingStats,
}

impl IterationTiming {
    /// Average time per outer iteration in nanoseconds: total / iterations.
    pub fn average_ns(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.total_ns as f64 / self.iterations as f64
    }
}

/// Runs `body` once per outer iteration under a single timer.
///
/// `body` receives the zero-based iteration index.
pub fn time_iterations<F>(iterations: usize, mut body: F) -> IterationTiming
where
    F: FnMut(usize),
{
    let mut laps_ns = Vec::with_capacity(iterations);

    let start = Instant::now();
    let mut lap = start;
    for i in 0..iterations {
        body(i);
        let now = Instant::now();
        laps_ns.push(saturating_ns(now - lap));
        lap = now;
    }
    let total = start.elapsed();

    let lap_stats = TimingStats::from_samples(&laps_ns);
    IterationTiming {
        total_ns: saturating_ns(total),
        iterations,
        laps_ns,
        lap_stats,
    }
}

#[inline]
fn saturating_ns(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}
