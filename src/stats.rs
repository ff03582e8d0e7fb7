//! Throughput statistics.
//!
//! Folds the per-thread outcomes gathered by the harness into a
//! [`RunSummary`]: one timing entry per thread, the summed wall-clock
//! time, and the average over the full thread count.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::time::Duration;

use crate::harness::WorkerOutcome;
use crate::pipeline::RunOutcome;

/// Timing record for a single worker thread.
#[derive(Debug, Clone)]
pub struct ThreadTiming {
    /// Worker thread index.
    pub index: usize,
    /// Elapsed wall-clock time; `None` when the pipeline never ran.
    pub elapsed: Option<Duration>,
    /// Failure detail, for builds that failed or runs the bus cut short.
    pub error: Option<String>,
}

impl ThreadTiming {
    /// Elapsed time in microseconds, the granularity the report is kept in.
    pub fn elapsed_micros(&self) -> Option<u64> {
        self.elapsed.map(|elapsed| elapsed.as_micros() as u64)
    }
}

/// Aggregated result of one benchmark run.
///
/// The average divides by the full thread count: a thread whose pipeline
/// failed to build contributes zero to the sum but still counts in the
/// divisor, and an errored run contributes its shortened duration. Both
/// skew the aggregate — by the same rule the original harness used.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// One entry per worker thread, in index order.
    pub timings: Vec<ThreadTiming>,
    /// Sum of all recorded durations.
    pub total: Duration,
    /// `total` divided by the thread count.
    pub average: Duration,
}

impl RunSummary {
    /// Fold the harness outcomes into per-thread timings and aggregates.
    pub fn from_outcomes(outcomes: &[WorkerOutcome]) -> Self {
        let mut timings = Vec::with_capacity(outcomes.len());
        let mut total = Duration::ZERO;

        for outcome in outcomes {
            match &outcome.result {
                Ok(run) => {
                    total += run.elapsed;
                    let error = match &run.outcome {
                        RunOutcome::Completed => None,
                        RunOutcome::Errored(reason) => Some(reason.clone()),
                    };
                    timings.push(ThreadTiming {
                        index: outcome.index,
                        elapsed: Some(run.elapsed),
                        error,
                    });
                }
                Err(error) => {
                    timings.push(ThreadTiming {
                        index: outcome.index,
                        elapsed: None,
                        error: Some(error.to_string()),
                    });
                }
            }
        }

        let average = if timings.is_empty() {
            Duration::ZERO
        } else {
            total / timings.len() as u32
        };

        Self {
            timings,
            total,
            average,
        }
    }

    /// Number of threads whose pipeline neither built nor completed cleanly.
    pub fn failure_count(&self) -> usize {
        self.timings
            .iter()
            .filter(|timing| timing.error.is_some())
            .count()
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for timing in &self.timings {
            match timing.elapsed {
                Some(elapsed) => writeln!(
                    f,
                    "[Thread {}] Execution time: {:.6} seconds",
                    timing.index,
                    elapsed.as_secs_f64(),
                )?,
                None => writeln!(
                    f,
                    "[Thread {}] Did not run: {}",
                    timing.index,
                    timing.error.as_deref().unwrap_or("unknown failure"),
                )?,
            }
        }
        writeln!(
            f,
            "-- Average execution time: {:.6} seconds --",
            self.average.as_secs_f64(),
        )
    }
}
