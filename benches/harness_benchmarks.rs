//! Benchmarks for the fan-out/fan-in harness.
//!
//! Run with: cargo bench
//!
//! Uses no-op workers so the numbers reflect thread creation, slot
//! hand-off, and join overhead rather than any pipeline work.

use std::time::Duration;

use criterion::Criterion;
use pipebench::{RunOutcome, RunSummary, TimedRun, run_workers};

fn noop_run() -> TimedRun {
    TimedRun {
        elapsed: Duration::ZERO,
        outcome: RunOutcome::Completed,
    }
}

fn benchmark_fan_out(criterion: &mut Criterion) {
    for thread_count in [1_usize, 4, 16] {
        criterion.bench_function(&format!("fan out {thread_count} no-op workers"), |bencher| {
            bencher.iter(|| run_workers(thread_count, |_| Ok(noop_run())));
        });
    }
}

fn benchmark_summary_aggregation(criterion: &mut Criterion) {
    let outcomes = run_workers(16, |index| {
        Ok(TimedRun {
            elapsed: Duration::from_micros(50 * (index as u64 + 1)),
            outcome: RunOutcome::Completed,
        })
    });

    criterion.bench_function("aggregate 16 worker outcomes", |bencher| {
        bencher.iter(|| RunSummary::from_outcomes(&outcomes));
    });
}

criterion::criterion_group!(benches, benchmark_fan_out, benchmark_summary_aggregation);
criterion::criterion_main!(benches);
