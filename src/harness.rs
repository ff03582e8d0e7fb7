//! Thread fan-out and fan-in.
//!
//! [`run_workers`] creates all worker threads up front, hands each one a
//! disjoint `&mut` slot of a preallocated results buffer, and joins them
//! all before returning. One writer per slot and a single reader after the
//! join — no locks, the borrow partition is the whole synchronization
//! story.
//!
//! The worker callback receives the thread index and is expected to build
//! and run one pipeline instance; see [`crate::pipeline::run`].

use std::thread;

use crate::error::PipebenchError;
use crate::pipeline::TimedRun;

/// What one worker thread produced.
#[derive(Debug)]
pub struct WorkerOutcome {
    /// Index of the thread that owned this slot.
    pub index: usize,
    /// The timed run, or the per-thread failure that prevented one.
    pub result: Result<TimedRun, PipebenchError>,
}

/// Run `worker` on `thread_count` scoped threads and gather every outcome.
///
/// Exactly `thread_count` outcomes are returned, in index order. A worker
/// that fails only marks its own slot — the remaining threads run to
/// completion regardless. There is no cancellation or timeout: the scope
/// exit is the join barrier.
///
/// # Panics
///
/// Propagates a panic from any worker thread after all threads have been
/// joined.
pub fn run_workers<F>(thread_count: usize, worker: F) -> Vec<WorkerOutcome>
where
    F: Fn(usize) -> Result<TimedRun, PipebenchError> + Sync,
{
    let mut slots: Vec<Option<WorkerOutcome>> = Vec::with_capacity(thread_count);
    slots.resize_with(thread_count, || None);

    thread::scope(|scope| {
        for (index, slot) in slots.iter_mut().enumerate() {
            let worker = &worker;
            scope.spawn(move || {
                let result = worker(index);
                log::debug!("[thread {index}] worker finished");
                *slot = Some(WorkerOutcome { index, result });
            });
        }
    });

    slots.into_iter().flatten().collect()
}
