//! # pipebench
//!
//! Benchmark concurrent GStreamer decode and transcode pipelines with
//! per-thread wall-clock timing.
//!
//! `pipebench` spins up one hardware-accelerated pipeline per worker thread
//! — decode (`filesrc ! parse ! vaapidec ! sink`) or transcode
//! (`filesrc ! parse ! vaapidec ! capsfilter ! vaapienc ! sink`) — runs each
//! to end-of-stream, and reports per-thread and average execution times.
//! All codec and hardware-surface work happens inside GStreamer and its
//! VA-API plugins via the [`gstreamer`](https://crates.io/crates/gstreamer)
//! crate; this crate contributes the configuration, the fan-out harness,
//! and the timing report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use pipebench::{
//!     DecoderCodec, MemoryType, PipelineKind, RunConfig, RunSummary, pipeline, run_workers,
//! };
//!
//! let config = RunConfig {
//!     pipeline: PipelineKind::Decode,
//!     decoder: DecoderCodec::H264,
//!     encoder: None,
//!     input: PathBuf::from("input.h264"),
//!     num_buffers: 0,
//!     threads: 4,
//!     memory: MemoryType::Sys,
//!     output: None,
//! };
//! config.validate()?;
//!
//! pipebench::init()?;
//! pipebench::verify_elements(&config)?;
//!
//! let outcomes = run_workers(config.threads, |index| pipeline::run(&config, index));
//! let summary = RunSummary::from_outcomes(&outcomes);
//! print!("{summary}");
//! # Ok::<(), pipebench::PipebenchError>(())
//! ```
//!
//! ## Requirements
//!
//! GStreamer 1.x development libraries must be installed, plus the `vaapi`
//! plugin set for the hardware decoders and encoders the benchmark
//! instantiates.

pub mod config;
mod elements;
pub mod error;
pub mod harness;
pub mod pipeline;
pub mod stats;

pub use config::{DecoderCodec, EncoderCodec, MemoryType, PipelineKind, RunConfig};
pub use error::PipebenchError;
pub use harness::{WorkerOutcome, run_workers};
pub use pipeline::{RunOutcome, TimedRun, init, verify_elements};
pub use stats::{RunSummary, ThreadTiming};
