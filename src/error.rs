//! Error types for the `pipebench` crate.
//!
//! This module defines [`PipebenchError`], the unified error type returned by
//! all fallible operations in the crate. Variants carry enough context to
//! diagnose a failure from the aggregated report alone — the thread index is
//! attached by the harness, not by the error itself.

use gstreamer as gst;

use gst::glib;
use thiserror::Error;

use crate::config::EncoderCodec;

/// The unified error type for all `pipebench` operations.
///
/// Every public method that can fail returns `Result<T, PipebenchError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipebenchError {
    /// An encoder was supplied for a decode pipeline.
    #[error("Encoder must be NULL for a decode pipeline (got {encoder})")]
    EncoderNotAllowed {
        /// The encoder that was rejected.
        encoder: EncoderCodec,
    },

    /// A transcode pipeline was requested without an encoder.
    #[error("Transcode pipeline requires an encoder (h264 / h265 / jpeg)")]
    EncoderRequired,

    /// The thread count was zero.
    #[error("Thread count must be at least 1")]
    InvalidThreadCount,

    /// A required element factory is not registered with GStreamer.
    #[error("Required GStreamer element \"{factory}\" is not installed")]
    MissingElement {
        /// Factory name that could not be found.
        factory: &'static str,
    },

    /// An element could not be instantiated.
    #[error("Failed to create element \"{factory}\": {reason}")]
    ElementCreate {
        /// Factory name that failed to instantiate.
        factory: &'static str,
        /// Underlying reason reported by GStreamer.
        reason: String,
    },

    /// Two or more pipeline elements could not be linked.
    #[error("Failed to link pipeline elements: {0}")]
    LinkFailed(String),

    /// The pipeline refused a state transition.
    #[error("Failed to set pipeline to the {state} state")]
    StateChange {
        /// Target state of the rejected transition.
        state: &'static str,
    },

    /// The pipeline exposes no message bus.
    #[error("Pipeline has no message bus")]
    MissingBus,

    /// An error originating from the GStreamer libraries.
    #[error("GStreamer error: {0}")]
    Gstreamer(String),
}

impl From<glib::Error> for PipebenchError {
    fn from(error: glib::Error) -> Self {
        PipebenchError::Gstreamer(error.to_string())
    }
}

impl From<glib::BoolError> for PipebenchError {
    fn from(error: glib::BoolError) -> Self {
        PipebenchError::Gstreamer(error.to_string())
    }
}
