//! Run configuration.
//!
//! [`RunConfig`] describes one benchmark invocation: the pipeline topology,
//! the codecs, the input, and the fan-out width. It is parsed and validated
//! once, then shared read-only across all worker threads.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//!
//! use pipebench::{DecoderCodec, EncoderCodec, MemoryType, PipelineKind, RunConfig};
//!
//! let config = RunConfig {
//!     pipeline: PipelineKind::Transcode,
//!     decoder: DecoderCodec::H264,
//!     encoder: Some(EncoderCodec::H265),
//!     input: PathBuf::from("input.h264"),
//!     num_buffers: 500,
//!     threads: 4,
//!     memory: MemoryType::Dma,
//!     output: Some(PathBuf::from("out.h265")),
//! };
//! config.validate().unwrap();
//! assert_eq!(
//!     config.output_path_for(2),
//!     Some(PathBuf::from("out.h265-2")),
//! );
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use crate::error::PipebenchError;

/// Which pipeline topology to benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    /// Decode only: `filesrc ! parse ! decode ! sink`.
    Decode,
    /// Decode then re-encode: `filesrc ! parse ! decode ! caps ! encode ! sink`.
    Transcode,
}

impl PipelineKind {
    /// Parse the command-line spelling (`dec` / `trans`), case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "dec" => Some(PipelineKind::Decode),
            "trans" => Some(PipelineKind::Transcode),
            _ => None,
        }
    }
}

impl Display for PipelineKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PipelineKind::Decode => write!(f, "dec"),
            PipelineKind::Transcode => write!(f, "trans"),
        }
    }
}

/// Input bitstream codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderCodec {
    /// H.264 / AVC.
    H264,
    /// H.265 / HEVC.
    H265,
}

impl DecoderCodec {
    /// Parse the command-line spelling (`h264` / `h265`), case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "h264" => Some(DecoderCodec::H264),
            "h265" => Some(DecoderCodec::H265),
            _ => None,
        }
    }
}

impl Display for DecoderCodec {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DecoderCodec::H264 => write!(f, "h264"),
            DecoderCodec::H265 => write!(f, "h265"),
        }
    }
}

/// Output codec for the transcode pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderCodec {
    /// H.264 / AVC.
    H264,
    /// H.265 / HEVC.
    H265,
    /// One JPEG image per frame.
    Jpeg,
}

impl EncoderCodec {
    /// Parse the command-line spelling (`h264` / `h265` / `jpeg`),
    /// case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "h264" => Some(EncoderCodec::H264),
            "h265" => Some(EncoderCodec::H265),
            "jpeg" => Some(EncoderCodec::Jpeg),
            _ => None,
        }
    }
}

impl Display for EncoderCodec {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            EncoderCodec::H264 => write!(f, "h264"),
            EncoderCodec::H265 => write!(f, "h265"),
            EncoderCodec::Jpeg => write!(f, "jpeg"),
        }
    }
}

/// Where decoded frames live between the decoder and the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryType {
    /// Hardware-accessible DMA buffers, no copy to system memory.
    Dma,
    /// Conventional system memory.
    Sys,
}

impl MemoryType {
    /// Parse the command-line spelling (`dma` / `sys`), case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "dma" => Some(MemoryType::Dma),
            "sys" => Some(MemoryType::Sys),
            _ => None,
        }
    }
}

impl Display for MemoryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MemoryType::Dma => write!(f, "dma"),
            MemoryType::Sys => write!(f, "sys"),
        }
    }
}

/// One benchmark invocation, shared read-only across worker threads.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Pipeline topology.
    pub pipeline: PipelineKind,
    /// Input bitstream codec.
    pub decoder: DecoderCodec,
    /// Output codec; `None` for the decode pipeline.
    pub encoder: Option<EncoderCodec>,
    /// Input bitstream file.
    pub input: PathBuf,
    /// Number of buffers to process before EOS; 0 processes the whole file.
    pub num_buffers: u32,
    /// Number of concurrent pipeline threads.
    pub threads: usize,
    /// Decoded-frame memory type (shapes the transcode caps filter).
    pub memory: MemoryType,
    /// Output path template; `None` discards output via `fakesink`.
    pub output: Option<PathBuf>,
}

impl RunConfig {
    /// Check the cross-field rules that individual argument parsing cannot.
    ///
    /// The decode pipeline must not carry an encoder, the transcode pipeline
    /// must carry one, and at least one worker thread is required. Runs
    /// before any GStreamer call.
    pub fn validate(&self) -> Result<(), PipebenchError> {
        match self.pipeline {
            PipelineKind::Decode => {
                if let Some(encoder) = self.encoder {
                    return Err(PipebenchError::EncoderNotAllowed { encoder });
                }
            }
            PipelineKind::Transcode => {
                if self.encoder.is_none() {
                    return Err(PipebenchError::EncoderRequired);
                }
            }
        }

        if self.threads == 0 {
            return Err(PipebenchError::InvalidThreadCount);
        }

        Ok(())
    }

    /// Resolve the output path for one worker thread.
    ///
    /// Thread `i` writes to `<output>-<i>`, so concurrent workers never
    /// collide. Returns `None` when no output template is configured.
    pub fn output_path_for(&self, index: usize) -> Option<PathBuf> {
        self.output.as_ref().map(|template| {
            let mut path = template.clone().into_os_string();
            path.push(format!("-{index}"));
            PathBuf::from(path)
        })
    }
}
