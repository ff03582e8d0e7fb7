//! Element and caps selection.
//!
//! Maps the enumerated run settings to GStreamer factory names and caps
//! descriptions. Pure lookup tables — nothing here touches the GStreamer
//! runtime, so the mapping stays testable without installed plugins.

use std::path::Path;

use crate::config::{DecoderCodec, EncoderCodec, MemoryType};

impl DecoderCodec {
    /// Bitstream parser element for this codec.
    pub(crate) fn parser_factory(self) -> &'static str {
        match self {
            DecoderCodec::H264 => "h264parse",
            DecoderCodec::H265 => "h265parse",
        }
    }

    /// VA-API decoder element for this codec.
    pub(crate) fn decoder_factory(self) -> &'static str {
        match self {
            DecoderCodec::H264 => "vaapih264dec",
            DecoderCodec::H265 => "vaapih265dec",
        }
    }
}

impl EncoderCodec {
    /// VA-API encoder element for this codec.
    pub(crate) fn encoder_factory(self) -> &'static str {
        match self {
            EncoderCodec::H264 => "vaapih264enc",
            EncoderCodec::H265 => "vaapih265enc",
            EncoderCodec::Jpeg => "vaapijpegenc",
        }
    }
}

impl MemoryType {
    /// Caps placed on the transcode caps filter.
    pub(crate) fn caps_description(self) -> &'static str {
        match self {
            MemoryType::Dma => "video/x-raw(memory:DMABuf)",
            MemoryType::Sys => "video/x-raw",
        }
    }
}

/// Which sink terminates the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SinkKind {
    /// Discard all output.
    Fake,
    /// Write the elementary stream to a single file.
    File,
    /// Write one file per buffer (JPEG transcode output).
    MultiFile,
}

impl SinkKind {
    /// Pick the sink for the configured output and encoder.
    pub(crate) fn select(output: Option<&Path>, encoder: Option<EncoderCodec>) -> Self {
        match (output, encoder) {
            (None, _) => SinkKind::Fake,
            (Some(_), Some(EncoderCodec::Jpeg)) => SinkKind::MultiFile,
            (Some(_), _) => SinkKind::File,
        }
    }

    /// Factory name of the selected sink.
    pub(crate) fn factory(self) -> &'static str {
        match self {
            SinkKind::Fake => "fakesink",
            SinkKind::File => "filesink",
            SinkKind::MultiFile => "multifilesink",
        }
    }

    /// Whether the sink takes a `location` property.
    pub(crate) fn wants_location(self) -> bool {
        !matches!(self, SinkKind::Fake)
    }
}
