//! RunConfig parsing, validation, and output-naming tests.

use std::path::PathBuf;

use pipebench::{
    DecoderCodec, EncoderCodec, MemoryType, PipebenchError, PipelineKind, RunConfig,
};

fn decode_config() -> RunConfig {
    RunConfig {
        pipeline: PipelineKind::Decode,
        decoder: DecoderCodec::H264,
        encoder: None,
        input: PathBuf::from("input.h264"),
        num_buffers: 0,
        threads: 2,
        memory: MemoryType::Sys,
        output: None,
    }
}

fn transcode_config() -> RunConfig {
    RunConfig {
        pipeline: PipelineKind::Transcode,
        decoder: DecoderCodec::H265,
        encoder: Some(EncoderCodec::H264),
        input: PathBuf::from("input.h265"),
        num_buffers: 100,
        threads: 4,
        memory: MemoryType::Dma,
        output: Some(PathBuf::from("out.h264")),
    }
}

// ── Enumerated argument parsing ──────────────────────────────────

#[test]
fn parse_pipeline_kinds() {
    assert_eq!(PipelineKind::parse("dec"), Some(PipelineKind::Decode));
    assert_eq!(PipelineKind::parse("trans"), Some(PipelineKind::Transcode));
    assert_eq!(PipelineKind::parse("DEC"), Some(PipelineKind::Decode));
    assert_eq!(PipelineKind::parse("decode"), None);
    assert_eq!(PipelineKind::parse(""), None);
}

#[test]
fn parse_decoder_codecs() {
    assert_eq!(DecoderCodec::parse("h264"), Some(DecoderCodec::H264));
    assert_eq!(DecoderCodec::parse("H265"), Some(DecoderCodec::H265));
    assert_eq!(DecoderCodec::parse("jpeg"), None);
    assert_eq!(DecoderCodec::parse("vp9"), None);
}

#[test]
fn parse_encoder_codecs() {
    assert_eq!(EncoderCodec::parse("h264"), Some(EncoderCodec::H264));
    assert_eq!(EncoderCodec::parse("h265"), Some(EncoderCodec::H265));
    assert_eq!(EncoderCodec::parse("JPEG"), Some(EncoderCodec::Jpeg));
    assert_eq!(EncoderCodec::parse("av1"), None);
}

#[test]
fn parse_memory_types() {
    assert_eq!(MemoryType::parse("dma"), Some(MemoryType::Dma));
    assert_eq!(MemoryType::parse("sys"), Some(MemoryType::Sys));
    assert_eq!(MemoryType::parse("vram"), None);
}

#[test]
fn display_round_trips_cli_spelling() {
    assert_eq!(PipelineKind::Transcode.to_string(), "trans");
    assert_eq!(DecoderCodec::H265.to_string(), "h265");
    assert_eq!(EncoderCodec::Jpeg.to_string(), "jpeg");
    assert_eq!(MemoryType::Dma.to_string(), "dma");
}

// ── Cross-field validation ───────────────────────────────────────

#[test]
fn decode_rejects_encoder() {
    let mut config = decode_config();
    config.encoder = Some(EncoderCodec::H264);

    let error = config.validate().unwrap_err();
    assert!(matches!(error, PipebenchError::EncoderNotAllowed { .. }));
}

#[test]
fn transcode_requires_encoder() {
    let mut config = transcode_config();
    config.encoder = None;

    let error = config.validate().unwrap_err();
    assert!(matches!(error, PipebenchError::EncoderRequired));
}

#[test]
fn zero_threads_rejected() {
    let mut config = decode_config();
    config.threads = 0;

    let error = config.validate().unwrap_err();
    assert!(matches!(error, PipebenchError::InvalidThreadCount));
}

#[test]
fn valid_configs_pass() {
    decode_config().validate().expect("decode config is valid");
    transcode_config()
        .validate()
        .expect("transcode config is valid");
}

// ── Output naming ────────────────────────────────────────────────

#[test]
fn output_paths_unique_per_thread() {
    let config = transcode_config();

    let paths: Vec<_> = (0..8).map(|index| config.output_path_for(index)).collect();

    for (index, path) in paths.iter().enumerate() {
        assert_eq!(
            path.as_deref(),
            Some(PathBuf::from(format!("out.h264-{index}")).as_path()),
        );
    }
}

#[test]
fn output_path_is_deterministic() {
    let config = transcode_config();
    assert_eq!(config.output_path_for(3), config.output_path_for(3));
}

#[test]
fn no_output_template_means_no_paths() {
    let config = decode_config();
    assert_eq!(config.output_path_for(0), None);
}
