//! Pipeline construction and execution.
//!
//! Each worker thread builds its own pipeline instance from the shared
//! [`RunConfig`] and blocks on the pipeline bus until end-of-stream or error.
//! All decoding, encoding, and hardware-surface handling happens inside
//! GStreamer and its VA-API plugins; this module only assembles the element
//! graph and measures how long the run takes.
//!
//! Topologies:
//!
//! - decode: `filesrc ! h26xparse ! vaapih26xdec ! sink`
//! - transcode: `filesrc ! h26xparse ! vaapih26xdec ! capsfilter !
//!   vaapi*enc ! sink`

use std::time::{Duration, Instant};

use gstreamer as gst;

use gst::prelude::*;

use crate::config::{PipelineKind, RunConfig};
use crate::elements::SinkKind;
use crate::error::PipebenchError;

/// Initialize GStreamer.
///
/// Must be called once, after argument validation, before building or
/// running any pipeline.
pub fn init() -> Result<(), PipebenchError> {
    gst::init()?;
    Ok(())
}

/// How a timed pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The pipeline reached end-of-stream.
    Completed,
    /// The bus reported an error and the run loop stopped early.
    Errored(String),
}

/// Wall-clock measurement of one pipeline run.
///
/// The duration covers `Playing` through EOS or the first bus error. Errored
/// runs keep their (shortened) duration and are still folded into the
/// aggregate statistics.
#[derive(Debug, Clone)]
pub struct TimedRun {
    /// Elapsed wall-clock time for this run.
    pub elapsed: Duration,
    /// How the run ended.
    pub outcome: RunOutcome,
}

/// Check that every element factory the configuration needs is installed.
///
/// Run after [`init`] but before fanning out workers, so a missing VA-API
/// plugin fails once with a clear message instead of once per thread.
pub fn verify_elements(config: &RunConfig) -> Result<(), PipebenchError> {
    for factory in required_factories(config) {
        if gst::ElementFactory::find(factory).is_none() {
            return Err(PipebenchError::MissingElement { factory });
        }
    }
    Ok(())
}

fn required_factories(config: &RunConfig) -> Vec<&'static str> {
    let mut factories = vec![
        "filesrc",
        config.decoder.parser_factory(),
        config.decoder.decoder_factory(),
    ];

    if let Some(encoder) = config.encoder {
        factories.push("capsfilter");
        factories.push(encoder.encoder_factory());
    }

    factories.push(SinkKind::select(config.output.as_deref(), config.encoder).factory());
    factories
}

fn make_element(factory: &'static str, name: &str) -> Result<gst::Element, PipebenchError> {
    gst::ElementFactory::make(factory)
        .name(name)
        .build()
        .map_err(|error| PipebenchError::ElementCreate {
            factory,
            reason: error.to_string(),
        })
}

/// Build and link one pipeline instance for worker `index`.
pub fn build(config: &RunConfig, index: usize) -> Result<gst::Pipeline, PipebenchError> {
    let pipeline = match config.pipeline {
        PipelineKind::Decode => gst::Pipeline::with_name("decode-pipeline"),
        PipelineKind::Transcode => gst::Pipeline::with_name("transcode-pipeline"),
    };

    let source = make_element("filesrc", "source")?;
    source.set_property("location", config.input.to_string_lossy().as_ref());
    if config.num_buffers > 0 {
        source.set_property("num-buffers", config.num_buffers as i32);
    }

    let parser = make_element(config.decoder.parser_factory(), "parser")?;
    let decoder = make_element(config.decoder.decoder_factory(), "decoder")?;

    let sink_kind = SinkKind::select(config.output.as_deref(), config.encoder);
    let sink = make_element(sink_kind.factory(), "sink")?;
    if sink_kind.wants_location()
        && let Some(path) = config.output_path_for(index)
    {
        sink.set_property("location", path.to_string_lossy().as_ref());
    }

    match config.pipeline {
        PipelineKind::Decode => {
            log::debug!(
                "[thread {index}] building decode pipeline ({} -> {})",
                config.decoder.parser_factory(),
                config.decoder.decoder_factory(),
            );

            pipeline.add_many([&source, &parser, &decoder, &sink])?;
            gst::Element::link_many([&source, &parser, &decoder, &sink])
                .map_err(|error| PipebenchError::LinkFailed(error.to_string()))?;
        }
        PipelineKind::Transcode => {
            let Some(encoder_codec) = config.encoder else {
                return Err(PipebenchError::EncoderRequired);
            };

            log::debug!(
                "[thread {index}] building transcode pipeline ({} -> {} -> {})",
                config.decoder.decoder_factory(),
                config.memory.caps_description(),
                encoder_codec.encoder_factory(),
            );

            let filter = make_element("capsfilter", "caps")?;
            let caps: gst::Caps = config.memory.caps_description().parse()?;
            filter.set_property("caps", &caps);

            let encoder = make_element(encoder_codec.encoder_factory(), "encoder")?;

            pipeline.add_many([&source, &parser, &decoder, &filter, &encoder, &sink])?;
            gst::Element::link_many([&source, &parser, &decoder, &filter, &encoder, &sink])
                .map_err(|error| PipebenchError::LinkFailed(error.to_string()))?;
        }
    }

    Ok(pipeline)
}

/// Build worker `index`'s pipeline and run it to completion.
///
/// The clock starts before the transition to `Playing` and stops when the
/// bus delivers EOS or an error, mirroring what a caller of the blocking
/// run would observe. A bus error ends the loop early but the shortened
/// duration is still returned as part of the [`TimedRun`].
pub fn run(config: &RunConfig, index: usize) -> Result<TimedRun, PipebenchError> {
    let pipeline = build(config, index)?;
    let bus = pipeline.bus().ok_or(PipebenchError::MissingBus)?;

    let start = Instant::now();
    pipeline
        .set_state(gst::State::Playing)
        .map_err(|_| PipebenchError::StateChange { state: "Playing" })?;

    log::info!("[thread {index}] pipeline running");

    let mut outcome = RunOutcome::Completed;
    for message in bus.iter_timed(gst::ClockTime::NONE) {
        match message.view() {
            gst::MessageView::Eos(..) => {
                log::debug!("[thread {index}] reached end of stream");
                break;
            }
            gst::MessageView::Error(error) => {
                let reason = error.error().to_string();
                log::error!("[thread {index}] pipeline error: {reason}");
                if let Some(debug) = error.debug() {
                    log::debug!("[thread {index}] debug info: {debug}");
                }
                outcome = RunOutcome::Errored(reason);
                break;
            }
            _ => {}
        }
    }
    let elapsed = start.elapsed();

    if pipeline.set_state(gst::State::Null).is_err() {
        log::warn!("[thread {index}] failed to return pipeline to the Null state");
    }

    Ok(TimedRun { elapsed, outcome })
}
