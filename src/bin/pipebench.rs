use std::{path::PathBuf, time::Duration};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pipebench::{
    DecoderCodec, EncoderCodec, MemoryType, PipelineKind, RunConfig, RunSummary, pipeline,
    run_workers,
};
use serde_json::json;

const CLI_AFTER_HELP: &str = "Examples:\n  pipebench dec h264 NULL input.h264 0 4 sys NULL\n  pipebench trans h264 h265 input.h264 500 2 dma out.h265 --progress\n  pipebench dec h265 NULL input.h265 0 8 sys decoded.yuv --json";

#[derive(Debug, Parser)]
#[command(
    name = "pipebench",
    version,
    about = "Benchmark concurrent GStreamer decode/transcode pipelines",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Pipeline topology: dec (decode) or trans (transcode).
    pipeline: String,

    /// Decoder type: h264 or h265.
    decoder: String,

    /// Encoder type: h264, h265, or jpeg. Set to NULL for a decode pipeline.
    encoder: String,

    /// Video file to be decoded (*.h264 / *.h265).
    input: PathBuf,

    /// Number of buffers to process. Set to 0 to decode the whole file.
    num_buffers: u32,

    /// Number of concurrent pipeline threads.
    num_threads: usize,

    /// Memory type: dma for DMABuf, sys for system memory.
    memory: String,

    /// Output file name; thread index is appended. Set to NULL for fakesink.
    output: String,

    /// Show additional logging output.
    #[arg(long)]
    verbose: bool,

    /// Show a spinner while the pipelines run.
    #[arg(long)]
    progress: bool,

    /// Print the summary as machine-readable JSON.
    #[arg(long)]
    json: bool,
}

/// Map the `NULL` sentinel to `None`, anything else to `Some`.
fn optional_arg(value: &str) -> Option<&str> {
    if value.eq_ignore_ascii_case("null") {
        None
    } else {
        Some(value)
    }
}

fn parse_config(cli: &Cli) -> Result<RunConfig, Box<dyn std::error::Error>> {
    let pipeline = PipelineKind::parse(&cli.pipeline)
        .ok_or(format!("unsupported pipeline: {}", cli.pipeline))?;

    let decoder =
        DecoderCodec::parse(&cli.decoder).ok_or(format!("unsupported decoder: {}", cli.decoder))?;

    let encoder = match optional_arg(&cli.encoder) {
        Some(value) => {
            Some(EncoderCodec::parse(value).ok_or(format!("unsupported encoder: {value}"))?)
        }
        None => None,
    };

    let memory =
        MemoryType::parse(&cli.memory).ok_or(format!("unsupported memory type: {}", cli.memory))?;

    let config = RunConfig {
        pipeline,
        decoder,
        encoder,
        input: cli.input.clone(),
        num_buffers: cli.num_buffers,
        threads: cli.num_threads,
        memory,
        output: optional_arg(&cli.output).map(PathBuf::from),
    };

    config.validate()?;
    Ok(config)
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn banner(config: &RunConfig) -> String {
    let encoder = config
        .encoder
        .map(|encoder| encoder.to_string())
        .unwrap_or_else(|| "NULL".to_string());
    format!(
        "== {} pipeline: {} thread(s), decoder {}, encoder {}, memory type {} ==",
        config.pipeline, config.threads, config.decoder, encoder, config.memory,
    )
}

fn summary_json(config: &RunConfig, summary: &RunSummary) -> serde_json::Value {
    json!({
        "pipeline": config.pipeline.to_string(),
        "decoder": config.decoder.to_string(),
        "encoder": config.encoder.map(|encoder| encoder.to_string()),
        "memory": config.memory.to_string(),
        "threads": config.threads,
        "per_thread": summary.timings.iter().map(|timing| json!({
            "thread": timing.index,
            "elapsed_us": timing.elapsed_micros(),
            "elapsed_seconds": timing.elapsed.map(|elapsed| elapsed.as_secs_f64()),
            "error": timing.error,
        })).collect::<Vec<_>>(),
        "total_seconds": summary.total.as_secs_f64(),
        "average_seconds": summary.average.as_secs_f64(),
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = parse_config(&cli)?;

    println!("{}", banner(&config));

    // Arguments are fully validated; only now touch GStreamer.
    pipebench::init()?;
    pipebench::verify_elements(&config)?;

    let spinner = if cli.progress {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template(
            "{spinner:.green} {msg} ({elapsed})",
        )?);
        bar.set_message(format!("running {} pipeline(s)", config.threads));
        bar.enable_steady_tick(Duration::from_millis(100));
        Some(bar)
    } else {
        None
    };

    let outcomes = run_workers(config.threads, |index| pipeline::run(&config, index));

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    let summary = RunSummary::from_outcomes(&outcomes);

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary_json(&config, &summary))?
        );
    } else {
        print!("{summary}");
    }

    let failures = summary.failure_count();
    if failures > 0 {
        eprintln!(
            "{} {}",
            "warning:".yellow().bold(),
            format!("{failures} of {} thread(s) reported a failure", config.threads).yellow(),
        );
    } else if !cli.json {
        println!(
            "{} {}",
            "success:".green().bold(),
            format!("{} pipeline(s) completed", config.threads).green(),
        );
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, optional_arg, parse_config};
    use pipebench::{EncoderCodec, PipelineKind};

    fn cli(pipeline: &str, encoder: &str, output: &str) -> Cli {
        Cli {
            pipeline: pipeline.to_string(),
            decoder: "h264".to_string(),
            encoder: encoder.to_string(),
            input: "input.h264".into(),
            num_buffers: 0,
            num_threads: 2,
            memory: "sys".to_string(),
            output: output.to_string(),
            verbose: false,
            progress: false,
            json: false,
        }
    }

    #[test]
    fn optional_arg_null_sentinel() {
        assert_eq!(optional_arg("NULL"), None);
        assert_eq!(optional_arg("null"), None);
        assert_eq!(optional_arg("out.h265"), Some("out.h265"));
    }

    #[test]
    fn parse_config_decode() {
        let config = parse_config(&cli("dec", "NULL", "NULL")).unwrap();
        assert_eq!(config.pipeline, PipelineKind::Decode);
        assert_eq!(config.encoder, None);
        assert_eq!(config.output, None);
    }

    #[test]
    fn parse_config_transcode() {
        let config = parse_config(&cli("trans", "jpeg", "out")).unwrap();
        assert_eq!(config.pipeline, PipelineKind::Transcode);
        assert_eq!(config.encoder, Some(EncoderCodec::Jpeg));
        assert_eq!(config.output, Some("out".into()));
    }

    #[test]
    fn parse_config_rejects_decode_with_encoder() {
        assert!(parse_config(&cli("dec", "h264", "NULL")).is_err());
    }

    #[test]
    fn parse_config_rejects_unknown_encoder() {
        assert!(parse_config(&cli("trans", "av1", "out")).is_err());
    }
}
