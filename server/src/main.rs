use anyhow::Context;
use clap::Parser;
use generator::track::{build_track, GeneratorConfig};
use http_bridge::bridge::HttpBridge;
use log::{info, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{ServerConfig, DEFAULT_ENDPOINT, DEFAULT_PORT};
use workflow::runner::Runner;

mod generator;
mod http_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Kinematic summary endpoint for timestamped 3D tracks")]
struct Args {
    /// Load the server config from YAML (overrides host/port/endpoint flags)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Summarize one synthetic track and exit instead of serving
    #[arg(long, default_value_t = false)]
    offline: bool,
    #[arg(long, default_value_t = 32)]
    samples: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Append the offline summary to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let server_config = if let Some(path) = args.config.as_ref() {
        ServerConfig::load(path)?
    } else {
        ServerConfig::from_args(args.host, args.port, &args.endpoint)
    };

    let runner = Arc::new(Runner::new());

    if args.offline {
        return run_offline(&runner, &args);
    }

    let bridge = HttpBridge::new(server_config, runner.clone());
    let runtime = TokioBuilder::new_multi_thread()
        .enable_all()
        .build()
        .context("creating runtime for the HTTP bridge")?;
    runtime.block_on(async {
        bridge
            .serve(async {
                if let Err(err) = signal::ctrl_c().await {
                    warn!("failed to listen for Ctrl+C: {}", err);
                }
            })
            .await
    })?;

    let metrics = runner.metrics();
    info!(
        "shutting down: processed={} rejected={} failed={}",
        metrics.processed, metrics.rejected, metrics.failed
    );
    Ok(())
}

fn run_offline(runner: &Runner, args: &Args) -> anyhow::Result<()> {
    let generator_config = GeneratorConfig {
        samples: args.samples,
        seed: args.seed,
        ..Default::default()
    };
    let track = build_track(&generator_config)?;
    let summary = runner
        .execute_samples(&track)
        .context("summarizing synthetic track")?;

    let report = format!(
        "samples={} seed={} distance={} speed={} velocity=({}, {}, {})\n",
        track.len(),
        generator_config.seed,
        summary.distance,
        summary.speed,
        summary.velocity.x,
        summary.velocity.y,
        summary.velocity.z
    );
    print!("Offline run -> {}", report);

    if let Some(report_path) = args.report.as_ref() {
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)
            .with_context(|| format!("opening report {}", report_path.display()))?;
        file.write_all(report.as_bytes())?;
    }

    Ok(())
}
