use anyhow::Context;
use api::bridge::ApiBridge;
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::ServerConfig;
use workflow::runner::Runner;

mod api;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Anti-radar telemetry demo backend")]
struct Args {
    /// Run a single offline sweep and emit a baseline summary
    #[arg(long, default_value_t = false)]
    once: bool,
    /// Load a server config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 3000)]
    port: u16,
    #[arg(long, default_value_t = 60)]
    duration: i64,
    /// Seed the generator for reproducible payloads
    #[arg(long)]
    seed: Option<u64>,
    /// Keep the HTTP bridge alive for incoming requests
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        ServerConfig::load(path)?
    } else {
        ServerConfig::from_args(args.port, args.duration, args.seed)
    };

    log::info!(
        "starting with port {} and default duration {}",
        config.port,
        config.default_duration
    );

    let runner = Arc::new(Runner::new(config.clone()));
    let bridge = ApiBridge::new(runner.clone());

    if args.once {
        let report = runner.sweep(config.default_duration)?;

        println!(
            "Offline sweep -> signals {}, avg frequency {:.1} MHz, peak amplitude {:.1}",
            report.source_signals.len(),
            report.average_frequency,
            report.peak_amplitude
        );
        bridge.publish_status("Offline sweep results ready.");

        let summary = format!(
            "signals={} avg_frequency={:.3} peak_amplitude={:.3} avg_snr={:.3} modulations={:?}\n",
            report.source_signals.len(),
            report.average_frequency,
            report.peak_amplitude,
            report.average_snr,
            report.distinct_modulation_types
        );
        let report_path = PathBuf::from("tools/data/offline_sweep.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(summary.as_bytes())?;
    }
    if args.serve {
        bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
