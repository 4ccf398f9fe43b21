//! Entry point for the `parsefuzz-replay` binary.

use std::path::PathBuf;

use clap::Parser;
use parsefuzz_core::{FaultTrigger, Harness, HarnessConfig, SerdeJsonBackend, DEMO_CRASH_ENV};
use parsefuzz_replay::{collect_inputs, ReplayError, Replayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "parsefuzz-replay", version)]
#[command(about = "Replay saved inputs through the JSON fuzzing adapter")]
#[command(after_help = "ENVIRONMENT:
    PARSEFUZZ_DEMO_CRASH  1, true or TRUE arms the demo crash (abort on inputs containing CRASHME)
    RUST_LOG              log filter (default: info)")]
struct Cli {
    /// Input files or corpus directories.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Arm the demo crash regardless of the environment.
    #[arg(long)]
    demo_crash: bool,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "replay failed");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ReplayError> {
    let mut config = HarnessConfig::from_env();
    if cli.demo_crash {
        config = HarnessConfig::new(FaultTrigger::enabled());
    }
    tracing::info!(
        demo_crash = config.fault_trigger.enabled,
        env = DEMO_CRASH_ENV,
        "replay starting"
    );

    let inputs = collect_inputs(&cli.paths)?;
    let replayer = Replayer::new(Harness::new(SerdeJsonBackend::new(), config));
    let summary = replayer.replay_all(&inputs)?;

    if cli.json {
        println!("{}", summary.to_json()?);
    } else {
        print!("{}", summary.to_text());
    }
    Ok(())
}
