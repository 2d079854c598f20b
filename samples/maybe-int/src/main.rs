//! maybe-int
//!
//! Builds the three-step computation once and runs it the requested number
//! of times.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p maybe-int -- --start 1
//! cargo run -p maybe-int -- --start 1 --fail-at 2
//! RUST_LOG=maybe_int=info,io_either=debug cargo run -p maybe-int -- --runs 2
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use maybe_int::Scenario;

#[derive(Parser, Debug)]
#[command(name = "maybe-int")]
#[command(about = "Runs three dependent, fail-fast steps as one deferred computation")]
struct Cli {
    /// Value produced by the first step
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    start: i32,

    /// Make this step (1-3) fail
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    fail_at: Option<u8>,

    /// How many times to run the computation
    #[arg(long, default_value_t = 1)]
    runs: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "maybe_int=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut scenario = Scenario::new(cli.start);
    if let Some(step) = cli.fail_at {
        scenario = scenario.failing_at(step);
    }

    let computation = scenario.computation();
    tracing::info!(runs = cli.runs, "computation built");

    for run in 1..=cli.runs {
        let triple = computation
            .run()
            .with_context(|| format!("run {run} of {}", cli.runs))?;
        println!("{triple}");
    }

    Ok(())
}
