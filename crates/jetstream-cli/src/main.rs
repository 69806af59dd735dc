use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueHint};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use jetstream_cli::output::OutputFormat;

mod commands;

use commands::plan::{handle_plan_command, AlgorithmArg, PlanCommandArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plan the cheapest flight along a line of jet streams"
)]
struct Cli {
    /// Input file: open-air weight on the first line, then `start end cost` per jet stream.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// How to print the planned flight.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Planning algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Frontier)]
    algorithm: AlgorithmArg,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    handle_plan_command(&PlanCommandArgs {
        input: cli.input,
        format: cli.format,
        algorithm: cli.algorithm,
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
