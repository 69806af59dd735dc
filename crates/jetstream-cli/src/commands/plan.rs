//! Plan command handler: load jet streams, plan the flight, render it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::info;

use jetstream_cli::output::{render_detailed, render_json, render_plain, OutputFormat};
use jetstream_cli::terminal::ColorPalette;
use jetstream_lib::{plan_flight, FlightAlgorithm, FlightInput, FlightSummary};

/// Planning algorithm selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// Single pass keeping a frontier of candidate paths.
    #[default]
    Frontier,
    /// Try every combination of jet streams (at most 20 streams).
    Exhaustive,
}

impl From<AlgorithmArg> for FlightAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Frontier => FlightAlgorithm::Frontier,
            AlgorithmArg::Exhaustive => FlightAlgorithm::Exhaustive,
        }
    }
}

/// Arguments for the plan command.
#[derive(Debug, Clone)]
pub struct PlanCommandArgs {
    /// Input file: weight line followed by `start end cost` lines.
    pub input: PathBuf,
    pub format: OutputFormat,
    pub algorithm: AlgorithmArg,
}

/// Handle a planning run.
pub fn handle_plan_command(args: &PlanCommandArgs) -> Result<()> {
    let input = FlightInput::from_path(&args.input)
        .with_context(|| format!("failed to load jet streams from {}", args.input.display()))?;

    let request = input.into_request().with_algorithm(args.algorithm.into());
    let plan = plan_flight(&request).context("failed to plan flight")?;

    info!(
        cost = plan.cost,
        destination = plan.destination,
        jets = plan.jet_count(),
        "flight planned"
    );

    let summary = FlightSummary::from_plan(&plan);
    match args.format {
        OutputFormat::Plain => render_plain(&summary),
        OutputFormat::Detailed => render_detailed(&summary, &ColorPalette::detect()),
        OutputFormat::Json => render_json(&summary).context("failed to write JSON output")?,
    }

    Ok(())
}
