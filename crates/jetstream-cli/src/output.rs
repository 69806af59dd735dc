//! Output formatting for flight rendering.
//!
//! This module provides formatters for rendering flight summaries
//! in the formats selectable with `--format`.

use std::io::{self, Write};

use clap::ValueEnum;
use jetstream_lib::{FlightRenderMode, FlightSummary};

use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Total cost, then the ridden jet streams as `[(start,end), ...]`.
    #[default]
    Plain,
    /// One line per leg with its cost.
    Detailed,
    /// Machine-readable summary.
    Json,
}

/// Render a flight summary in the classic two-line format.
pub fn render_plain(summary: &FlightSummary) {
    print!("{}", summary.render(FlightRenderMode::Plain));
}

/// Render a flight summary leg by leg.
pub fn render_detailed(summary: &FlightSummary, palette: &ColorPalette) {
    print!("{}", format_detailed(summary, palette));
}

/// Build the detailed leg listing with the palette's colors applied.
pub fn format_detailed(summary: &FlightSummary, palette: &ColorPalette) -> String {
    summary.render_styled(FlightRenderMode::Detailed, &palette.render_style())
}

/// Render a flight summary in JSON format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json(summary: &FlightSummary) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, summary).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
