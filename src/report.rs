//! Report rendering
//!
//! Text output mirrors what an operator reads on the console; JSON output
//! carries the same data for other tools.

use crate::parser::types::GridSize;
use crate::simulation::Replay;
use serde::Serialize;
use std::io::{self, Write};

/// Result of simulating every mower of a file, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub grid: GridSize,
    pub mowers: Vec<MowerReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MowerReport {
    /// Line of the mower's position line in the input
    pub line: usize,
    #[serde(flatten)]
    pub replay: Replay,
}

/// Write the console report
pub fn render_text<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "GridSize: X = {}, Y = {}",
        report.grid.x, report.grid.y
    )?;

    for mower in &report.mowers {
        writeln!(out, "Mower starting At Position: {}", mower.replay.start)?;
        for event in &mower.replay.boundary_events {
            writeln!(out, "{}", event.notice())?;
        }
        writeln!(out, "FinalPosition: {}", mower.replay.position)?;
    }

    Ok(())
}

/// Write the report as one pretty-printed JSON document
pub fn render_json<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
