//! Command-line driver: read a mower file, simulate it, print the report.

use crate::config::{Config, OutputFormat};
use crate::error::{Error, ErrorKind};
use crate::parser::{self, Program};
use crate::report::{render_json, render_text, MowerReport, Report};
use crate::simulation;
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

pub const USAGE: &str = "Please provide a file path as a command-line argument.";

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No input file was given; usage was printed
    Usage,
    Completed,
    /// The input was rejected before any mower was simulated
    Failed(ErrorKind),
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Usage | Outcome::Completed => 0,
            Outcome::Failed(_) => 1,
        }
    }
}

/// Read and parse a mower file
///
/// Invalid UTF-8 is replaced with U+FFFD so it surfaces as a bad character
/// at its line and column rather than as a read failure.
pub fn load(path: &Path) -> Result<Program, Error> {
    let bytes = fs::read(path).map_err(|e| Error::from_io(path, e))?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(parser::parse_str(&content)?)
}

/// Simulate every mower of `program`, in input order
pub fn simulate(program: &Program) -> Report {
    let mowers = program
        .mowers
        .iter()
        .map(|mower| {
            let replay = simulation::trace(mower, program.grid);
            for event in &replay.boundary_events {
                log::info!("Mower on line {}: {}", mower.line, event.notice());
            }
            MowerReport {
                line: mower.line,
                replay,
            }
        })
        .collect();

    Report {
        grid: program.grid,
        mowers,
    }
}

/// Run the simulator as configured, writing everything user-facing to `out`
///
/// Input problems are printed to `out` and returned as [`Outcome::Failed`];
/// only failures to write `out` itself are errors.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Outcome> {
    let Some(path) = config.input.as_deref() else {
        writeln!(out, "{USAGE}")?;
        return Ok(Outcome::Usage);
    };

    let program = match load(path) {
        Ok(program) => program,
        Err(e) => {
            log::debug!("Rejected {}: {:?}", path.display(), e);
            writeln!(out, "{e}")?;
            return Ok(Outcome::Failed(e.kind()));
        }
    };

    let report = simulate(&program);
    match config.format {
        OutputFormat::Text => render_text(&report, out)?,
        OutputFormat::Json => render_json(&report, out)?,
    }

    Ok(Outcome::Completed)
}
