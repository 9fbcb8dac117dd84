//! Mower File Parser
//!
//! Turns the lines of a mower file into a validated [`Program`].
//! Parsing is fail-fast: the first bad line rejects the whole file.

pub mod error;
pub mod line;
pub mod types;

pub use error::ParseError;
pub use line::{parse_commands, parse_grid_size, parse_position};
pub use types::{Command, GridSize, MowerInstructions, Orientation, Position};

use serde::Serialize;

/// A fully validated mower file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub grid: GridSize,
    pub mowers: Vec<MowerInstructions>,
}

/// Parse the full text of a mower file. A leading byte-order mark is skipped.
pub fn parse_str(content: &str) -> Result<Program, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let lines: Vec<&str> = content.lines().collect();
    parse_lines(&lines)
}

/// Parse a mower file given as its lines, in order
///
/// Line 1 holds the grid size. Every following pair of lines describes one
/// mower: its starting position, then its instruction string.
pub fn parse_lines(lines: &[&str]) -> Result<Program, ParseError> {
    let (grid_line, rest) = lines.split_first().ok_or(ParseError::MissingGridSize)?;
    let grid = parse_grid_size(grid_line)?;
    log::debug!("Parsed grid size {}x{}", grid.x, grid.y);

    let mut mowers = Vec::with_capacity(rest.len() / 2);

    for (pair_idx, pair) in rest.chunks(2).enumerate() {
        // Position line of this pair, 1-based, after the grid line
        let line_num = 2 + pair_idx * 2;

        let [position_line, instruction_line] = pair else {
            return Err(ParseError::MissingPair);
        };

        let start = parse_position(position_line, line_num, grid)?;
        let commands = parse_commands(instruction_line, line_num + 1)?;

        log::debug!(
            "Mower on line {} starts at {} with {} commands",
            line_num,
            start,
            commands.len()
        );

        mowers.push(MowerInstructions {
            start,
            commands,
            line: line_num,
        });
    }

    Ok(Program { grid, mowers })
}
