//! Line Parsers
//!
//! One function per kind of input line. Each works on a single line and
//! reports errors against the 1-based `line_num` it is given.

use crate::parser::error::ParseError;
use crate::parser::types::{Command, GridSize, Orientation, Position};

/// Parse the grid size line, `"X Y"`
pub fn parse_grid_size(line: &str) -> Result<GridSize, ParseError> {
    match split_tokens::<2>(line) {
        Some([x, y]) => {
            let x = parse_coordinate(x).ok_or(ParseError::GridSizeFormat)?;
            let y = parse_coordinate(y).ok_or(ParseError::GridSizeFormat)?;
            Ok(GridSize::new(x, y))
        }
        None => Err(ParseError::GridSizeFormat),
    }
}

/// Parse a position line, `"X Y D"`, and check it lies on the grid
pub fn parse_position(
    line: &str,
    line_num: usize,
    grid: GridSize,
) -> Result<Position, ParseError> {
    let [x, y, direction] =
        split_tokens::<3>(line.trim()).ok_or(ParseError::PositionFormat { line: line_num })?;

    let x = parse_coordinate(x).ok_or(ParseError::PositionFormat { line: line_num })?;
    let y = parse_coordinate(y).ok_or(ParseError::PositionFormat { line: line_num })?;

    let orientation: Orientation = direction.parse().map_err(|_| ParseError::InvalidDirection {
        line: line_num,
        token: direction.to_string(),
    })?;

    if !grid.contains(x, y) {
        return Err(ParseError::StartOutOfBounds {
            line: line_num,
            x,
            y,
            grid,
        });
    }

    Ok(Position::new(x, y, orientation))
}

/// Parse an instruction line such as `"LFRFF"`
pub fn parse_commands(line: &str, line_num: usize) -> Result<Vec<Command>, ParseError> {
    let line = line.trim();

    if line.chars().any(char::is_whitespace) {
        return Err(ParseError::InstructionWhitespace { line: line_num });
    }

    line.chars()
        .enumerate()
        .map(|(idx, c)| {
            Command::from_char(c).ok_or(ParseError::InvalidInstruction {
                line: line_num,
                column: idx + 1,
                found: c,
            })
        })
        .collect()
}

/// Split on whitespace, succeeding only for exactly `N` tokens
fn split_tokens<const N: usize>(line: &str) -> Option<[&str; N]> {
    let mut tokens = line.split_whitespace();
    let mut out = [""; N];

    for slot in out.iter_mut() {
        *slot = tokens.next()?;
    }

    match tokens.next() {
        Some(_) => None,
        None => Some(out),
    }
}

/// Non-negative integer coordinate. A leading `-` is rejected by `u32` parsing.
fn parse_coordinate(token: &str) -> Option<u32> {
    token.parse().ok()
}
