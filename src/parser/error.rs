use crate::error::ErrorKind;
use crate::parser::types::GridSize;
use thiserror::Error;

/// Reason a mower file was rejected. Line numbers and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("The file is empty. Expected a grid size line 'X Y'.")]
    MissingGridSize,
    #[error(
        "Invalid format for the grid size. The correct format is: 'X Y' where X and Y are integers."
    )]
    GridSizeFormat,
    #[error("The file has an odd number of lines, missing a pair.")]
    MissingPair,
    #[error(
        "Invalid format for the position line at line {line}. The correct format is: 'X Y InitialDirection' where X and Y are integers and InitialDirection is one of the following values: N, E, W, S."
    )]
    PositionFormat { line: usize },
    #[error("Invalid direction '{token}' on line {line}. Accepted values are: N, E, W, S.")]
    InvalidDirection { line: usize, token: String },
    #[error(
        "Starting position X = {x}, Y = {y} on line {line} is outside the grid (X = {}, Y = {}).",
        .grid.x,
        .grid.y
    )]
    StartOutOfBounds {
        line: usize,
        x: u32,
        y: u32,
        grid: GridSize,
    },
    #[error("Instructions line {line} should not contain spaces.")]
    InstructionWhitespace { line: usize },
    #[error(
        "Invalid character '{found}' at position {column} on line {line}. Accepted values are: L, R, F."
    )]
    InvalidInstruction {
        line: usize,
        column: usize,
        found: char,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingGridSize
            | Self::GridSizeFormat
            | Self::PositionFormat { .. }
            | Self::InstructionWhitespace { .. } => ErrorKind::Format,
            Self::InvalidDirection { .. }
            | Self::StartOutOfBounds { .. }
            | Self::InvalidInstruction { .. } => ErrorKind::Validation,
            Self::MissingPair => ErrorKind::Structural,
        }
    }

    /// Line the error points at, if it concerns a single line
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingGridSize | Self::GridSizeFormat => Some(1),
            Self::MissingPair => None,
            Self::PositionFormat { line }
            | Self::InvalidDirection { line, .. }
            | Self::StartOutOfBounds { line, .. }
            | Self::InstructionWhitespace { line }
            | Self::InvalidInstruction { line, .. } => Some(*line),
        }
    }
}
