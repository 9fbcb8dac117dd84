//! Mower Data Model
//!
//! Plain value types shared by the parser and the simulator.
//! No parsing or movement logic beyond the orientation tables.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Upper bounds of the lawn. The grid is the inclusive range `[0, x] × [0, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridSize {
    pub x: u32,
    pub y: u32,
}

impl GridSize {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Check whether a cell lies on the lawn
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x <= self.x && y <= self.y
    }
}

/// Compass heading of a mower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    /// All orientations in clockwise order, starting from North
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Heading after a quarter turn counter-clockwise
    pub fn left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Heading after a quarter turn clockwise
    pub fn right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Unit displacement `(dx, dy)` of one step forward
    pub fn delta(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::East => (1, 0),
            Orientation::South => (0, -1),
            Orientation::West => (-1, 0),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error returned when a direction token is not one of `N`, `E`, `S`, `W`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrientation(pub String);

impl FromStr for Orientation {
    type Err = UnknownOrientation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Orientation::North),
            "E" => Ok(Orientation::East),
            "S" => Ok(Orientation::South),
            "W" => Ok(Orientation::West),
            other => Err(UnknownOrientation(other.to_string())),
        }
    }
}

/// A cell on the lawn plus the heading of the mower standing on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub orientation: Orientation,
}

impl Position {
    pub fn new(x: u32, y: u32, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    /// Same cell, new heading
    pub fn facing(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// The cell one step ahead, or `None` if it would leave the lawn
    pub fn ahead(self, grid: GridSize) -> Option<Self> {
        let (dx, dy) = self.orientation.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;

        grid.contains(x, y).then_some(Self { x, y, ..self })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.orientation)
    }
}

/// A single mower command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Command {
    /// `L`
    TurnLeft,
    /// `R`
    TurnRight,
    /// `F`
    MoveForward,
}

impl Command {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Command::TurnLeft),
            'R' => Some(Command::TurnRight),
            'F' => Some(Command::MoveForward),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
            Command::MoveForward => 'F',
        }
    }
}

/// One mower as described by a position line and its instruction line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MowerInstructions {
    /// Starting cell and heading
    pub start: Position,
    /// Commands in execution order
    pub commands: Vec<Command>,
    /// 1-based line number of the position line
    pub line: usize,
}

impl MowerInstructions {
    /// The instruction line as it appeared in the input
    pub fn command_string(&self) -> String {
        self.commands.iter().map(|c| c.as_char()).collect()
    }
}
