//! Replay Engine
//!
//! Runs a mower's commands against the grid. Every intermediate position
//! stays inside `[0, grid.x] × [0, grid.y]`.

use crate::parser::types::{Command, GridSize, MowerInstructions, Position};
use crate::simulation::observer::{BoundaryEvent, LogObserver, ReplayObserver};
use serde::Serialize;

/// Outcome of a replay together with the boundary events it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replay {
    pub start: Position,
    #[serde(rename = "final")]
    pub position: Position,
    pub boundary_events: Vec<BoundaryEvent>,
}

/// Result of applying one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The command was applied
    Moved(Position),
    /// A forward move was suppressed at the edge of the grid
    Blocked(Position),
}

impl Step {
    pub fn position(self) -> Position {
        match self {
            Step::Moved(p) | Step::Blocked(p) => p,
        }
    }
}

/// Apply a single command to `position`
pub fn step(position: Position, command: Command, grid: GridSize) -> Step {
    match command {
        Command::TurnLeft => Step::Moved(position.facing(position.orientation.left())),
        Command::TurnRight => Step::Moved(position.facing(position.orientation.right())),
        Command::MoveForward => match position.ahead(grid) {
            Some(next) => Step::Moved(next),
            None => Step::Blocked(position),
        },
    }
}

/// Replay every command and report events to `observer`
pub fn replay_with<O: ReplayObserver + ?Sized>(
    instructions: &MowerInstructions,
    grid: GridSize,
    observer: &mut O,
) -> Position {
    instructions
        .commands
        .iter()
        .enumerate()
        .fold(instructions.start, |position, (index, &command)| {
            let next = match step(position, command, grid) {
                Step::Moved(next) => next,
                Step::Blocked(stay) => {
                    observer.on_boundary(&BoundaryEvent {
                        command_index: index,
                        position: stay,
                    });
                    stay
                }
            };
            observer.on_step(index, command, &next);
            next
        })
}

/// Final position of a mower. Boundary events go to the log.
pub fn replay(instructions: &MowerInstructions, grid: GridSize) -> Position {
    replay_with(instructions, grid, &mut LogObserver)
}

/// Replay and keep the boundary events
pub fn trace(instructions: &MowerInstructions, grid: GridSize) -> Replay {
    let mut boundary_events = Vec::new();
    let position = replay_with(instructions, grid, &mut boundary_events);

    Replay {
        start: instructions.start,
        position,
        boundary_events,
    }
}
