//! Replay observers
//!
//! A blocked forward move is not an error, but the operator should hear
//! about it. The simulator reports those events through [`ReplayObserver`].

use crate::parser::types::{Command, Position};
use serde::Serialize;

/// A forward move that was suppressed because it would leave the lawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundaryEvent {
    /// 0-based index of the `F` command in the instruction string
    pub command_index: usize,
    /// Where the mower stays
    pub position: Position,
}

impl BoundaryEvent {
    /// Operator notice for this event
    pub fn notice(&self) -> String {
        format!(
            "Attempt to move outside the grid boundaries. The instruction was ignored, mower remains at X = {}, Y = {} facing {}.",
            self.position.x, self.position.y, self.position.orientation
        )
    }
}

/// Receives events while a mower replays its commands
pub trait ReplayObserver {
    #[allow(unused_variables)]
    fn on_step(&mut self, index: usize, command: Command, position: &Position) {}

    #[allow(unused_variables)]
    fn on_boundary(&mut self, event: &BoundaryEvent) {}
}

/// Ignores every event
pub struct NoOpObserver;
impl ReplayObserver for NoOpObserver {}

/// Forwards events to the `log` facade
#[derive(Debug, Default)]
pub struct LogObserver;

impl ReplayObserver for LogObserver {
    fn on_step(&mut self, index: usize, command: Command, position: &Position) {
        log::trace!("#{} {} -> {}", index, command.as_char(), position);
    }

    fn on_boundary(&mut self, event: &BoundaryEvent) {
        log::warn!("{}", event.notice());
    }
}

/// Collects boundary events in the order they happen
impl ReplayObserver for Vec<BoundaryEvent> {
    fn on_boundary(&mut self, event: &BoundaryEvent) {
        self.push(*event);
    }
}
