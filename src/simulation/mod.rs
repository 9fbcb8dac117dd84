//! Mower Simulation
//!
//! Deterministic replay of parsed instructions, kept apart from parsing and I/O.

pub mod engine;
pub mod observer;

pub use engine::{replay, replay_with, step, trace, Replay, Step};
pub use observer::{BoundaryEvent, LogObserver, NoOpObserver, ReplayObserver};
