//! Mower Simulator
//!
//! Simulates lawn mowers moving on a bounded grid, driven by a text instruction file.
//!
//! This library provides:
//! - Parsing and validation of mower files
//! - Deterministic replay of mower commands
//! - Text and JSON reports
//! - Configuration management

pub mod app;
pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod simulation;

// Re-exports for clean public API
pub use config::Config;
pub use error::{Error, ErrorKind};
pub use parser::{parse_lines, parse_str, ParseError, Program};
pub use simulation::{replay, trace, BoundaryEvent, Replay};
