//! Configuration for the mower simulator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Output format and log level selection

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the report is written to standard output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per event, human readable
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Command-line arguments for the mower simulator
#[derive(Debug, Parser)]
#[command(name = "mower-sim")]
#[command(about = "Simulate lawn mowers moving on a grid")]
#[command(version)]
pub struct Args {
    /// Mower instruction file
    #[arg(help = "Path to the mower instruction file")]
    pub input: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error, off)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file, if one was given
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        if !is_known_level(&args.log_level) {
            anyhow::bail!("Unknown log level '{}'", args.log_level);
        }

        Ok(Config {
            input: args.input,
            format: args.format,
            log_level: args.log_level,
        })
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

fn is_known_level(level: &str) -> bool {
    level.parse::<log::LevelFilter>().is_ok()
}
