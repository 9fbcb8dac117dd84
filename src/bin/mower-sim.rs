use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

use mower_sim::app;
use mower_sim::config::Config;

fn main() -> Result<ExitCode> {
    // Parse configuration from command line
    let config = Config::from_args_and_env()?;

    env_logger::Builder::new()
        .filter_level(config.level_filter())
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = app::run(&config, &mut out)?;
    out.flush()?;

    log::debug!("Finished with {:?}", outcome);
    Ok(ExitCode::from(outcome.exit_code()))
}
