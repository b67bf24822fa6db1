//! Terminal client entry point.
mod config;
mod input;
mod logging;
mod presentation;

use anyhow::Result;
use config::CliConfig;
use grid_core::Session;
use presentation::{EventLoop, terminal};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    logging::init(config.log_dir())?;

    let session = Session::new(config.session_config()?)?;

    let mut tui = terminal::init()?;
    let _guard = terminal::TerminalGuard;
    let session = EventLoop::new(session).run(&mut tui)?;

    tracing::info!(
        algorithm = session.algorithm(),
        path_set = session.path_set(),
        "session closed"
    );
    Ok(())
}
