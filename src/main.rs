mod config;
mod input;
mod report;
mod session;
mod timer;

use std::io;

use tracing_subscriber::EnvFilter;

use crate::config::load_config;
use crate::session::run_session;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the countdown output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("countdown=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&config, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
