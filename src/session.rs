/// One interactive timer session, start to finish
use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::input::get_timer_duration;
use crate::report::{
    display_closing_banner, display_completion_message, display_timer_header, display_timer_stats,
};
use crate::timer::run_countdown_timer;

/// Runs header, input, countdown, alert and summary in order.
/// Returns the duration that was actually counted down.
pub fn run_session<R: BufRead, W: Write>(config: &Config, input: &mut R, out: &mut W) -> Result<u64> {
    display_timer_header(out)?;

    let timer_seconds = get_timer_duration(input, out)?;
    run_countdown_timer(out, timer_seconds, config)?;

    display_completion_message(out, config)?;
    display_timer_stats(out, timer_seconds)?;
    display_closing_banner(out)?;

    info!("Timer session of {}s complete", timer_seconds);
    Ok(timer_seconds)
}
