/// Timer module for the per-second countdown display
use std::io::Write;
use std::thread;

use anyhow::Result;
use tracing::debug;

use crate::config::{BAR_WIDTH, Config};

/// Countdown progress; `remaining_seconds` only ever moves towards zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownState {
    total_seconds: u64,
    remaining_seconds: u64,
}

impl CountdownState {
    pub fn new(total_seconds: u64) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_done(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Moves one second closer to zero. Returns false once already done.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.remaining_seconds -= 1;
        true
    }
}

/// Filled segment count for the progress bar.
///
/// This is a sawtooth: it wraps every `BAR_WIDTH` seconds instead of
/// draining in proportion to the total duration.
pub fn filled_segments(remaining_seconds: u64) -> usize {
    if remaining_seconds > 0 {
        (remaining_seconds % BAR_WIDTH as u64) as usize
    } else {
        0
    }
}

pub fn progress_bar(remaining_seconds: u64, config: &Config) -> String {
    let filled = filled_segments(remaining_seconds);
    let empty = BAR_WIDTH - filled;

    let mut bar = String::with_capacity(BAR_WIDTH + 2);
    bar.push('[');
    bar.extend(std::iter::repeat_n(config.filled_glyph, filled));
    bar.extend(std::iter::repeat_n(config.empty_glyph, empty));
    bar.push(']');
    bar
}

const CLEAR_TO_EOL: &str = "\x1b[K";

/// Status line for one tick, starting with a carriage return so it
/// overwrites the previous one.
pub fn format_status(remaining_seconds: u64, config: &Config) -> String {
    let minutes = remaining_seconds / 60;
    let seconds = remaining_seconds % 60;

    let mut line = String::from("\rTime Remaining: ");
    if minutes > 0 {
        line.push_str(&format!("{}m ", minutes));
    }
    line.push_str(&format!("{}s ", seconds));
    line.push_str(&progress_bar(remaining_seconds, config));
    line
}

/// Writes the status line and erases whatever a longer previous line left
/// behind (`1m 0s` to `59s` drops the minutes part).
pub fn display_countdown<W: Write>(out: &mut W, remaining_seconds: u64, config: &Config) -> Result<()> {
    write!(out, "{}{}", format_status(remaining_seconds, config), CLEAR_TO_EOL)?;
    out.flush()?;
    Ok(())
}

/// Renders every second from `total_seconds` down to zero, pausing one
/// tick between lines. There is no pause after the zero line.
pub fn run_countdown_timer<W: Write>(out: &mut W, total_seconds: u64, config: &Config) -> Result<()> {
    writeln!(out, "Starting countdown from {} seconds...", total_seconds)?;
    writeln!(out, "Press Ctrl+C to stop the timer")?;
    writeln!(out)?;

    let mut state = CountdownState::new(total_seconds);
    debug!("Countdown started for {}s", state.total_seconds());
    loop {
        display_countdown(out, state.remaining_seconds(), config)?;
        if state.is_done() {
            break;
        }
        thread::sleep(config.tick);
        state.tick();
    }
    debug!("Countdown reached zero");

    write!(out, "\n\n")?;
    out.flush()?;
    Ok(())
}
