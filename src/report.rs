/// Banners, completion alert and the end-of-session summary
use std::io::Write;
use std::thread;

use anyhow::Result;

use crate::config::{ALERT_COUNT, Config};

const RULE: &str = "================================";

pub fn display_timer_header<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "    SIMPLE COUNTDOWN TIMER")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    Ok(())
}

/// Prints the completion message followed by the repeated alert tokens.
pub fn display_completion_message<W: Write>(out: &mut W, config: &Config) -> Result<()> {
    writeln!(out, "*** TIMER COMPLETED! ***")?;
    writeln!(out, "Time's up!")?;
    writeln!(out)?;

    for _ in 0..ALERT_COUNT {
        write!(out, "{}", config.alert_token)?;
        if config.bell {
            write!(out, "\x07")?; // ASCII bell character
        }
        out.flush()?;
        thread::sleep(config.alert_pause);
    }
    writeln!(out)?;
    Ok(())
}

/// `2 minute(s) 5 second(s)`; zero parts are left out.
pub fn format_total_duration(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;

    let mut parts = Vec::with_capacity(2);
    if minutes > 0 {
        parts.push(format!("{} minute(s)", minutes));
    }
    if remaining_seconds > 0 {
        parts.push(format!("{} second(s)", remaining_seconds));
    }
    parts.join(" ")
}

pub fn display_timer_stats<W: Write>(out: &mut W, duration_seconds: u64) -> Result<()> {
    writeln!(out, "TIMER STATISTICS")?;
    writeln!(out, "================")?;
    writeln!(out, "Total Duration: {}", format_total_duration(duration_seconds))?;
    writeln!(out, "Timer Type: Countdown")?;
    writeln!(out, "Status: Completed Successfully")?;
    writeln!(out)?;
    Ok(())
}

pub fn display_closing_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "     TIMER SESSION COMPLETE")?;
    writeln!(out, "{}", RULE)?;
    out.flush()?;
    Ok(())
}
