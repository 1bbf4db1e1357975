/// Duration prompt and range clamping
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::{MAX_SECONDS, MIN_SECONDS};

/// Outcome of clamping a requested duration into the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamped {
    Unchanged(u64),
    RaisedToMin(u64),
    LoweredToMax(u64),
}

impl Clamped {
    pub fn seconds(self) -> u64 {
        match self {
            Clamped::Unchanged(s) | Clamped::RaisedToMin(s) | Clamped::LoweredToMax(s) => s,
        }
    }
}

pub fn clamp_duration(requested: i64) -> Clamped {
    match u64::try_from(requested) {
        Ok(seconds) if seconds > MAX_SECONDS => Clamped::LoweredToMax(MAX_SECONDS),
        Ok(seconds) if seconds >= MIN_SECONDS => Clamped::Unchanged(seconds),
        _ => Clamped::RaisedToMin(MIN_SECONDS),
    }
}

/// Prompts until a whole number is entered, then clamps it.
///
/// Non-numeric lines are rejected and the prompt repeats. If input ends
/// before a number arrives the minimum is used.
pub fn get_timer_duration<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<u64> {
    writeln!(out, "Enter timer duration:")?;

    let requested = loop {
        write!(out, "Seconds ({}-{}): ", MIN_SECONDS, MAX_SECONDS)?;
        out.flush()?;

        // Raw bytes so that invalid UTF-8 is just another bad line
        let mut raw = Vec::new();
        let read = input.read_until(b'\n', &mut raw).context("Failed to read duration")?;
        if read == 0 {
            warn!("Input ended before a duration was entered");
            writeln!(out)?;
            break i64::MIN;
        }

        let line = String::from_utf8_lossy(&raw);
        match line.trim().parse::<i64>() {
            Ok(seconds) => break seconds,
            Err(e) => {
                debug!("Rejected duration input {:?}: {}", line.trim(), e);
                writeln!(out, "Invalid input, please enter a whole number of seconds.")?;
            }
        }
    };

    let clamped = clamp_duration(requested);
    match clamped {
        Clamped::RaisedToMin(min) => {
            info!("Duration raised to minimum of {}s", min);
            writeln!(
                out,
                "Minimum {}, setting to {}.",
                describe_limit(min),
                plural(min, "second")
            )?;
        }
        Clamped::LoweredToMax(max) => {
            info!("Duration lowered to maximum of {}s", max);
            writeln!(
                out,
                "Maximum {}, setting to {}.",
                describe_limit(max),
                plural(max, "second")
            )?;
        }
        Clamped::Unchanged(_) => {}
    }

    writeln!(out)?;
    Ok(clamped.seconds())
}

fn plural(n: u64, unit: &str) -> String {
    format!("{} {}{}", n, unit, if n == 1 { "" } else { "s" })
}

// Whole hours read better than a raw second count in the notices.
fn describe_limit(seconds: u64) -> String {
    if seconds >= 3600 && seconds % 3600 == 0 {
        plural(seconds / 3600, "hour")
    } else {
        plural(seconds, "second")
    }
}
