/// Configuration module for countdown display settings
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

pub const MIN_SECONDS: u64 = 1;
pub const MAX_SECONDS: u64 = 3600; // 1 hour
pub const BAR_WIDTH: usize = 20;
pub const ALERT_COUNT: usize = 3;
pub const TICK: Duration = Duration::from_secs(1);
pub const ALERT_PAUSE: Duration = Duration::from_millis(250);

/// Presentation settings. Only these can come from the config file; the
/// duration range, bar width and alert count are fixed.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub filled_glyph: char,
    pub empty_glyph: char,
    pub alert_token: String,
    /// Also ring the terminal bell with every alert token.
    pub bell: bool,
    #[serde(skip)]
    pub tick: Duration,
    #[serde(skip)]
    pub alert_pause: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filled_glyph: '#',
            empty_glyph: '-',
            alert_token: "BEEP! ".to_string(),
            bell: false,
            tick: TICK,
            alert_pause: ALERT_PAUSE,
        }
    }
}

impl Config {
    /// Rejects glyphs and tokens that would break the one-line redraw.
    pub fn validate(&self) -> Result<(), String> {
        for (name, glyph) in [("filled_glyph", self.filled_glyph), ("empty_glyph", self.empty_glyph)] {
            if glyph.is_control() {
                return Err(format!("{} must be a printable character", name));
            }
        }
        if self.alert_token.is_empty() {
            return Err("alert_token must not be empty".to_string());
        }
        if self.alert_token.chars().any(|c| c.is_control()) {
            return Err("alert_token must not contain control characters".to_string());
        }
        Ok(())
    }
}

/// Loads settings from the user's config file, falling back to defaults.
///
/// The file is optional and never created.
pub fn load_config() -> Config {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> Config {
    if !config_path.exists() {
        debug!("No config file at {}, using defaults", config_path.display());
        return Config::default();
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read config file {}: {}, using defaults", config_path.display(), e);
            return Config::default();
        }
    };

    let config: Config = match serde_json::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            warn!("Invalid config format in {}: {}, using defaults", config_path.display(), e);
            return Config::default();
        }
    };

    if let Err(e) = config.validate() {
        warn!("Rejected config {}: {}, using defaults", config_path.display(), e);
        return Config::default();
    }

    debug!("Loaded config from {}", config_path.display());
    config
}

fn get_config_path() -> PathBuf {
    if let Some(home) = env::var_os("HOME") {
        PathBuf::from(home).join(".config").join("countdown").join("config.json")
    } else {
        PathBuf::from("countdown-config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("countdown-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = env::temp_dir().join("countdown-definitely-missing").join("config.json");
        assert_eq!(load_config_from(&path), Config::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let path = write_temp("partial.json", r#"{ "filled_glyph": "*", "bell": true }"#);
        let config = load_config_from(&path);
        assert_eq!(config.filled_glyph, '*');
        assert!(config.bell);
        assert_eq!(config.empty_glyph, '-');
        assert_eq!(config.alert_token, "BEEP! ");
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let path = write_temp("broken.json", "{ not json");
        assert_eq!(load_config_from(&path), Config::default());
    }

    #[test]
    fn fixed_settings_cannot_be_overridden() {
        let path = write_temp(
            "fixed.json",
            r#"{ "bar_width": 4, "alert_count": 0, "max_seconds": 99999, "tick": 0, "empty_glyph": "." }"#,
        );
        let config = load_config_from(&path);
        assert_eq!(config.empty_glyph, '.');
        assert_eq!(config.tick, TICK);
        assert_eq!(config.alert_pause, ALERT_PAUSE);
    }

    #[test]
    fn control_characters_are_rejected() {
        let path = write_temp("control.json", r#"{ "filled_glyph": "\r" }"#);
        assert_eq!(load_config_from(&path), Config::default());

        let empty_token = Config { alert_token: String::new(), ..Config::default() };
        assert!(empty_token.validate().is_err());
        let newline_token = Config { alert_token: "BEEP!\n".to_string(), ..Config::default() };
        assert!(newline_token.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_pacing() {
        let config = Config::default();
        assert_eq!(config.tick, Duration::from_secs(1));
        assert_eq!(config.alert_pause, Duration::from_millis(250));
    }
}
