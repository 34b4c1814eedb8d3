//! Application configuration.
//!
//! Configuration is loaded from a TOML file at:
//! 1. `$TRACEMAIL_CONFIG` (environment variable)
//! 2. `~/.config/tracemail/config.toml` (Linux)
//!    `~/Library/Application Support/tracemail/config.toml` (macOS)
//!    `%APPDATA%\tracemail\config.toml` (Windows)
//! 3. Built-in defaults

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior settings.
    pub general: GeneralConfig,
    /// Report layout settings.
    pub report: ReportConfig,
}

/// General behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
    /// Override the directory used for the log file.
    pub cache_dir: Option<PathBuf>,
}

/// Report layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Border style of the delay table.
    pub table_style: TableStyle,
    /// Width of the field the total delay is centered in.
    pub total_width: usize,
    /// Character repeated to separate the reports of consecutive files.
    pub divider_char: char,
    /// Length of the divider line.
    pub divider_width: usize,
    /// Print `Received:` lines whose timestamp could not be parsed.
    pub echo_unparsed_dates: bool,
}

/// Border characters used for the delay table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Unicode box-drawing characters.
    #[default]
    Utf8,
    /// Plain `+`, `-` and `|`.
    Ascii,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            cache_dir: None,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            table_style: TableStyle::Utf8,
            total_width: 30,
            divider_char: '_',
            divider_width: 80,
            echo_unparsed_dates: false,
        }
    }
}

impl ReportConfig {
    /// The line printed after each analyzed file.
    pub fn divider(&self) -> String {
        self.divider_char.to_string().repeat(self.divider_width)
    }
}

/// Load configuration, searching standard locations.
///
/// Returns the default configuration if no file is found or on parse error.
pub fn load_config() -> Config {
    if let Some(path) = config_file_path() {
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<Config>(&contents) {
                    Ok(cfg) => {
                        tracing::info!(path = %path.display(), "Loaded config");
                        return cfg;
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "Failed to parse config, using defaults"
                        );
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to read config file, using defaults"
                    );
                }
            }
        }
    }
    Config::default()
}

/// Determine the config file path (checking env var first, then standard dirs).
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var("TRACEMAIL_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|d| d.join("tracemail").join("config.toml"))
}

/// Return the directory holding the log file.
pub fn cache_dir(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.general.cache_dir {
        return dir.clone();
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tracemail")
}
