// Configuration loading and parsing (config/hammer.toml).

use std::path::{Path, PathBuf};
use std::time::Duration;

use hammer_core::format::{format_currency, format_currency_locale, Locale};
use serde::Deserialize;
use thiserror::Error;

/// Name of the config file inside `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "hammer.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// hammer.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub display: DisplayConfig,
    pub feed: FeedConfig,
    pub notifications: NotificationConfig,
    pub countdown: CountdownConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Locale code for currency formatting; takes precedence over the symbol.
    #[serde(default)]
    pub locale: Option<String>,
    pub currency_symbol: String,
    /// Team id whose dashboard is selected at startup.
    #[serde(default)]
    pub my_team: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub snapshot_path: String,
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    pub ttl_secs: u64,
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountdownConfig {
    pub tick_ms: u64,
}

impl FeedConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl NotificationConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl CountdownConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

// ---------------------------------------------------------------------------
// Money formatting choice
// ---------------------------------------------------------------------------

/// How amounts are rendered on the board.
#[derive(Debug, Clone, PartialEq)]
pub enum MoneyFormat {
    Symbol(String),
    Locale(Locale),
}

impl MoneyFormat {
    pub fn format(&self, amount: Option<f64>) -> String {
        match self {
            MoneyFormat::Symbol(symbol) => format_currency(amount, symbol),
            MoneyFormat::Locale(locale) => format_currency_locale(amount, *locale),
        }
    }

    /// Shorthand for a present amount.
    pub fn amount(&self, amount: f64) -> String {
        self.format(Some(amount))
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        MoneyFormat::Locale(Locale::EnIn)
    }
}

impl DisplayConfig {
    /// Resolve the configured formatting. Assumes the config was validated.
    pub fn money_format(&self) -> MoneyFormat {
        match self.locale.as_deref().and_then(Locale::from_code) {
            Some(locale) => MoneyFormat::Locale(locale),
            None => MoneyFormat::Symbol(self.currency_symbol.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/hammer.toml` relative to `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                // Keep the user's edited copy
            }
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let display = &config.display;
    if let Some(code) = display.locale.as_deref() {
        if Locale::from_code(code).is_none() {
            return Err(invalid(
                "display.locale",
                format!("unsupported locale `{code}` (expected en-IN, en-US or en-GB)"),
            ));
        }
    }
    if display.currency_symbol.trim().is_empty() {
        return Err(invalid("display.currency_symbol", "must not be empty"));
    }
    if display.my_team.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(invalid("display.my_team", "must not be empty when set"));
    }

    if config.feed.snapshot_path.trim().is_empty() {
        return Err(invalid("feed.snapshot_path", "must not be empty"));
    }

    let positive: &[(&str, u64)] = &[
        ("feed.poll_interval_ms", config.feed.poll_interval_ms),
        ("notifications.ttl_secs", config.notifications.ttl_secs),
        ("notifications.capacity", config.notifications.capacity as u64),
        ("countdown.tick_ms", config.countdown.tick_ms),
    ];
    for (name, val) in positive {
        if *val == 0 {
            return Err(invalid(name, "must be > 0"));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
