//! Application configuration (TOML)
//!
//! Non-sensitive settings only: issuer name, users-file location, OTP
//! parameters. Secrets live in the user store, never here.

use crate::error::{ConfigError, OtpgateError};
use crate::otp::totp::{TotpParams, DEFAULT_DRIFT_WINDOW};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";
/// Default users file name, placed next to the config
const USERS_FILE_NAME: &str = "users.json";

fn default_issuer() -> String {
    "otpgate".to_string()
}

fn default_drift_window() -> u32 {
    DEFAULT_DRIFT_WINDOW
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Issuer name shown by authenticator apps
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Path of the JSON users file; defaults to the config directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_file: Option<PathBuf>,

    /// Steps of clock skew tolerated at login
    #[serde(default = "default_drift_window")]
    pub drift_window: u32,

    /// Time-step parameters handed to the OTP engine
    #[serde(default, rename = "otp")]
    pub otp: TotpParams,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            issuer: default_issuer(),
            users_file: None,
            otp: TotpParams::default(),
            drift_window: DEFAULT_DRIFT_WINDOW,
        }
    }
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.issuer.is_empty() {
            return Err("Issuer cannot be empty".to_string());
        }
        self.otp.validate().map_err(|e| e.to_string())
    }

    /// Resolve the users-file path, defaulting next to the config file
    pub fn users_path(&self) -> Result<PathBuf, OtpgateError> {
        match &self.users_file {
            Some(path) => Ok(path.clone()),
            None => Ok(get_config_dir()?.join(USERS_FILE_NAME)),
        }
    }
}

/// Get the configuration directory
///
/// `OTPGATE_CONFIG_DIR` overrides the default `~/.config/otpgate`, which
/// keeps tests and scripted runs away from the real user config.
pub fn get_config_dir() -> Result<PathBuf, OtpgateError> {
    if let Ok(config_dir) = std::env::var("OTPGATE_CONFIG_DIR") {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        OtpgateError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("otpgate"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, OtpgateError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Whether a configuration file already exists
pub fn config_exists() -> Result<bool, OtpgateError> {
    Ok(get_config_path()?.exists())
}

/// Load the configuration, falling back to defaults when none exists
pub fn load_config() -> Result<AppConfig, OtpgateError> {
    let path = get_config_path()?;

    if !path.exists() {
        debug!("no config file at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    load_from(&path)
}

/// Load configuration from a specific TOML file
pub fn load_from(path: &Path) -> Result<AppConfig, OtpgateError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        OtpgateError::Config(ConfigError::IoError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    let config: AppConfig = toml::from_str(&contents).map_err(|e| {
        OtpgateError::Config(ConfigError::ValidationError {
            message: format!("Failed to parse config file: {}", e),
        })
    })?;

    config.validate().map_err(|message| {
        OtpgateError::Config(ConfigError::ValidationError { message })
    })?;

    Ok(config)
}

/// Save the configuration to the default path
pub fn save_config(config: &AppConfig) -> Result<(), OtpgateError> {
    let path = get_config_path()?;
    let contents = toml::to_string_pretty(config)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&path, contents)?;
    Ok(())
}
