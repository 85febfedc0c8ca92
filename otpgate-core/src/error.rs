//! Error types for the otpgate CLI
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// Main error type for the otpgate application
#[derive(Error, Debug)]
pub enum OtpgateError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to the user store
    #[error("User store error: {0}")]
    Store(#[from] StoreError),

    /// Errors related to OTP/TOTP operations
    #[error("OTP error: {0}")]
    Otp(#[from] OtpError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// User store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access user store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed user store: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// OTP/TOTP operation errors
#[derive(Error, Debug, PartialEq)]
pub enum OtpError {
    #[error("Secret is not valid Base32")]
    InvalidSecretEncoding,

    #[error("Invalid OTP parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("Invalid enrollment parameters: {reason}")]
    InvalidEnrollmentParameters { reason: String },

    #[error("HMAC computation failed")]
    Hmac,

    #[error("System time error")]
    Time,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OtpgateError>;
