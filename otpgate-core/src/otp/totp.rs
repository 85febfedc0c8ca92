//! TOTP (RFC 6238) on top of HOTP, with drift-window validation
//!
//! The counter is the Unix time divided into fixed-length steps. Time is
//! always an explicit argument so validation stays deterministic under
//! test; `current_code` exists for demonstration only and must never back
//! an authentication decision over an untrusted channel.

use crate::error::OtpError;
use crate::otp::hotp::{self, HashAlgorithm};
use crate::types::{OtpCode, SecretKey};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use subtle::ConstantTimeEq;

/// RFC 6238 default step duration
pub const DEFAULT_STEP_SECS: u32 = 30;
/// Default code length
pub const DEFAULT_DIGITS: u32 = 6;
/// Steps of clock skew tolerated on either side during validation
pub const DEFAULT_DRIFT_WINDOW: u32 = 1;

fn default_step_secs() -> u32 {
    DEFAULT_STEP_SECS
}

fn default_digits() -> u32 {
    DEFAULT_DIGITS
}

/// Per-authenticator time-step parameters
///
/// Immutable configuration shared between enrollment and validation; the
/// defaults (30s / 6 digits / SHA-1) match what common authenticator apps
/// assume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpParams {
    /// Step duration in seconds
    #[serde(default = "default_step_secs")]
    pub step_secs: u32,

    /// Number of code digits, 6 to 8
    #[serde(default = "default_digits")]
    pub digits: u32,

    /// HMAC digest algorithm
    #[serde(default)]
    pub algorithm: HashAlgorithm,
}

impl Default for TotpParams {
    fn default() -> Self {
        Self {
            step_secs: DEFAULT_STEP_SECS,
            digits: DEFAULT_DIGITS,
            algorithm: HashAlgorithm::default(),
        }
    }
}

impl TotpParams {
    /// Validate the parameter ranges
    ///
    /// # Errors
    ///
    /// Returns `OtpError::InvalidParameters` when the step duration is
    /// zero or the digit count is outside [6, 8].
    pub fn validate(&self) -> Result<(), OtpError> {
        if self.step_secs == 0 {
            return Err(OtpError::InvalidParameters {
                reason: "step duration must be a positive number of seconds".to_string(),
            });
        }
        hotp::validate_digits(self.digits)
    }
}

/// Compute the TOTP code at `unix_time`
pub fn totp(secret: &SecretKey, unix_time: u64, params: &TotpParams) -> Result<OtpCode, OtpError> {
    params.validate()?;
    let counter = unix_time / u64::from(params.step_secs);
    hotp::hotp(secret, counter, params.digits, params.algorithm)
}

/// Current code for demonstration and testing
///
/// `timestamp` overrides the system clock for deterministic output. A
/// verifier must never reveal this value to an untrusted caller.
pub fn current_code(
    secret: &SecretKey,
    params: &TotpParams,
    timestamp: Option<u64>,
) -> Result<OtpCode, OtpError> {
    let unix_time = match timestamp {
        Some(t) => t,
        None => now_unix()?,
    };
    totp(secret, unix_time, params)
}

/// Seconds since the Unix epoch from the system clock
pub fn now_unix() -> Result<u64, OtpError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| OtpError::Time)
}

/// Check a candidate code within ±`drift_window` steps of `unix_time`
///
/// Malformed candidates (wrong length, non-digits) return `Ok(false)`
/// before any hash is computed. Each comparison is constant-time and the
/// sweep never exits early, so a partial match leaks nothing through
/// timing. Counters that would leave the u64 range are skipped, never
/// wrapped.
///
/// # Errors
///
/// Returns `OtpError::InvalidParameters` for out-of-range `params`; a
/// wrong-but-well-formed candidate is `Ok(false)`, never an error.
pub fn validate(
    secret: &SecretKey,
    candidate: &str,
    unix_time: u64,
    params: &TotpParams,
    drift_window: u32,
) -> Result<bool, OtpError> {
    params.validate()?;

    if candidate.len() != params.digits as usize
        || !candidate.bytes().all(|b| b.is_ascii_digit())
    {
        return Ok(false);
    }

    let counter = unix_time / u64::from(params.step_secs);

    let mut matched = false;
    for step in 0..=u64::from(drift_window) {
        if let Some(c) = counter.checked_sub(step) {
            matched |= code_matches(secret, c, params, candidate)?;
        }
        if step > 0 {
            if let Some(c) = counter.checked_add(step) {
                matched |= code_matches(secret, c, params, candidate)?;
            }
        }
    }

    Ok(matched)
}

fn code_matches(
    secret: &SecretKey,
    counter: u64,
    params: &TotpParams,
    candidate: &str,
) -> Result<bool, OtpError> {
    let expected = hotp::hotp(secret, counter, params.digits, params.algorithm)?;
    Ok(candidate.as_bytes().ct_eq(expected.expose().as_bytes()).into())
}
