//! Secret generation and Base32 codec
//!
//! Secrets travel as unpadded uppercase Base32 (RFC 4648) so that any
//! third-party authenticator app can consume them. Decoding is forgiving
//! about case, whitespace, and trailing padding because foreign producers
//! disagree on all three:
//! 1. Remove whitespace characters
//! 2. Strip trailing `=` and re-pad to 8-character boundaries
//! 3. Decode case-insensitively

use crate::error::OtpError;
use crate::types::SecretKey;
use base32::Alphabet;
use data_encoding::BASE32;
use rand::rngs::OsRng;
use rand::RngCore;

/// Secret length produced by [`generate`]: 160 bits, the RFC 4226 minimum
pub const DEFAULT_SECRET_BYTES: usize = 20;

/// Generate a fresh random secret from the OS CSPRNG
pub fn generate() -> SecretKey {
    let mut bytes = vec![0u8; DEFAULT_SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    SecretKey::new(bytes)
}

/// Generate a random secret of `len` bytes
///
/// # Errors
///
/// Returns `OtpError::InvalidParameters` when `len` is below the
/// 20-byte minimum.
pub fn generate_with_len(len: usize) -> Result<SecretKey, OtpError> {
    if len < DEFAULT_SECRET_BYTES {
        return Err(OtpError::InvalidParameters {
            reason: format!(
                "secret must be at least {} bytes, got {}",
                DEFAULT_SECRET_BYTES, len
            ),
        });
    }

    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    Ok(SecretKey::new(bytes))
}

/// Encode secret bytes as unpadded uppercase Base32
pub fn encode(secret: &SecretKey) -> String {
    base32::encode(Alphabet::RFC4648 { padding: false }, secret.expose())
}

/// Clean whitespace from input string
fn clean(input: &str) -> String {
    input.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

/// Pad input string to 8-character boundaries
///
/// Formula: padding_length = (8 - (len % 8)) % 8
fn pad(input: &str) -> String {
    let padding_len = (8 - (input.len() % 8)) % 8;
    format!("{}{}", input, "=".repeat(padding_len))
}

/// Decode Base32 text into secret bytes
///
/// Accepts mixed case and optional `=` padding. Fails with
/// `OtpError::InvalidSecretEncoding` on empty input, on characters outside
/// the RFC 4648 alphabet, and on symbol counts no whole number of bytes
/// can produce (dangling groups of 1, 3, or 6 symbols).
pub fn decode(input: &str) -> Result<SecretKey, OtpError> {
    let cleaned = clean(input);
    let stripped = cleaned.trim_end_matches('=');

    if stripped.is_empty() {
        return Err(OtpError::InvalidSecretEncoding);
    }

    let padded = pad(stripped);

    BASE32
        .decode(padded.to_uppercase().as_bytes())
        .map(SecretKey::new)
        .map_err(|_| OtpError::InvalidSecretEncoding)
}
