//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

/// Raw shared secret bytes used as the HMAC key for OTP derivation
///
/// This type ensures OTP secrets are never accidentally logged or exposed
/// in debug output. The canonical textual form of a secret is unpadded
/// uppercase Base32, produced by [`crate::otp::secret::encode`].
pub struct SecretKey(Secret<Vec<u8>>);

// `secrecy` 0.8 only implements `CloneableSecret`/`DebugSecret` for `Vec<S>`
// when the element `S` implements those markers, and it does not provide them
// for primitive `u8`. That makes `Secret<Vec<u8>>` neither `Clone` nor `Debug`,
// so these impls are written by hand to provide the same contract: cloning the
// underlying bytes and a redacted debug representation that never exposes them.
impl Clone for SecretKey {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_vec())
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SecretKey")
            .field(&"[REDACTED alloc::vec::Vec<u8>]")
            .finish()
    }
}

impl SecretKey {
    /// Create a new SecretKey from raw bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Secret::new(bytes))
    }

    /// Expose the secret bytes (use with caution!)
    ///
    /// This should only be called when absolutely necessary,
    /// such as when passing to cryptographic functions.
    pub fn expose(&self) -> &[u8] {
        self.0.expose_secret()
    }

    /// Length of the secret in bytes
    pub fn len(&self) -> usize {
        self.expose().len()
    }

    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.expose().ct_eq(other.expose()).into()
    }
}

impl Eq for SecretKey {}

/// Wrapper for generated one-time codes
///
/// Generated codes should also be treated as sensitive data and never
/// logged, even though they have a short lifetime.
#[derive(Clone, Debug)]
pub struct OtpCode(Secret<String>);

impl OtpCode {
    /// Create a new OtpCode from a generated code string
    pub fn new(code: String) -> Self {
        Self(Secret::new(code))
    }

    /// Expose the code value (use with caution!)
    ///
    /// This should only be called when sending the code to stdout
    /// or comparing against a candidate.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for OtpCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_key_equality() {
        let a = SecretKey::new(vec![1, 2, 3, 4]);
        let b = SecretKey::new(vec![1, 2, 3, 4]);
        let c = SecretKey::new(vec![1, 2, 3, 5]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_secret_key_length_mismatch() {
        let a = SecretKey::new(vec![1, 2, 3]);
        let b = SecretKey::new(vec![1, 2, 3, 4]);

        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_output_redacted() {
        let key = SecretKey::new(vec![0xde, 0xad, 0xbe, 0xef]);
        let debug = format!("{:?}", key);
        assert!(!debug.contains("222"), "raw bytes must not leak: {}", debug);
        assert!(!debug.contains("beef"), "raw bytes must not leak: {}", debug);

        let code = OtpCode::new("755224".to_string());
        let debug = format!("{:?}", code);
        assert!(!debug.contains("755224"), "code must not leak: {}", debug);
    }
}
