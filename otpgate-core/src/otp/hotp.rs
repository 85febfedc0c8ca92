//! HOTP (RFC 4226) code derivation
//!
//! Computes a keyed hash over the big-endian counter, then applies
//! dynamic truncation to reduce the digest to a short decimal code.

use crate::error::OtpError;
use crate::types::{OtpCode, SecretKey};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use std::fmt;
use std::str::FromStr;

/// Shortest code length accepted by authenticator apps
pub const MIN_DIGITS: u32 = 6;
/// Longest code length the 31-bit truncated value can fill
pub const MAX_DIGITS: u32 = 8;

/// Hash algorithm used as the HMAC digest
///
/// SHA-1 is the default for interoperability with common authenticator
/// apps; SHA-256 and SHA-512 are selectable for forward compatibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "SHA1")]
    Sha1,
    #[serde(rename = "SHA256")]
    Sha256,
    #[serde(rename = "SHA512")]
    Sha512,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha1 => write!(f, "SHA1"),
            Self::Sha256 => write!(f, "SHA256"),
            Self::Sha512 => write!(f, "SHA512"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = OtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA512" => Ok(Self::Sha512),
            other => Err(OtpError::InvalidParameters {
                reason: format!("unknown hash algorithm: {}", other),
            }),
        }
    }
}

pub(crate) fn validate_digits(digits: u32) -> Result<(), OtpError> {
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        return Err(OtpError::InvalidParameters {
            reason: format!(
                "digits must be between {} and {}, got {}",
                MIN_DIGITS, MAX_DIGITS, digits
            ),
        });
    }
    Ok(())
}

fn hmac_digest(
    algorithm: HashAlgorithm,
    key: &[u8],
    message: &[u8],
) -> Result<Vec<u8>, OtpError> {
    // HMAC accepts keys of any length; new_from_slice only fails for
    // fixed-key MAC types
    Ok(match algorithm {
        HashAlgorithm::Sha1 => {
            let mut mac = Hmac::<Sha1>::new_from_slice(key).map_err(|_| OtpError::Hmac)?;
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
        HashAlgorithm::Sha256 => {
            let mut mac = Hmac::<Sha256>::new_from_slice(key).map_err(|_| OtpError::Hmac)?;
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
        HashAlgorithm::Sha512 => {
            let mut mac = Hmac::<Sha512>::new_from_slice(key).map_err(|_| OtpError::Hmac)?;
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
    })
}

/// Compute the HOTP code for a counter value (RFC 4226 §5)
///
/// The counter is hashed as its 8-byte big-endian encoding; the low-order
/// four bits of the final digest byte select a 4-byte window that is read
/// as a 31-bit big-endian integer and reduced modulo `10^digits`.
///
/// Deterministic: the same `(secret, counter, digits, algorithm)` always
/// yields the same code.
///
/// # Errors
///
/// Returns `OtpError::InvalidParameters` when `digits` is outside [6, 8].
pub fn hotp(
    secret: &SecretKey,
    counter: u64,
    digits: u32,
    algorithm: HashAlgorithm,
) -> Result<OtpCode, OtpError> {
    validate_digits(digits)?;

    let digest = hmac_digest(algorithm, secret.expose(), &counter.to_be_bytes())?;

    // Dynamic truncation: the low nibble of the last byte picks the offset
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let binary = ((digest[offset] as u32 & 0x7f) << 24)
        | ((digest[offset + 1] as u32) << 16)
        | ((digest[offset + 2] as u32) << 8)
        | (digest[offset + 3] as u32);

    let code = binary % 10u32.pow(digits);
    Ok(OtpCode::new(format!(
        "{:0width$}",
        code,
        width = digits as usize
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rfc_secret() -> SecretKey {
        SecretKey::new(b"12345678901234567890".to_vec())
    }

    #[test]
    fn test_rfc4226_vectors() {
        // Appendix D of RFC 4226, counters 0 through 9
        let expected = [
            "755224", "287082", "359152", "969429", "338314", "254676", "287922", "162583",
            "399871", "520489",
        ];

        for (counter, want) in expected.iter().enumerate() {
            let code = hotp(&rfc_secret(), counter as u64, 6, HashAlgorithm::Sha1).unwrap();
            assert_eq!(code.expose(), *want, "counter {}", counter);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = hotp(&rfc_secret(), 42, 6, HashAlgorithm::Sha1).unwrap();
        let b = hotp(&rfc_secret(), 42, 6, HashAlgorithm::Sha1).unwrap();
        assert_eq!(a.expose(), b.expose());
    }

    #[test]
    fn test_zero_padding_preserved() {
        // Counter 6 yields 287922; scan for a code with a leading zero to
        // prove padding, using 8 digits where the high digits vary
        for counter in 0..200u64 {
            let code = hotp(&rfc_secret(), counter, 8, HashAlgorithm::Sha1).unwrap();
            assert_eq!(code.expose().len(), 8, "counter {}", counter);
        }
    }

    #[test]
    fn test_digit_bounds() {
        for digits in [5, 9, 0, 20] {
            let result = hotp(&rfc_secret(), 0, digits, HashAlgorithm::Sha1);
            assert!(
                matches!(result, Err(OtpError::InvalidParameters { .. })),
                "digits {} should be rejected",
                digits
            );
        }
        for digits in [6, 7, 8] {
            let code = hotp(&rfc_secret(), 0, digits, HashAlgorithm::Sha1).unwrap();
            assert_eq!(code.expose().len(), digits as usize);
        }
    }

    #[test]
    fn test_algorithms_disagree() {
        let sha1 = hotp(&rfc_secret(), 1, 8, HashAlgorithm::Sha1).unwrap();
        let sha256 = hotp(&rfc_secret(), 1, 8, HashAlgorithm::Sha256).unwrap();
        let sha512 = hotp(&rfc_secret(), 1, 8, HashAlgorithm::Sha512).unwrap();

        assert_ne!(sha1.expose(), sha256.expose());
        assert_ne!(sha256.expose(), sha512.expose());
    }

    #[test]
    fn test_algorithm_parse_and_display() {
        assert_eq!("sha1".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha1);
        assert_eq!(
            "SHA256".parse::<HashAlgorithm>().unwrap(),
            HashAlgorithm::Sha256
        );
        assert_eq!(
            "Sha512".parse::<HashAlgorithm>().unwrap(),
            HashAlgorithm::Sha512
        );
        assert!("md5".parse::<HashAlgorithm>().is_err());

        assert_eq!(HashAlgorithm::Sha1.to_string(), "SHA1");
        assert_eq!(HashAlgorithm::Sha512.to_string(), "SHA512");
    }
}
