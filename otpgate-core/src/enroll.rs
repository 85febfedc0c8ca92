//! `otpauth://` enrollment URI builder
//!
//! The URI is the payload an authenticator app scans out of a QR code.
//! Rendering the QR symbol itself is the frontend's business; this module
//! only produces the text.

use crate::error::OtpError;
use crate::otp::secret;
use crate::otp::totp::TotpParams;
use crate::types::SecretKey;

/// Build the `otpauth://totp/...` enrollment URI for an issuer/account pair
///
/// Issuer and account are percent-encoded (a literal `:` or `&` in either
/// would corrupt the URI); the Base32 secret is embedded unmodified.
///
/// # Errors
///
/// Returns `OtpError::InvalidEnrollmentParameters` when issuer or account
/// is empty, and `OtpError::InvalidParameters` when `params` is out of
/// range.
pub fn build_uri(
    issuer: &str,
    account: &str,
    key: &SecretKey,
    params: &TotpParams,
) -> Result<String, OtpError> {
    if issuer.is_empty() {
        return Err(OtpError::InvalidEnrollmentParameters {
            reason: "issuer must not be empty".to_string(),
        });
    }
    if account.is_empty() {
        return Err(OtpError::InvalidEnrollmentParameters {
            reason: "account must not be empty".to_string(),
        });
    }
    params.validate()?;

    let encoded_issuer = urlencoding::encode(issuer);
    let encoded_account = urlencoding::encode(account);

    Ok(format!(
        "otpauth://totp/{}:{}?secret={}&issuer={}&algorithm={}&digits={}&period={}",
        encoded_issuer,
        encoded_account,
        secret::encode(key),
        encoded_issuer,
        params.algorithm,
        params.digits,
        params.step_secs,
    ))
}
