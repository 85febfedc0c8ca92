//! Login command implementation
//!
//! Password check first, then the MFA challenge against the stored secret.

use crate::cli::prompt;
use otpgate_core::config;
use otpgate_core::error::OtpgateError;
use otpgate_core::otp::{secret, totp};
use otpgate_core::store::JsonUserStore;
use tracing::info;

/// Run the login command
pub fn run_login() -> Result<(), OtpgateError> {
    println!("🔓 otpgate Login");
    println!("================");
    println!();

    let cfg = config::load_config()?;
    let store = JsonUserStore::open(cfg.users_path()?);

    let email = prompt::prompt_required("Email")?;
    let Some(user) = store.find_by_email(&email) else {
        println!("❌ User not found.");
        return Ok(());
    };

    let password = prompt::prompt_password("Password")?;
    if !user.verify_password(&password) {
        println!("❌ Invalid password.");
        return Ok(());
    }

    if user.mfa_enabled {
        println!();
        println!("=== MFA Challenge ===");

        let key = secret::decode(&user.totp_secret)?;
        let candidate = prompt::prompt_required(&format!(
            "Enter the {}-digit code from your authenticator app",
            cfg.otp.digits
        ))?;

        let now = totp::now_unix()?;
        if !totp::validate(&key, candidate.trim(), now, &cfg.otp, cfg.drift_window)? {
            println!("❌ Invalid authenticator code.");
            info!("failed MFA challenge for {}", email);
            return Ok(());
        }
    }

    info!("successful login for {}", email);
    println!();
    println!("✅ Login successful! Welcome, {}.", user.email);

    Ok(())
}
