//! Code command implementation
//!
//! Prints the verifier's own current code for an account. Debugging and
//! demonstration only: a real verifier must never expose this over an
//! untrusted channel, which is why the subcommand is hidden from help.

use otpgate_core::config;
use otpgate_core::error::OtpgateError;
use otpgate_core::otp::{secret, totp};
use otpgate_core::store::JsonUserStore;

/// Run the code command
///
/// Outputs only the code to stdout (machine-parsable). Errors go to stderr.
pub fn run_code(email: &str) -> Result<(), OtpgateError> {
    let cfg = config::load_config()?;
    let store = JsonUserStore::open(cfg.users_path()?);

    let Some(user) = store.find_by_email(email) else {
        println!("❌ User not found.");
        return Ok(());
    };

    let key = secret::decode(&user.totp_secret)?;
    let code = totp::current_code(&key, &cfg.otp, None)?;

    println!("{}", code.expose());

    Ok(())
}
