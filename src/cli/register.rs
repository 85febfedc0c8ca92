//! Register command implementation
//!
//! Interactive enrollment: collect credentials, generate a shared secret,
//! display the QR code, and require one valid code before anything is
//! stored.

use crate::cli::{prompt, qr};
use otpgate_core::error::OtpgateError;
use otpgate_core::otp::{secret, totp};
use otpgate_core::store::{JsonUserStore, User};
use otpgate_core::{config, enroll};
use tracing::info;

/// Run the register command
pub fn run_register() -> Result<(), OtpgateError> {
    println!("🔐 otpgate Registration");
    println!("=======================");
    println!();

    let cfg = config::load_config()?;
    if !config::config_exists()? {
        // Materialize the defaults so the user has a file to edit
        config::save_config(&cfg)?;
    }

    let mut store = JsonUserStore::open(cfg.users_path()?);

    let email = prompt::prompt_required("Email")?;
    if store.exists(&email) {
        println!("❌ A user with this email already exists.");
        return Ok(());
    }

    let password = prompt::prompt_password("Password")?;
    if password.is_empty() {
        println!("❌ Password cannot be empty.");
        return Ok(());
    }

    let confirm = prompt::prompt_password("Confirm password")?;
    if password != confirm {
        println!("❌ Passwords do not match.");
        return Ok(());
    }

    // Enrollment: fresh secret, otpauth:// URI, QR code for scanning
    let key = secret::generate();
    let encoded_secret = secret::encode(&key);
    let uri = enroll::build_uri(&cfg.issuer, &email, &key, &cfg.otp)?;

    println!();
    println!("=== Authenticator Setup ===");
    println!();
    println!("Scan this QR code with your authenticator app");
    println!("(Google Authenticator, Authy, etc.):");
    println!();
    qr::print_terminal(&uri);

    if prompt::prompt_yes_no("Also save the QR code as qrcode.png?", false)? {
        match qr::save_png(&uri, "qrcode.png") {
            Ok(()) => println!("QR code saved to qrcode.png"),
            Err(e) => println!("Note: could not save QR code image: {}", e),
        }
    }

    println!();
    println!("Or enter this key manually:");
    println!("  Secret:  {}", encoded_secret);
    println!("  Issuer:  {}", cfg.issuer);
    println!("  Account: {}", email);

    // One good code proves the authenticator is enrolled before we store
    // anything
    println!();
    println!("=== Verify Setup ===");
    let candidate = prompt::prompt_required(&format!(
        "Enter the {}-digit code from your authenticator app",
        cfg.otp.digits
    ))?;

    let now = totp::now_unix()?;
    if !totp::validate(&key, candidate.trim(), now, &cfg.otp, cfg.drift_window)? {
        println!("❌ Invalid code. Registration cancelled.");
        println!("Please try again and make sure your authenticator app is set up correctly.");
        return Ok(());
    }

    store.save(User::new(email.clone(), &password, encoded_secret, true))?;
    info!("registered user {}", email);

    println!();
    println!("✅ Registration successful!");
    println!("   MFA has been enabled for your account.");
    println!("   You can now login with your credentials and authenticator code.");

    Ok(())
}
