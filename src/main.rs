//! otpgate - TOTP multi-factor login CLI
//!
//! A demo command-line application that enrolls users with a shared TOTP
//! secret and gates login behind the resulting one-time codes.

use clap::{Parser, Subcommand};
use otpgate_core::{error::OtpgateError, init_logging};

mod cli;

#[derive(Parser)]
#[command(name = "otpgate")]
#[command(about = "TOTP multi-factor login demo with QR enrollment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user and enroll an authenticator app
    Register,
    /// Log in with password and authenticator code
    Login,
    /// Print the current valid code for an account (debugging helper,
    /// revealing it over any untrusted channel defeats MFA)
    #[command(hide = true)]
    Code {
        /// Account email
        email: String,
    },
}

fn main() {
    // Initialize logging
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Register => cli::register::run_register(),
        Commands::Login => cli::login::run_login(),
        Commands::Code { email } => cli::code::run_code(&email),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Configuration and setup errors (exit code 2)
                OtpgateError::Config(_)
                | OtpgateError::Toml(_)
                | OtpgateError::TomlSerialize(_) => 2,
                OtpgateError::Otp(_) => 2,
                OtpgateError::Store(_) => 2,
                // IO errors (exit code 1 - runtime)
                OtpgateError::Io(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
