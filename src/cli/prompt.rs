//! Interactive stdin prompt helpers

use otpgate_core::error::OtpgateError;
use std::io::{self, Write};

/// Prompt for a required value, re-asking until one is given
pub fn prompt_required(prompt: &str) -> Result<String, OtpgateError> {
    let prompt_text = format!("{}: ", prompt);

    loop {
        let input = prompt_input(&prompt_text)?;

        if input.trim().is_empty() {
            println!("❌ This field is required. Please enter a value.");
            continue;
        }

        return Ok(input.trim().to_string());
    }
}

/// Prompt for a password
pub fn prompt_password(prompt: &str) -> Result<String, OtpgateError> {
    let prompt_text = format!("{}: ", prompt);
    prompt_input(&prompt_text)
}

/// Prompt for yes/no with default
pub fn prompt_yes_no(prompt: &str, default_yes: bool) -> Result<bool, OtpgateError> {
    let default_indicator = if default_yes { "[Y/n]" } else { "[y/N]" };
    let prompt_text = format!("{} {}: ", prompt, default_indicator);

    loop {
        let input = prompt_input(&prompt_text)?.to_lowercase();

        match input.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            "" => return Ok(default_yes),
            _ => {
                println!("Please enter 'y' for yes or 'n' for no.");
                continue;
            }
        }
    }
}

/// Low-level input prompting
fn prompt_input(prompt: &str) -> Result<String, OtpgateError> {
    print!("{}", prompt);
    io::stdout().flush().map_err(OtpgateError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(OtpgateError::Io)?;

    Ok(input.trim_end().to_string())
}
