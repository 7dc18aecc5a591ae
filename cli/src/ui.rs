use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use std::io::{self, Write};

use crate::error::{CliError, Result};

/// Print a status message for an operation in progress
pub fn status_message(message: &str) {
    println!("{} {} ... ", "⏳".yellow(), message.bright_white());
    let _ = io::stdout().flush();
}

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {title} ====").cyan().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print extra detail, only with `--verbose`
pub fn verbose_message(verbose: bool, message: &str) {
    if verbose {
        println!("   {}", message.dimmed());
    }
}

/// Ask a yes/no question, defaulting to no. `assume_yes` skips the prompt.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::DialoguerError(e).with_context("Failed to get user confirmation"))
}

/// Like [`confirm`], but a "no" aborts the command
pub fn confirm_or_abort(prompt: &str, assume_yes: bool) -> Result<()> {
    if confirm(prompt, assume_yes)? {
        Ok(())
    } else {
        Err(CliError::Aborted)
    }
}
