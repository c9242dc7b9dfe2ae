//! Command implementations
//!
//! Each command module takes an [`ApiClient`](crate::api::ApiClient) and
//! prints its result. Failures are returned to `main`, which reports them.

pub mod appointments;
pub mod check_ins;
pub mod config;
pub mod doctors;
pub mod login;
pub mod logout;
pub mod patients;
pub mod register;
pub mod status;
pub mod token;

use crate::error::{ClientError, Result};
use chrono::{Local, NaiveDate};
use std::io::IsTerminal;

/// Whether prompts can be shown
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Ask before a destructive action. `--yes` skips the prompt; without a
/// terminal `--yes` is required.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    if !is_interactive() {
        return Err(ClientError::config(
            "Refusing to delete without confirmation. Pass --yes to confirm.",
        ));
    }

    Ok(inquire::Confirm::new(prompt).with_default(false).prompt()?)
}

/// Local calendar date, used for age display
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
