//! `hms login` command implementation

use super::is_interactive;
use crate::api::ApiClient;
use crate::error::Result;
use crate::forms::LoginForm;
use crate::progress::busy;
use colored::Colorize;

/// Sign in and persist the issued tokens.
///
/// Missing values are prompted for on a terminal. Otherwise they are left
/// empty and the form rejects them before any request is made.
pub async fn run(client: &ApiClient, email: Option<String>, password: Option<String>) -> Result<()> {
    let interactive = is_interactive();

    let email = match email {
        Some(email) => email,
        None if interactive => inquire::Text::new("Email:").prompt()?,
        None => String::new(),
    };

    let password = match password {
        Some(password) => password,
        None if interactive => inquire::Password::new("Password:")
            .without_confirmation()
            .prompt()?,
        None => String::new(),
    };

    let form = LoginForm::new(email, password);
    form.validate()?;

    busy("Signing in...", form.submit(client)).await?;

    println!("{} Logged in as {}", "✓".green(), form.email.trim().bold());
    Ok(())
}
