//! `hms register` command implementation

use super::is_interactive;
use crate::api::ApiClient;
use crate::error::Result;
use crate::forms::RegisterForm;
use crate::progress::busy;
use crate::RegisterArgs;
use colored::Colorize;

/// Validate the profile and create the account
pub async fn run(client: &ApiClient, args: RegisterArgs) -> Result<()> {
    let (password, confirm_password) = match args.password {
        Some(password) => (password.clone(), password),
        None if is_interactive() => {
            let password = inquire::Password::new("Password:")
                .with_custom_confirmation_message("Confirm password:")
                .prompt()?;
            (password.clone(), password)
        },
        None => (String::new(), String::new()),
    };

    let form = RegisterForm {
        username: args.username,
        email: args.email,
        password,
        confirm_password,
        first_name: args.first_name,
        last_name: args.last_name,
    };
    form.validate()?;

    let reply = busy("Creating account...", form.submit(client)).await?;

    println!("{} {}", "✓".green(), reply.message);
    println!("Run 'hms login' to sign in.");
    Ok(())
}
