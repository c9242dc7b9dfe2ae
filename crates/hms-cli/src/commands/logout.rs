//! `hms logout` command implementation

use crate::auth::Credentials;
use crate::error::Result;
use colored::Colorize;
use tracing::info;

/// Remove both stored tokens
pub async fn run(credentials: &Credentials) -> Result<()> {
    let was_authenticated = credentials.is_authenticated();
    credentials.remove_tokens()?;

    info!(was_authenticated, "Session cleared");

    if was_authenticated {
        println!("{} Logged out.", "✓".green());
    } else {
        println!("No active session.");
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logout_clears_tokens() {
        let credentials = Credentials::in_memory();
        credentials.set_tokens("a", "r").unwrap();

        run(&credentials).await.unwrap();

        assert_eq!(credentials.get_access_token().unwrap(), None);
        assert_eq!(credentials.get_refresh_token().unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_without_session() {
        let credentials = Credentials::in_memory();
        assert!(run(&credentials).await.is_ok());
    }
}
