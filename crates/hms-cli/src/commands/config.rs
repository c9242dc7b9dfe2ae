//! `hms config` command implementation

use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

/// Show the resolved configuration
pub async fn show(config: &Config) -> Result<()> {
    println!("{}", "HMS Configuration:".cyan().bold());
    println!();
    println!("{:<15} {}", "api_url:", config.api_url());
    match config.session_db_path() {
        Ok(path) => println!("{:<15} {}", "session_db:", path.display()),
        Err(_) => println!("{:<15} {}", "session_db:", "(no data directory)".yellow()),
    }
    println!("{:<15} {}s", "timeout:", config.timeout_secs);
    println!();
    println!("{}", "Environment Variables:".cyan());
    println!("  HMS_API_URL           - Backend base URL");
    println!("  HMS_SESSION_DB        - Session database path");
    println!("  HMS_API_TIMEOUT_SECS  - Request timeout");

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_config_show() {
        let config = Config::new();
        assert!(show(&config).await.is_ok());
    }
}
