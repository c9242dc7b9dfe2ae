//! `hms status` command implementation

use crate::api::ApiClient;
use crate::error::Result;
use crate::progress::busy;
use colored::Colorize;

/// Show whether the backend answers and whether a session is stored
pub async fn run(client: &ApiClient) -> Result<()> {
    let reachable = busy("Contacting server...", client.health_check()).await;

    println!("{}", "HMS Status:".cyan().bold());
    println!();
    println!("{:<15} {}", "server:", client.base_url());
    println!(
        "{:<15} {}",
        "reachable:",
        if reachable { "yes".green() } else { "no".red() }
    );
    println!(
        "{:<15} {}",
        "signed in:",
        if client.credentials().is_authenticated() {
            "yes".green()
        } else {
            "no".yellow()
        }
    );

    Ok(())
}
