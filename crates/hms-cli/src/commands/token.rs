//! `hms token` command implementation
//!
//! Refreshing is always an explicit user action; the client never does it
//! on its own after a rejected request.

use crate::api::ApiClient;
use crate::error::{ClientError, Result};
use crate::progress::busy;
use colored::Colorize;
use tracing::info;

/// Exchange the stored refresh token for a new access token and store it
pub async fn refresh(client: &ApiClient) -> Result<()> {
    let refresh = client
        .credentials()
        .get_refresh_token()?
        .ok_or_else(|| ClientError::config("No refresh token stored. Run 'hms login' first."))?;

    let token = busy("Refreshing session...", client.auth().refresh_token(&refresh)).await?;
    client.credentials().set_access_token(&token.access)?;

    info!("Access token refreshed");
    println!("{} Session refreshed.", "✓".green());
    Ok(())
}
