use canchas_client::ClientConfig;
use eyre::{eyre, Result};
use std::env;

/// Configuration for the Discord bot.
///
/// Wraps the backend client configuration with the Discord connection details.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Discord bot token (required)
    pub token: String,
    /// Application ID for Discord bot (required)
    pub application_id: u64,
    /// Test guild ID for faster command registration during development
    pub test_guild_id: Option<u64>,
    /// Backend location, identities and refresh period
    pub client: ClientConfig,
}

impl BotConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| eyre!("DISCORD_TOKEN environment variable not set"))?;

        let application_id = lookup("DISCORD_APPLICATION_ID")
            .ok_or_else(|| eyre!("DISCORD_APPLICATION_ID environment variable not set"))?
            .parse::<u64>()
            .map_err(|_| eyre!("DISCORD_APPLICATION_ID must be a valid u64"))?;

        // Optional test guild ID for development
        let test_guild_id = lookup("DISCORD_TEST_GUILD_ID").and_then(|id| id.parse::<u64>().ok());

        let client = ClientConfig::from_lookup(&lookup)?;

        Ok(Self {
            token,
            application_id,
            test_guild_id,
            client,
        })
    }
}
