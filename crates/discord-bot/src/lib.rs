use std::sync::Arc;

use canchas_client::HttpApi;
use canchas_core::api::BookingApi;
use eyre::Result;
use serenity::{prelude::GatewayIntents, Client};
use tracing::info;

pub mod commands;
pub mod config;
pub mod handlers;
pub mod screens;

/// Start the Discord bot with the provided configuration.
///
/// Builds the backend client from `config.client` and runs until the bot disconnects
/// or an error occurs.
///
/// # Arguments
///
/// * `config` - Discord credentials plus the backend client configuration
///
/// # Returns
///
/// * `Ok(())` if the bot shut down gracefully
/// * `Err` if an error occurred during initialization or operation
pub async fn start_bot(config: config::BotConfig) -> Result<()> {
    info!("Starting Discord bot against {}", config.client.base_url);

    let api: Arc<dyn BookingApi> = Arc::new(HttpApi::new(&config.client)?);
    let handler = handlers::Handler::new(config.clone(), api);

    let mut client = Client::builder(&config.token, GatewayIntents::non_privileged())
        .application_id(config.application_id)
        .event_handler(handler)
        .await?;

    info!("Connecting to Discord...");
    client.start().await?;

    Ok(())
}
