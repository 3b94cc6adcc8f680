use canchas_discord_bot::config::BotConfig;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = BotConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.client.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Canchas Discord bot");

    // Start the Discord bot
    match canchas_discord_bot::start_bot(config).await {
        Ok(_) => info!("Discord bot shut down gracefully"),
        Err(e) => error!("Discord bot error: {}", e),
    }

    Ok(())
}
