//! Backend connectivity check.
//!
//! Lists the venue catalog and, when `CANCHAS_ADMIN_ID` is set, the administrator's
//! reservations, then reports what came back.

use canchas_client::{ClientConfig, HttpApi};
use canchas_core::api::BookingApi;
use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = ClientConfig::from_env()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api = HttpApi::new(&config)?;
    info!("Checking backend at {}", api.base_url());

    let venues = api.list_venues().await.map_err(|e| {
        error!("Venue catalog unavailable ({:?}): {}", e.kind(), e);
        eyre!(e.user_message())
    })?;
    let courts: usize = venues.iter().map(|venue| venue.courts.len()).sum();
    info!("{} venues, {} courts", venues.len(), courts);

    match config.admin_id.as_deref() {
        Some(admin_id) => {
            let reservations = api.list_admin_reservations(admin_id).await.map_err(|e| {
                error!("Reservations unavailable ({:?}): {}", e.kind(), e);
                eyre!(e.user_message())
            })?;
            let pending = reservations.iter().filter(|r| r.estado.is_pending()).count();
            info!(
                "{} reservations for administrator {} ({} pending)",
                reservations.len(),
                admin_id,
                pending
            );
        }
        None => info!("CANCHAS_ADMIN_ID not set, skipping reservations"),
    }

    Ok(())
}
