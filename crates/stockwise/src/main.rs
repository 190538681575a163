//! # Stockwise server
//!
//! 1. Loads `.env` and the [`Config`].
//! 2. Starts the [`InventorySystem`] and seeds the catalog (a JSON seed file,
//!    or the built-in demo catalog).
//! 3. Computes the first suggestion set and serves the API until Ctrl-C.

use resource_actor::tracing::setup_tracing;
use stockwise::api::{self, AppState};
use stockwise::config::Config;
use stockwise::lifecycle::{fixtures, InventorySystem};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Try current directory first, then crates/stockwise/
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_filename("crates/stockwise/.env");
    }

    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env()?;

    let system = InventorySystem::new(config.engine.clone());
    let inventory = system.inventory();

    let catalog = match &config.seed_file {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog seed");
            fixtures::load_seed(path)?
        }
        None => fixtures::demo_catalog(),
    };
    inventory.seed(catalog).await?;
    inventory.record_history(fixtures::demo_history()).await;
    inventory.refresh_suggestions().await?;

    if config.api_token.is_none() {
        warn!("STOCKWISE_API_TOKEN is not set; /api routes are unauthenticated");
    }

    let app = api::router(AppState::new(inventory, config.api_token.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Stockwise API running on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
