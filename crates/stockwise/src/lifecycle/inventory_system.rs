use super::Inventory;
use crate::clients::{CatalogClient, OrderClient, SuggestionClient};
use crate::engine::EngineConfig;
use tracing::{error, info};

/// The runtime orchestrator for the inventory actors.
///
/// `InventorySystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping all actors
/// - **Dependency Wiring**: the Order actor needs the Suggestion and Catalog clients
///
/// # Architecture
///
/// - **Catalog Actor**: product, stock level and demand signal per SKU
/// - **Suggestion Actor**: the current suggestion set and its resolutions
/// - **Order Actor**: purchase orders; coordinates with the other two
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new(EngineConfig::default());
/// let inventory = system.inventory();
///
/// inventory.seed(fixtures::demo_catalog()).await?;
/// inventory.refresh_suggestions().await?;
/// let order = inventory.accept_suggestion("BAN-001".into()).await?;
///
/// drop(inventory);
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    inventory: Inventory,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Creates and starts all actors.
    pub fn new(engine: EngineConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (catalog_actor, catalog_client) = crate::catalog_actor::new();
        let (suggestion_actor, suggestion_client) = crate::suggestion_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        let catalog_client = CatalogClient::new(catalog_client);
        let suggestion_client = SuggestionClient::new(suggestion_client);
        let order_client = OrderClient::new(order_client);

        // 2. Start actors with injected context
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let suggestion_handle = tokio::spawn(suggestion_actor.run(()));
        let order_handle = tokio::spawn(
            order_actor.run((suggestion_client.clone(), catalog_client.clone())),
        );

        Self {
            inventory: Inventory::new(catalog_client, suggestion_client, order_client, engine),
            handles: vec![catalog_handle, suggestion_handle, order_handle],
        }
    }

    /// A handle on the running actors. Clones must be dropped before
    /// [`shutdown`](Self::shutdown) can complete.
    pub fn inventory(&self) -> Inventory {
        self.inventory.clone()
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the last clients closes the channels; each actor drains its
    /// queue and exits. The Order actor holds clones of the other two clients
    /// in its context, and the graph is acyclic, so they close once it stops.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory system...");
        drop(self.inventory);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Inventory system shutdown complete.");
        Ok(())
    }
}
