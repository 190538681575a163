use super::{evaluate, EngineConfig};
use crate::catalog_actor::CatalogError;
use crate::model::Suggestion;
use crate::repository::InventoryRepository;
use tracing::{info, instrument, warn};

/// Evaluates every record the repository holds.
///
/// Each record is read in one call, so its stock and signal come from the
/// same snapshot. Records removed mid-scan and records that fail validation
/// are skipped with a warning; any other repository failure aborts the scan.
#[instrument(skip_all)]
pub async fn scan<R>(repository: &R, config: &EngineConfig) -> Result<Vec<Suggestion>, CatalogError>
where
    R: InventoryRepository + ?Sized,
{
    let skus = repository.list_skus().await?;
    let mut suggestions = Vec::new();

    for sku in &skus {
        let item = match repository.get_item(sku).await {
            Ok(item) => item,
            Err(CatalogError::NotFound(_)) => {
                warn!(%sku, "Record vanished during scan");
                continue;
            }
            Err(e) => return Err(e),
        };

        match evaluate(&item.product, &item.stock, &item.signal, config) {
            Ok(Some(suggestion)) => suggestions.push(suggestion),
            Ok(None) => {}
            Err(e) => warn!(%sku, error = %e, "Skipping record"),
        }
    }

    info!(scanned = skus.len(), suggested = suggestions.len(), "Scan complete");
    Ok(suggestions)
}
