//! `/api/stock/...`: suggestions and catalog records.

use super::{ApiError, AppState};
use crate::engine::SuggestionFilter;
use crate::model::{CatalogItem, DemandSignal, Order, Sku, StockLevel, Suggestion};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ModifyRequest {
    /// Signed so a negative value is reported as an invalid quantity
    /// rather than a malformed body.
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub suggestions: usize,
}

pub async fn list_suggestions(
    State(state): State<AppState>,
    filter: Result<Query<SuggestionFilter>, QueryRejection>,
) -> Result<Json<Vec<Suggestion>>, ApiError> {
    let Query(filter) = filter?;
    Ok(Json(state.inventory.list_suggestions(&filter).await?))
}

pub async fn refresh_suggestions(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let suggestions = state.inventory.refresh_suggestions().await?;
    Ok(Json(RefreshResponse { suggestions }))
}

pub async fn accept_suggestion(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = state.inventory.accept_suggestion(Sku::new(sku)).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn reject_suggestion(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.inventory.reject_suggestion(Sku::new(sku)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn modify_suggestion(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    body: Result<Json<ModifyRequest>, JsonRejection>,
) -> Result<Json<Suggestion>, ApiError> {
    let Json(body) = body?;
    let quantity = u32::try_from(body.quantity).map_err(|_| {
        ApiError::InvalidQuantity(format!(
            "Invalid quantity: {} is not a non-negative unit count",
            body.quantity
        ))
    })?;
    Ok(Json(
        state
            .inventory
            .modify_suggestion(Sku::new(sku), quantity)
            .await?,
    ))
}

pub async fn list_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    Ok(Json(state.inventory.catalog.list_items().await?))
}

pub async fn get_detail(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<CatalogItem>, ApiError> {
    Ok(Json(state.inventory.catalog.get_item(Sku::new(sku)).await?))
}

pub async fn set_stock_level(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    body: Result<Json<StockLevel>, JsonRejection>,
) -> Result<Json<CatalogItem>, ApiError> {
    let Json(stock) = body?;
    Ok(Json(state.inventory.set_stock_level(Sku::new(sku), stock).await?))
}

pub async fn set_signal(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    body: Result<Json<DemandSignal>, JsonRejection>,
) -> Result<Json<CatalogItem>, ApiError> {
    let Json(signal) = body?;
    Ok(Json(state.inventory.set_signal(Sku::new(sku), signal).await?))
}
