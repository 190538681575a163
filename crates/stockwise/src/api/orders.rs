//! `/api/orders`

use super::{ApiError, AppState};
use crate::model::{Order, OrderId, OrderStatus, Sku, Urgency};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub sku: Sku,
    pub quantity: i64,
    #[serde(default = "default_priority")]
    pub priority: Urgency,
}

fn default_priority() -> Urgency {
    Urgency::Medium
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: OrderStatus,
}

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.inventory.orders.list_orders().await?))
}

pub async fn place_order(
    State(state): State<AppState>,
    body: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(body) = body?;
    let quantity = u32::try_from(body.quantity).map_err(|_| {
        ApiError::InvalidQuantity(format!(
            "Invalid quantity: {} is not a positive unit count",
            body.quantity
        ))
    })?;
    let order = state
        .inventory
        .place_order(body.sku, quantity, body.priority)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StatusRequest>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let id: OrderId = id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("'{id}' is not an order id")))?;
    let Json(body) = body?;
    Ok(Json(state.inventory.update_order_status(id, body.status).await?))
}
