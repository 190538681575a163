//! `/api/analytics`: what the engine is calibrated with and fed, and how
//! well it has done.

use super::{ApiError, AppState};
use crate::model::{HistoricalData, ModelFactors, ModelInsights};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TemperatureRequest {
    pub temperature: f64,
}

pub async fn model_factors(State(state): State<AppState>) -> Result<Json<ModelFactors>, ApiError> {
    Ok(Json(state.inventory.model_factors().await?))
}

/// Applies one forecast to every product and returns the updated factors.
pub async fn set_temperature(
    State(state): State<AppState>,
    body: Result<Json<TemperatureRequest>, JsonRejection>,
) -> Result<Json<ModelFactors>, ApiError> {
    let Json(body) = body?;
    state.inventory.set_temperature(body.temperature).await?;
    Ok(Json(state.inventory.model_factors().await?))
}

pub async fn historical_data(State(state): State<AppState>) -> Json<HistoricalData> {
    Json(state.inventory.historical_data().await)
}

pub async fn model_insights(State(state): State<AppState>) -> Result<Json<ModelInsights>, ApiError> {
    Ok(Json(state.inventory.model_insights().await?))
}
