use super::{ApiError, AppState};
use crate::model::DashboardMetrics;
use axum::{extract::State, Json};

pub async fn metrics(State(state): State<AppState>) -> Result<Json<DashboardMetrics>, ApiError> {
    Ok(Json(state.inventory.dashboard().await?))
}
