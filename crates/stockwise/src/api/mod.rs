//! # HTTP API
//!
//! JSON over HTTP on top of [`Inventory`]. Every `/api` route sits behind the
//! bearer-token gate in [`auth`]; `/health` does not.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/api/stock/suggestions` | [`stock::list_suggestions`] |
//! | POST | `/api/stock/suggestions/refresh` | [`stock::refresh_suggestions`] |
//! | POST | `/api/stock/suggestions/:sku/accept` | [`stock::accept_suggestion`] |
//! | POST | `/api/stock/suggestions/:sku/reject` | [`stock::reject_suggestion`] |
//! | POST | `/api/stock/suggestions/:sku/modify` | [`stock::modify_suggestion`] |
//! | GET | `/api/stock/details` | [`stock::list_details`] |
//! | GET | `/api/stock/details/:sku` | [`stock::get_detail`] |
//! | PUT | `/api/stock/details/:sku/level` | [`stock::set_stock_level`] |
//! | PUT | `/api/stock/details/:sku/signal` | [`stock::set_signal`] |
//! | GET / POST | `/api/orders` | [`orders::list_orders`] / [`orders::place_order`] |
//! | PUT | `/api/orders/:id/status` | [`orders::update_status`] |
//! | GET | `/api/dashboard/metrics` | [`dashboard::metrics`] |
//! | GET | `/api/analytics/model-factors` | [`analytics::model_factors`] |
//! | PUT | `/api/analytics/model-factors/temperature` | [`analytics::set_temperature`] |
//! | GET | `/api/analytics/historical-data` | [`analytics::historical_data`] |
//! | GET | `/api/analytics/model-insights` | [`analytics::model_insights`] |

pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod error;
pub mod orders;
pub mod stock;

pub use error::ApiError;

use crate::lifecycle::Inventory;
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub inventory: Inventory,
    pub api_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(inventory: Inventory, api_token: Option<String>) -> Self {
        Self {
            inventory,
            api_token: api_token.map(Arc::from),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Suggestions
        .route("/stock/suggestions", get(stock::list_suggestions))
        .route("/stock/suggestions/refresh", post(stock::refresh_suggestions))
        .route("/stock/suggestions/:sku/accept", post(stock::accept_suggestion))
        .route("/stock/suggestions/:sku/reject", post(stock::reject_suggestion))
        .route("/stock/suggestions/:sku/modify", post(stock::modify_suggestion))
        // Catalog records
        .route("/stock/details", get(stock::list_details))
        .route("/stock/details/:sku", get(stock::get_detail))
        .route("/stock/details/:sku/level", put(stock::set_stock_level))
        .route("/stock/details/:sku/signal", put(stock::set_signal))
        // Orders
        .route("/orders", get(orders::list_orders).post(orders::place_order))
        .route("/orders/:id/status", put(orders::update_status))
        // Reports
        .route("/dashboard/metrics", get(dashboard::metrics))
        .route("/analytics/model-factors", get(analytics::model_factors))
        .route(
            "/analytics/model-factors/temperature",
            put(analytics::set_temperature),
        )
        .route("/analytics/historical-data", get(analytics::historical_data))
        .route("/analytics/model-insights", get(analytics::model_insights))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_token,
        ));

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
