use crate::catalog_actor::CatalogError;
use crate::lifecycle::InventoryError;
use crate::order_actor::OrderError;
use crate::suggestion_actor::SuggestionError;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error returned by every handler, rendered as
/// `{"error": <kind>, "message": <text>}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidStockLevel(String),

    #[error("{0}")]
    InvalidSignal(String),

    #[error("{0}")]
    InvalidQuantity(String),

    /// Malformed body, query or path.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidTransition(String),

    #[error("Missing or invalid bearer token")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidStockLevel(_) => "InvalidStockLevel",
            ApiError::InvalidSignal(_) => "InvalidSignal",
            ApiError::InvalidQuantity(_) => "InvalidQuantity",
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::NotFound(_) => "NotFound",
            ApiError::InvalidTransition(_) => "InvalidTransition",
            ApiError::Unauthorized => "Unauthorized",
            ApiError::Internal(_) => "Internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidStockLevel(_)
            | ApiError::InvalidSignal(_)
            | ApiError::InvalidQuantity(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidTransition(_) => StatusCode::CONFLICT,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": self.kind(),
            "message": message,
        }));

        (self.status(), body).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        let message = e.to_string();
        match e {
            CatalogError::NotFound(_) => ApiError::NotFound(message),
            CatalogError::InvalidStockLevel(_) => ApiError::InvalidStockLevel(message),
            CatalogError::InvalidSignal(_) => ApiError::InvalidSignal(message),
            CatalogError::InvalidQuantity(_) => ApiError::InvalidQuantity(message),
            CatalogError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<SuggestionError> for ApiError {
    fn from(e: SuggestionError) -> Self {
        let message = e.to_string();
        match e {
            SuggestionError::NotFound(_) => ApiError::NotFound(message),
            SuggestionError::InvalidQuantity(_) => ApiError::InvalidQuantity(message),
            SuggestionError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        let message = e.to_string();
        match e {
            OrderError::NotFound(_) | OrderError::ProductNotFound(_) => ApiError::NotFound(message),
            OrderError::InvalidQuantity(_) => ApiError::InvalidQuantity(message),
            OrderError::InvalidTransition { .. } => ApiError::InvalidTransition(message),
            OrderError::Suggestion(inner) => inner.into(),
            OrderError::Catalog(inner) => inner.into(),
            OrderError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::Catalog(inner) => inner.into(),
            InventoryError::Suggestion(inner) => inner.into(),
            InventoryError::Order(inner) => inner.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
