//! Bearer-token gate for the `/api` routes.

use super::{ApiError, AppState};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Rejects the request with 401 unless it carries the configured token.
/// With no token configured every request passes.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = state.api_token.as_deref() {
        match extract_token(request.headers()) {
            Some(token) if token == expected => {}
            _ => {
                tracing::debug!(path = %request.uri().path(), "Rejected unauthenticated request");
                return Err(ApiError::Unauthorized);
            }
        }
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_prefix_is_required() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(extract_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(extract_token(&headers), Some("abc"));
    }
}
