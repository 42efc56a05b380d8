//! Shared-secret gate for API routes

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

/// How requests are checked against the configured secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessGate {
    /// `Authorization` must equal this value exactly
    Secret(String),
    /// Explicitly opened with `AUTH_DISABLED`
    Open,
    /// No secret configured and auth not disabled: nothing gets through
    Closed,
}

impl AccessGate {
    pub fn authorize(&self, header: Option<&str>) -> Access {
        match self {
            AccessGate::Secret(secret) if header == Some(secret.as_str()) => Access::Allow,
            AccessGate::Secret(_) | AccessGate::Closed => Access::Deny,
            AccessGate::Open => Access::Allow,
        }
    }
}

/// Runs before every API handler. A denied request never reaches the store.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match state.gate.authorize(header) {
        Access::Allow => next.run(request).await,
        Access::Deny => {
            warn!(
                "Rejected {} {}: bad or missing Authorization header",
                request.method(),
                request.uri().path()
            );
            ApiError::Unauthorized.into_response()
        }
    }
}
