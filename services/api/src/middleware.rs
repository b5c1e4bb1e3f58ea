//! Authentication middleware for JWT token validation

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use common::{error::ApiError, jwt::bearer_token};
use tracing::warn;
use uuid::Uuid;

use crate::state::AppState;

/// Authenticated user information
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
}

/// Authentication middleware
///
/// Rejects with 401 when no bearer token is present and with 403 when the
/// token does not verify as an access token. On success the caller's
/// [`AuthUser`] is stored in the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers()).inspect_err(|_| {
        warn!("Rejected {} {}: no bearer token", req.method(), req.uri().path());
    })?;

    let claims = state
        .token_service
        .verify_access_token(&token)
        .inspect_err(|e| {
            warn!("Rejected {} {}: {}", req.method(), req.uri().path(), e);
        })?;

    req.extensions_mut().insert(AuthUser { id: claims.sub });

    Ok(next.run(req).await)
}
