//! Authentication service routes

use axum::{Router, extract::State, routing::{get, post}};
use common::{
    error::{ApiError, ApiResult},
    response::ApiResponse,
    validation::{ValidatedJson, normalize_email},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    AppState,
    models::{
        LoginRequest, LoginResponse, NewUser, RefreshTokenRequest, RefreshTokenResponse,
        RegisterRequest, UserResponse,
    },
    password::{hash_password, verify_against_placeholder, verify_password},
};

/// Create the router for the authentication service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh-token", post(refresh_token))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> ApiResponse<Value> {
    ApiResponse::ok(
        "Service is healthy",
        json!({
            "status": "ok",
            "service": "auth-service"
        }),
    )
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// User registration endpoint
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> ApiResult<ApiResponse<UserResponse>> {
    let username = payload.username.unwrap_or_default().trim().to_string();
    let email = normalize_email(&payload.email.unwrap_or_default());
    let password = payload.password.unwrap_or_default();

    let password_hash = hash_password(&password).map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = state
        .user_repository
        .create(&NewUser {
            username,
            email,
            password_hash,
        })
        .await?;

    info!("Registered user {}", user.id);
    Ok(ApiResponse::created(
        "User registered successfully",
        user.into(),
    ))
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> ApiResult<ApiResponse<LoginResponse>> {
    let email = normalize_email(&payload.email.unwrap_or_default());
    let password = payload.password.unwrap_or_default();

    let Some(user) = state.user_repository.find_by_email(&email).await? else {
        warn!("Login attempt for unknown email");
        verify_against_placeholder(&password);
        return Err(ApiError::InvalidCredentials);
    };

    let matches =
        verify_password(&user.password_hash, &password).map_err(|e| ApiError::Internal(e.to_string()))?;
    if !matches {
        warn!("Login attempt with wrong password for user {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    let tokens = state.token_service.issue_token_pair(user.id)?;

    info!("User {} logged in", user.id);
    Ok(ApiResponse::ok(
        "Login successful",
        LoginResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: state.token_service.access_token_expiry(),
            user: user.into(),
        },
    ))
}

/// Refresh token endpoint
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<ApiResponse<RefreshTokenResponse>> {
    let refresh_token = payload.refresh_token.unwrap_or_default();
    let access_token = state.token_service.refresh_access_token(refresh_token.trim())?;

    Ok(ApiResponse::ok(
        "Access token refreshed",
        RefreshTokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: state.token_service.access_token_expiry(),
        },
    ))
}
