//! Self-service endpoints under `/users/me`

use axum::{Extension, extract::State};
use common::{
    error::{ApiError, ApiResult},
    response::ApiResponse,
    validation::ValidatedJson,
};
use tracing::info;

use crate::{
    middleware::AuthUser,
    models::user::{UpdateUserRequest, User, UserChanges},
    state::AppState,
};

fn user_not_found() -> ApiError {
    ApiError::NotFound("User not found".to_string())
}

/// `GET /users/me`
pub async fn get_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<ApiResponse<User>> {
    let user = state
        .user_repository
        .find_by_id(auth.id)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(ApiResponse::ok("User retrieved successfully", user))
}

/// `PUT /users/me`
///
/// The existence check and the update are separate statements.
pub async fn update_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<ApiResponse<User>> {
    if state.user_repository.find_by_id(auth.id).await?.is_none() {
        return Err(user_not_found());
    }

    let changes = UserChanges::from(payload);
    let user = state
        .user_repository
        .update(auth.id, &changes)
        .await?
        .ok_or_else(user_not_found)?;

    info!("User {} updated their profile", user.id);
    Ok(ApiResponse::ok("User updated successfully", user))
}

/// `DELETE /users/me`
pub async fn delete_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<ApiResponse<()>> {
    if !state.user_repository.delete(auth.id).await? {
        return Err(user_not_found());
    }

    info!("User {} deleted their account", auth.id);
    Ok(ApiResponse::ok("User deleted successfully", ()))
}
