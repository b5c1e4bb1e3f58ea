//! Author endpoints

use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use common::{
    error::{ApiError, ApiResult},
    pagination::{PageQuery, PageRequest, Pagination},
    response::ApiResponse,
    validation::ValidatedJson,
};
use uuid::Uuid;

use crate::{
    models::author::{Author, AuthorFields, AuthorRequest, BatchDeleteRequest, BatchDeleteResponse},
    state::AppState,
};

type AuthorId = WithRejection<Path<Uuid>, ApiError>;

fn author_not_found() -> ApiError {
    ApiError::NotFound("Author not found".to_string())
}

/// `GET /authors?page&limit&search`
pub async fn list_authors(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<PageQuery>, ApiError>,
) -> ApiResult<ApiResponse<Vec<Author>>> {
    let request = PageRequest::resolve(&query, &state.pagination);
    let (authors, total) = state.author_repository.list(&request).await?;

    Ok(ApiResponse::paginated(
        "Authors retrieved successfully",
        authors,
        Pagination::new(total, request.page, request.limit),
    ))
}

/// `GET /authors/:id`
pub async fn get_author(
    State(state): State<AppState>,
    WithRejection(Path(id), _): AuthorId,
) -> ApiResult<ApiResponse<Author>> {
    let author = state
        .author_repository
        .find_by_id(id)
        .await?
        .ok_or_else(author_not_found)?;

    Ok(ApiResponse::ok("Author retrieved successfully", author))
}

/// `POST /authors`
pub async fn create_author(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthorRequest>,
) -> ApiResult<ApiResponse<Author>> {
    let author = state
        .author_repository
        .create(&AuthorFields::from(payload))
        .await?;

    Ok(ApiResponse::created("Author created successfully", author))
}

/// `PUT /authors/:id`
///
/// The existence check and the update are separate statements.
pub async fn update_author(
    State(state): State<AppState>,
    WithRejection(Path(id), _): AuthorId,
    ValidatedJson(payload): ValidatedJson<AuthorRequest>,
) -> ApiResult<ApiResponse<Author>> {
    if state.author_repository.find_by_id(id).await?.is_none() {
        return Err(author_not_found());
    }

    let author = state
        .author_repository
        .update(id, &AuthorFields::from(payload))
        .await?
        .ok_or_else(author_not_found)?;

    Ok(ApiResponse::ok("Author updated successfully", author))
}

/// `DELETE /authors/:id`
pub async fn delete_author(
    State(state): State<AppState>,
    WithRejection(Path(id), _): AuthorId,
) -> ApiResult<ApiResponse<()>> {
    if !state.author_repository.delete(id).await? {
        return Err(author_not_found());
    }

    Ok(ApiResponse::ok("Author deleted successfully", ()))
}

/// `DELETE /authors` with `{ "ids": [...] }`
pub async fn delete_authors(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BatchDeleteRequest>,
) -> ApiResult<ApiResponse<BatchDeleteResponse>> {
    let mut ids = payload.ids.unwrap_or_default();
    ids.sort_unstable();
    ids.dedup();

    let deleted = state.author_repository.delete_many(&ids).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound(
            "No authors found for the given ids".to_string(),
        ));
    }

    Ok(ApiResponse::ok(
        "Authors deleted successfully",
        BatchDeleteResponse { deleted },
    ))
}
