//! Application state shared across handlers

use common::{jwt::TokenService, pagination::PaginationConfig};

use crate::repositories::{AuthorRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub token_service: TokenService,
    pub pagination: PaginationConfig,
    pub user_repository: UserRepository,
    pub author_repository: AuthorRepository,
}
