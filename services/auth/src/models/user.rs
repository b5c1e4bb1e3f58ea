//! User model and the authentication payloads

use chrono::{DateTime, Utc};
use common::{
    error::ApiResult,
    validation::{Rules, Validate},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User entity, as stored
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New user creation payload, password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Public view of a user; never carries the password hash
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> ApiResult<()> {
        let mut rules = Rules::new();
        rules
            .field("username", self.username.as_deref())
            .required()
            .length(3, 50);
        rules
            .field("email", self.email.as_deref())
            .required()
            .email()
            .max_length(255);
        rules
            .field("password", self.password.as_deref())
            .required()
            .check(
                |p| (8..=128).contains(&p.chars().count()),
                "password must be between 8 and 128 characters",
            );
        rules.finish()
    }
}

/// Request for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Validate for LoginRequest {
    fn validate(&self) -> ApiResult<()> {
        let mut rules = Rules::new();
        rules.field("email", self.email.as_deref()).required().email();
        rules.field("password", self.password.as_deref()).required();
        rules.finish()
    }
}

/// Request for token refresh
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}

impl Validate for RefreshTokenRequest {
    fn validate(&self) -> ApiResult<()> {
        let mut rules = Rules::new();
        rules
            .field("refreshToken", self.refresh_token.as_deref())
            .required();
        rules.finish()
    }
}

/// Response for user login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserResponse,
}

/// Response for token refresh
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}
