//! User models for the self-service endpoints

use chrono::{DateTime, Utc};
use common::{
    error::ApiResult,
    validation::{Rules, Validate, normalize_email},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User as exposed by the API; the password hash is never selected
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Replacement values for the caller's own profile
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl Validate for UpdateUserRequest {
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
        rules.finish()
    }
}

/// Validated update, ready for the repository
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub username: String,
    pub email: String,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            username: request.username.unwrap_or_default().trim().to_string(),
            email: normalize_email(&request.email.unwrap_or_default()),
        }
    }
}
