//! Author models

use chrono::{DateTime, Utc};
use common::{
    error::ApiResult,
    validation::{Rules, Validate, normalize_email},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Author entity
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /authors` and `PUT /authors/:id`
#[derive(Debug, Deserialize)]
pub struct AuthorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}

impl Validate for AuthorRequest {
    fn validate(&self) -> ApiResult<()> {
        let mut rules = Rules::new();
        rules
            .field("name", self.name.as_deref())
            .required()
            .length(2, 100);
        rules
            .field("email", self.email.as_deref())
            .required()
            .email()
            .max_length(255);
        rules.field("bio", self.bio.as_deref()).max_length(1000);
        rules.finish()
    }
}

/// Full set of mutable author fields
#[derive(Debug, Clone)]
pub struct AuthorFields {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
}

impl From<AuthorRequest> for AuthorFields {
    fn from(request: AuthorRequest) -> Self {
        Self {
            name: request.name.unwrap_or_default().trim().to_string(),
            email: normalize_email(&request.email.unwrap_or_default()),
            bio: request
                .bio
                .map(|bio| bio.trim().to_string())
                .filter(|bio| !bio.is_empty()),
        }
    }
}

/// Body of `DELETE /authors`
#[derive(Debug, Deserialize)]
pub struct BatchDeleteRequest {
    pub ids: Option<Vec<Uuid>>,
}

impl Validate for BatchDeleteRequest {
    fn validate(&self) -> ApiResult<()> {
        let mut rules = Rules::new();
        match &self.ids {
            None => rules.ensure(false, "ids is required"),
            Some(ids) => rules.ensure(!ids.is_empty(), "ids must not be empty"),
        };
        rules.finish()
    }
}

#[derive(Debug, Serialize)]
pub struct BatchDeleteResponse {
    pub deleted: u64,
}
