//! Author repository for database operations

use common::{
    error::DatabaseResult,
    pagination::{PageRequest, like_pattern},
};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::author::{Author, AuthorFields};

/// Author repository for database operations
#[derive(Clone)]
pub struct AuthorRepository {
    pool: PgPool,
}

impl AuthorRepository {
    /// Create a new author repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One page of authors, newest first, with the total number of matches
    pub async fn list(&self, request: &PageRequest) -> DatabaseResult<(Vec<Author>, i64)> {
        let pattern = request.search.as_deref().map(like_pattern);

        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, email, bio, created_at, updated_at
            FROM authors
            WHERE ($1::text IS NULL OR name ILIKE $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(request.limit as i64)
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM authors
            WHERE ($1::text IS NULL OR name ILIKE $1)
            "#,
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        Ok((authors, total))
    }

    /// Get an author by ID
    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, email, bio, created_at, updated_at
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    pub async fn create(&self, fields: &AuthorFields) -> DatabaseResult<Author> {
        info!("Creating author: {}", fields.name);

        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (name, email, bio)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, bio, created_at, updated_at
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.bio)
        .fetch_one(&self.pool)
        .await?;

        Ok(author)
    }

    /// Replace every mutable field; `None` when the row is gone
    pub async fn update(&self, id: Uuid, fields: &AuthorFields) -> DatabaseResult<Option<Author>> {
        info!("Updating author {}", id);

        let author = sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors
            SET name = $1, email = $2, bio = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, name, email, bio, created_at, updated_at
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.bio)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    /// Delete an author by ID; false when nothing was deleted
    pub async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        info!("Deleting author {}", id);

        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every listed author that exists, returning how many went
    pub async fn delete_many(&self, ids: &[Uuid]) -> DatabaseResult<u64> {
        info!("Deleting {} authors", ids.len());

        let result = sqlx::query("DELETE FROM authors WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
