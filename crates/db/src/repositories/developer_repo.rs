//! Repository for the `developers` table.

use clientdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::developer::{Developer, NewDeveloper};

const COLUMNS: &str = "id, name, email, tech_stack, skills, description, created_at";

/// Provides CRUD operations for developers.
pub struct DeveloperRepo;

impl DeveloperRepo {
    /// List all developers ordered by ascending id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Developer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM developers ORDER BY id");
        sqlx::query_as::<_, Developer>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a developer by its internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Developer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM developers WHERE id = $1");
        sqlx::query_as::<_, Developer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a validated developer, returning the stored row.
    pub async fn create(pool: &PgPool, input: &NewDeveloper) -> Result<Developer, sqlx::Error> {
        let query = format!(
            "INSERT INTO developers (name, email, tech_stack, skills, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Developer>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.tech_stack)
            .bind(&input.skills)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Delete a developer by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM developers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert a developer, or refresh the existing row carrying the same
    /// email. Email is the natural key for seeded demo rows.
    pub async fn upsert_by_email(
        pool: &PgPool,
        input: &NewDeveloper,
    ) -> Result<Developer, sqlx::Error> {
        let query = format!(
            "UPDATE developers
             SET name = $2, tech_stack = $3, skills = $4, description = $5
             WHERE email = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Developer>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.tech_stack)
            .bind(&input.skills)
            .bind(&input.description)
            .fetch_optional(pool)
            .await?;

        match updated {
            Some(developer) => Ok(developer),
            None => Self::create(pool, input).await,
        }
    }
}
