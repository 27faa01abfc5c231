//! Venue directory repository (read-only)

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::venue::Venue};

#[derive(Clone)]
pub struct VenuesRepository {
    pool: Pool<Postgres>,
}

impl VenuesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all active venues
    pub async fn list_active(&self) -> AppResult<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(
            "SELECT * FROM venues WHERE active ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(venues)
    }

    /// Get an active venue by id, or None if missing or inactive
    pub async fn get_active(&self, id: i32) -> AppResult<Option<Venue>> {
        let venue = sqlx::query_as::<_, Venue>(
            "SELECT * FROM venues WHERE id = $1 AND active",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(venue)
    }
}
