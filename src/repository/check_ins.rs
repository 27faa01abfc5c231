//! Check-in ledger repository
//!
//! The ledger is append-only. The one-check-in-per-day invariant lives in
//! the `check_ins_one_per_day` unique constraint on
//! `(user_id, check_in_date)`: concurrent inserts for the same pair are
//! totally ordered by Postgres into exactly one winner, with no
//! check-then-insert window. A constraint violation is reported as a normal
//! value, not an error, so callers can surface it as the expected
//! "already checked in today" outcome.

use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::check_in::{CheckIn, NewCheckIn},
};

/// Result of an append attempt against the ledger
#[derive(Debug)]
pub enum AppendOutcome {
    /// Row committed; exactly one new ledger entry exists
    Appended(CheckIn),
    /// The unique constraint rejected the row: the user already holds a
    /// check-in for this date. Nothing was written.
    DuplicateDay,
}

#[derive(Clone)]
pub struct CheckInsRepository {
    pool: Pool<Postgres>,
}

impl CheckInsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Append a check-in row, delegating the uniqueness decision to the
    /// storage constraint.
    pub async fn append(&self, new: &NewCheckIn) -> AppResult<AppendOutcome> {
        let result = sqlx::query_as::<_, CheckIn>(
            r#"
            INSERT INTO check_ins (id, user_id, venue_id, check_in_date, issued_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.user_id)
        .bind(new.venue_id)
        .bind(new.check_in_date)
        .bind(new.issued_at)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(AppendOutcome::Appended(row)),
            Err(e) if is_unique_violation(&e) => Ok(AppendOutcome::DuplicateDay),
            Err(e) => Err(e.into()),
        }
    }

    /// Count check-ins per venue for one local-date bucket. Venues with no
    /// rows are absent from the mapping; callers default to 0.
    pub async fn counts_for_date(&self, date: NaiveDate) -> AppResult<HashMap<i32, i64>> {
        let rows = sqlx::query(
            r#"
            SELECT venue_id, COUNT(*) AS count
            FROM check_ins
            WHERE check_in_date = $1
            GROUP BY venue_id
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get("venue_id"), row.get("count")))
            .collect())
    }

    /// Full check-in history for a user, newest first. The ledger is
    /// permanent, so this includes buckets older than today.
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<CheckIn>> {
        let rows = sqlx::query_as::<_, CheckIn>(
            "SELECT * FROM check_ins WHERE user_id = $1 ORDER BY issued_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
