//! Check-in ledger models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A check-in ledger record. Immutable once written: rows are never updated
/// or deleted by normal operation, and today's popularity is always
/// re-aggregated from them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CheckIn {
    pub id: Uuid,
    pub user_id: i32,
    pub venue_id: i32,
    /// Calendar date in the canonical civil timezone; the uniqueness and
    /// aggregation bucket.
    pub check_in_date: NaiveDate,
    pub issued_at: DateTime<Utc>,
}

/// Row to append to the ledger
#[derive(Debug, Clone)]
pub struct NewCheckIn {
    pub user_id: i32,
    pub venue_id: i32,
    pub check_in_date: NaiveDate,
    pub issued_at: DateTime<Utc>,
}

impl NewCheckIn {
    pub fn new(user_id: i32, venue_id: i32, check_in_date: NaiveDate, issued_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            venue_id,
            check_in_date,
            issued_at,
        }
    }
}
