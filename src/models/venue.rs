//! Venue models
//!
//! The venue catalog is a read-only directory as far as the check-in core is
//! concerned: rows are seeded/managed externally and only the id and active
//! flag matter to issuance. Display attributes are joined through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Venue directory entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Price tier, 1 (cheap) to 4 (expensive)
    pub price_tier: Option<i16>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Venue joined with today's live check-in count. Derived per request,
/// never persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueWithCount {
    #[serde(flatten)]
    pub venue: Venue,
    /// Number of check-ins for this venue in the current local-date bucket
    pub count_today: i64,
}
