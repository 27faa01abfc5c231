//! Venue ranking service
//!
//! Joins the venue directory with the live per-venue check-in counts for the
//! current local-date bucket. Counts are always re-aggregated from the
//! ledger; there is no cached counter to drift. If either read fails the
//! whole call fails: a ranking without the catalog, or with stale-forever
//! counts, would be misleading.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{FixedOffset, Utc};
use tokio::time::timeout;

use crate::{
    config::CheckInConfig,
    error::{AppError, AppResult},
    models::venue::{Venue, VenueWithCount},
    repository::Repository,
    services::check_ins::{canonical_offset, local_date},
};

#[derive(Clone)]
pub struct VenuesService {
    repository: Repository,
    config: CheckInConfig,
    offset: FixedOffset,
}

impl VenuesService {
    pub fn new(repository: Repository, config: CheckInConfig) -> AppResult<Self> {
        let offset = canonical_offset(&config)?;
        Ok(Self {
            repository,
            config,
            offset,
        })
    }

    /// Get an active venue by id
    pub async fn get_active(&self, id: i32) -> AppResult<Venue> {
        self.repository
            .venues
            .get_active(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue with id {} not found or inactive", id)))
    }

    /// List active venues with today's counts, most popular first
    pub async fn list_ranked(&self) -> AppResult<Vec<VenueWithCount>> {
        let today = local_date(Utc::now(), self.offset);

        let venues = self.repository.venues.list_active().await?;
        let counts = timeout(
            self.storage_timeout(),
            self.repository.check_ins.counts_for_date(today),
        )
        .await
        .map_err(|_| AppError::Timeout("per-venue count aggregation".to_string()))??;

        Ok(rank_venues(venues, &counts))
    }

    fn storage_timeout(&self) -> Duration {
        Duration::from_secs(self.config.storage_timeout_secs)
    }
}

/// Attach counts (0 when absent) and sort by count descending, venue id
/// ascending. The secondary key keeps repeated calls with identical counts
/// in identical order.
fn rank_venues(venues: Vec<Venue>, counts: &HashMap<i32, i64>) -> Vec<VenueWithCount> {
    let mut ranked: Vec<VenueWithCount> = venues
        .into_iter()
        .map(|venue| VenueWithCount {
            count_today: counts.get(&venue.id).copied().unwrap_or(0),
            venue,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.count_today
            .cmp(&a.count_today)
            .then(a.venue.id.cmp(&b.venue.id))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn venue(id: i32, name: &str) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            address: None,
            latitude: None,
            longitude: None,
            price_tier: None,
            active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn ranks_by_count_descending() {
        let venues = vec![venue(1, "Velvet"), venue(2, "Mosaic"), venue(3, "Dusk")];
        let counts = HashMap::from([(1, 3_i64), (2, 7), (3, 5)]);

        let ranked = rank_venues(venues, &counts);
        let order: Vec<i32> = ranked.iter().map(|v| v.venue.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn venues_absent_from_counts_default_to_zero() {
        let venues = vec![venue(1, "Velvet"), venue(2, "Mosaic")];
        let counts = HashMap::from([(2, 4_i64)]);

        let ranked = rank_venues(venues, &counts);
        assert_eq!(ranked[0].venue.id, 2);
        assert_eq!(ranked[1].venue.id, 1);
        assert_eq!(ranked[1].count_today, 0);
    }

    #[test]
    fn ties_break_by_venue_id_ascending() {
        let venues = vec![venue(9, "Dusk"), venue(2, "Mosaic"), venue(5, "Velvet")];
        let counts = HashMap::from([(9, 2_i64), (2, 2), (5, 2)]);

        let ranked = rank_venues(venues, &counts);
        let order: Vec<i32> = ranked.iter().map(|v| v.venue.id).collect();
        assert_eq!(order, vec![2, 5, 9]);
    }

    #[test]
    fn ranking_is_stable_across_repeated_calls() {
        let counts = HashMap::from([(1, 1_i64), (3, 6), (4, 6)]);
        let make = || vec![venue(4, "Dusk"), venue(1, "Velvet"), venue(3, "Mosaic")];

        let first: Vec<i32> = rank_venues(make(), &counts).iter().map(|v| v.venue.id).collect();
        let second: Vec<i32> = rank_venues(make(), &counts).iter().map(|v| v.venue.id).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![3, 4, 1]);
    }
}
