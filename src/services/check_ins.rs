//! Check-in issuance service
//!
//! Validates the venue, computes the canonical local-date bucket server-side
//! and appends to the ledger. The uniqueness decision is delegated entirely
//! to the storage constraint; the resulting conflict comes back as the
//! expected `AlreadyIssuedToday` outcome, never as a swallowed error.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use tokio::time::timeout;

use crate::{
    config::CheckInConfig,
    error::{AppError, AppResult},
    models::check_in::{CheckIn, NewCheckIn},
    repository::{check_ins::AppendOutcome, Repository},
    services::events::{ActivityPublisher, CheckInActivity},
};

/// Outcome of an issuance attempt. `AlreadyIssuedToday` is a normal business
/// outcome: for idempotent retry handling it is success-equivalent.
#[derive(Debug)]
pub enum IssueOutcome {
    Issued(CheckIn),
    AlreadyIssuedToday,
}

#[derive(Clone)]
pub struct CheckInsService {
    repository: Repository,
    config: CheckInConfig,
    offset: FixedOffset,
    activity: ActivityPublisher,
}

impl CheckInsService {
    pub fn new(
        repository: Repository,
        config: CheckInConfig,
        activity: ActivityPublisher,
    ) -> AppResult<Self> {
        let offset = canonical_offset(&config)?;
        Ok(Self {
            repository,
            config,
            offset,
            activity,
        })
    }

    /// Issue a check-in for the authenticated user at the given venue.
    ///
    /// Exactly one row is appended on `Issued`; zero rows on every other
    /// path. Two racing calls for the same user and day resolve to one
    /// `Issued` and one `AlreadyIssuedToday`.
    pub async fn issue(&self, user_id: i32, venue_id: i32) -> AppResult<IssueOutcome> {
        let venue = self
            .repository
            .venues
            .get_active(venue_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Venue with id {} not found or inactive", venue_id))
            })?;

        let now = Utc::now();
        let new = NewCheckIn::new(user_id, venue.id, local_date(now, self.offset), now);

        let outcome = timeout(self.storage_timeout(), self.repository.check_ins.append(&new))
            .await
            .map_err(|_| AppError::Timeout("check-in append".to_string()))??;

        match outcome {
            AppendOutcome::Appended(check_in) => {
                tracing::info!(
                    user_id,
                    venue_id = venue.id,
                    date = %check_in.check_in_date,
                    "check-in issued"
                );
                self.activity.publish(CheckInActivity {
                    user_id,
                    venue_id: venue.id,
                    venue_name: venue.name,
                    issued_at: check_in.issued_at,
                });
                Ok(IssueOutcome::Issued(check_in))
            }
            AppendOutcome::DuplicateDay => {
                tracing::debug!(user_id, venue_id, "check-in rejected: already issued today");
                Ok(IssueOutcome::AlreadyIssuedToday)
            }
        }
    }

    /// Check-in history for a user, newest first
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<CheckIn>> {
        self.repository.check_ins.list_for_user(user_id).await
    }

    fn storage_timeout(&self) -> Duration {
        Duration::from_secs(self.config.storage_timeout_secs)
    }
}

/// Resolve the configured canonical civil timezone
pub(crate) fn canonical_offset(config: &CheckInConfig) -> AppResult<FixedOffset> {
    FixedOffset::east_opt(config.utc_offset_minutes * 60).ok_or_else(|| {
        AppError::Internal(format!(
            "Invalid canonical UTC offset: {} minutes",
            config.utc_offset_minutes
        ))
    })
}

/// Project an instant into the canonical civil timezone and take its
/// calendar date. Used by both issuance and aggregation so the bucket can
/// never disagree across a midnight boundary.
pub(crate) fn local_date(now: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&offset).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn offset(minutes: i32) -> FixedOffset {
        FixedOffset::east_opt(minutes * 60).unwrap()
    }

    #[test]
    fn local_date_matches_utc_at_midday() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(
            local_date(now, offset(-300)),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
    }

    #[test]
    fn late_utc_evening_is_still_the_same_local_day_west_of_greenwich() {
        // 03:30 UTC on the 16th is 22:30 on the 15th at UTC-5
        let now = Utc.with_ymd_and_hms(2024, 6, 16, 3, 30, 0).unwrap();
        assert_eq!(
            local_date(now, offset(-300)),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
    }

    #[test]
    fn local_midnight_rolls_the_bucket() {
        let before = Utc.with_ymd_and_hms(2024, 6, 16, 4, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 6, 16, 5, 0, 0).unwrap();

        assert_eq!(
            local_date(before, offset(-300)),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert_eq!(
            local_date(after, offset(-300)),
            NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()
        );
    }

    #[test]
    fn eastern_offsets_roll_forward() {
        // 23:30 UTC on the 15th is already the 16th at UTC+2
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 23, 30, 0).unwrap();
        assert_eq!(
            local_date(now, offset(120)),
            NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()
        );
    }

    #[test]
    fn canonical_offset_rejects_out_of_range_values() {
        let config = CheckInConfig {
            utc_offset_minutes: 24 * 60,
            storage_timeout_secs: 5,
        };
        assert!(canonical_offset(&config).is_err());
    }
}
