//! Business logic services

pub mod auth;
pub mod check_ins;
pub mod events;
pub mod venues;

use crate::{
    config::{AuthConfig, CheckInConfig},
    error::AppResult,
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub check_ins: check_ins::CheckInsService,
    pub venues: venues::VenuesService,
    /// In-process side channel carrying successful check-ins to downstream
    /// consumers (activity feed). Notification-only.
    pub activity: events::ActivityPublisher,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        checkin_config: CheckInConfig,
    ) -> AppResult<Self> {
        let activity = events::ActivityPublisher::new(256);

        Ok(Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            check_ins: check_ins::CheckInsService::new(
                repository.clone(),
                checkin_config.clone(),
                activity.clone(),
            )?,
            venues: venues::VenuesService::new(repository, checkin_config)?,
            activity,
        })
    }
}
