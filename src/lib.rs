//! Nightspot check-in server
//!
//! A REST JSON API for nightlife check-ins: each user may check in to one
//! venue per calendar day, and venues are ranked live by today's check-in
//! count.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
