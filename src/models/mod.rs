//! Data models for Nightspot

pub mod check_in;
pub mod user;
pub mod venue;

// Re-export commonly used types
pub use check_in::CheckIn;
pub use user::{User, UserClaims};
pub use venue::{Venue, VenueWithCount};
