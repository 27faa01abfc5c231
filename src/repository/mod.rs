//! Repository layer for database operations

pub mod check_ins;
pub mod users;
pub mod venues;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub venues: venues::VenuesRepository,
    pub check_ins: check_ins::CheckInsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            venues: venues::VenuesRepository::new(pool.clone()),
            check_ins: check_ins::CheckInsRepository::new(pool.clone()),
            pool,
        }
    }
}
