use crate::models::{UpsertUser, User};
use crate::storage::connection::PgPooledConnection;
use crate::storage::error::StoreError;
use crate::storage::schema::users;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;

/// User repository trait - identity records maintained by the auth layer
///
/// Users are created or refreshed through the idempotent upsert on login
/// and never deleted here.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their provider-issued id
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Insert the user, or overwrite the profile fields of the existing
    /// row, refreshing updated_at
    async fn upsert(&self, user: UpsertUser) -> Result<User, StoreError>;
}

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    get_conn: Arc<dyn Fn() -> Result<PgPooledConnection, StoreError> + Send + Sync>,
}

impl PgUserRepository {
    /// Create a new user repository with a connection provider
    pub fn new<F>(get_conn: F) -> Self
    where
        F: Fn() -> Result<PgPooledConnection, StoreError> + Send + Sync + 'static,
    {
        Self {
            get_conn: Arc::new(get_conn),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let mut conn = (self.get_conn)()?;

        users::table
            .filter(users::id.eq(id))
            .first::<User>(&mut conn)
            .optional()
            .map_err(StoreError::from)
    }

    async fn upsert(&self, user: UpsertUser) -> Result<User, StoreError> {
        let mut conn = (self.get_conn)()?;

        diesel::insert_into(users::table)
            .values(&user)
            .on_conflict(users::id)
            .do_update()
            .set((&user, users::updated_at.eq(Utc::now())))
            .get_result::<User>(&mut conn)
            .map_err(StoreError::from)
    }
}

#[cfg(test)]
mod tests {
    // Behavior is covered against the in-memory backend in storage::memory;
    // exercising this implementation needs a live database.
    #[test]
    #[ignore]
    fn test_pg_user_repository() {
        // Requires DATABASE_URL pointing at a migrated test database
    }
}
