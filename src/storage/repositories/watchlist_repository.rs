use crate::models::{NewWatchlistEntry, WatchlistEntry};
use crate::storage::connection::PgPooledConnection;
use crate::storage::error::StoreError;
use crate::storage::schema::watchlist_items;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

/// Watchlist repository trait - per-user entry list maintenance
#[async_trait::async_trait]
pub trait WatchlistRepository: Send + Sync {
    /// All entries for the user. Postgres returns them by added_at
    /// ascending, the in-memory store in insertion order; both are stable
    /// across calls.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<WatchlistEntry>, StoreError>;

    /// Insert an entry unless the user already tracks the symbol.
    ///
    /// The membership check lists the user's current entries and scans for
    /// the symbol. This check-then-insert is not atomic: two racing adds
    /// for the same pair can both pass it (see DESIGN.md).
    async fn add(&self, entry: NewWatchlistEntry) -> Result<WatchlistEntry, StoreError>;

    /// Delete at most one matching entry; a no-op when none exists.
    async fn remove(&self, user_id: &str, symbol: &str) -> Result<(), StoreError>;
}

/// PostgreSQL implementation of WatchlistRepository
pub struct PgWatchlistRepository {
    get_conn: Arc<dyn Fn() -> Result<PgPooledConnection, StoreError> + Send + Sync>,
}

impl PgWatchlistRepository {
    /// Create a new watchlist repository with a connection provider
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
impl WatchlistRepository for PgWatchlistRepository {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<WatchlistEntry>, StoreError> {
        let mut conn = (self.get_conn)()?;

        watchlist_items::table
            .filter(watchlist_items::user_id.eq(user_id))
            .order(watchlist_items::added_at.asc())
            .load::<WatchlistEntry>(&mut conn)
            .map_err(StoreError::from)
    }

    async fn add(&self, entry: NewWatchlistEntry) -> Result<WatchlistEntry, StoreError> {
        let current = self.list_for_user(&entry.user_id).await?;
        if current.iter().any(|e| e.symbol == entry.symbol) {
            return Err(StoreError::DuplicateEntry(entry.symbol));
        }

        let mut conn = (self.get_conn)()?;

        diesel::insert_into(watchlist_items::table)
            .values(&entry)
            .get_result::<WatchlistEntry>(&mut conn)
            .map_err(StoreError::from)
    }

    async fn remove(&self, user_id: &str, symbol: &str) -> Result<(), StoreError> {
        let mut conn = (self.get_conn)()?;

        // Resolve the first match so that at most one row goes away even if
        // the unguarded add ever let a duplicate through
        let target = watchlist_items::table
            .filter(watchlist_items::user_id.eq(user_id))
            .filter(watchlist_items::symbol.eq(symbol))
            .order(watchlist_items::added_at.asc())
            .select(watchlist_items::id)
            .first::<Uuid>(&mut conn)
            .optional()?;

        if let Some(id) = target {
            diesel::delete(watchlist_items::table.filter(watchlist_items::id.eq(id)))
                .execute(&mut conn)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Behavior is covered against the in-memory backend in storage::memory;
    // exercising this implementation needs a live database.
    #[test]
    #[ignore]
    fn test_pg_watchlist_repository() {
        // Requires DATABASE_URL pointing at a migrated test database
    }
}
