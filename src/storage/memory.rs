//! Process-local entity store
//!
//! In-memory implementations of the same repository traits the Postgres
//! backend fulfills, so the two are interchangeable at startup. Used when
//! no `DATABASE_URL` is configured, and by tests that want an isolated
//! store per case.

use crate::models::{NewStockQuote, NewWatchlistEntry, StockQuote, UpsertUser, User, WatchlistEntry};
use crate::storage::error::StoreError;
use crate::storage::repositories::{StockRepository, UserRepository, WatchlistRepository};
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Symbol-keyed quote map
#[derive(Default)]
pub struct MemoryStockRepository {
    stocks: DashMap<String, StockQuote>,
}

impl MemoryStockRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StockRepository for MemoryStockRepository {
    async fn list_all(&self) -> Result<Vec<StockQuote>, StoreError> {
        let mut quotes: Vec<StockQuote> = self.stocks.iter().map(|e| e.value().clone()).collect();
        quotes.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Ok(quotes)
    }

    async fn find_by_symbol(&self, symbol: &str) -> Result<Option<StockQuote>, StoreError> {
        Ok(self.stocks.get(symbol).map(|e| e.value().clone()))
    }

    async fn upsert(&self, quote: NewStockQuote) -> Result<StockQuote, StoreError> {
        // The row id survives an overwrite
        let id = self
            .stocks
            .get(&quote.symbol)
            .map(|e| e.id)
            .unwrap_or_else(Uuid::new_v4);

        let record = StockQuote {
            id,
            symbol: quote.symbol,
            name: quote.name,
            price: quote.price,
            change: quote.change,
            change_percent: quote.change_percent,
            volume: quote.volume,
            market_cap: quote.market_cap,
            sector: quote.sector,
            last_updated: Utc::now(),
        };

        self.stocks.insert(record.symbol.clone(), record.clone());
        Ok(record)
    }

    async fn batch_update_prices(&self, quotes: Vec<NewStockQuote>) -> Result<usize, StoreError> {
        let mut count = 0;

        for quote in quotes {
            self.upsert(quote).await?;
            count += 1;
        }

        Ok(count)
    }
}

/// Insertion-ordered watchlist entries
///
/// The check-then-insert in `add` is not atomic across racing requests for
/// the same (user, symbol) pair; nothing here closes that race.
#[derive(Default)]
pub struct MemoryWatchlistRepository {
    entries: RwLock<Vec<WatchlistEntry>>,
}

impl MemoryWatchlistRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl WatchlistRepository for MemoryWatchlistRepository {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<WatchlistEntry>, StoreError> {
        Ok(self
            .entries
            .read()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn add(&self, entry: NewWatchlistEntry) -> Result<WatchlistEntry, StoreError> {
        let current = self.list_for_user(&entry.user_id).await?;
        if current.iter().any(|e| e.symbol == entry.symbol) {
            return Err(StoreError::DuplicateEntry(entry.symbol));
        }

        let record = WatchlistEntry {
            id: Uuid::new_v4(),
            user_id: entry.user_id,
            symbol: entry.symbol,
            name: entry.name,
            sector: entry.sector,
            added_at: Utc::now(),
        };

        self.entries.write().push(record.clone());
        Ok(record)
    }

    async fn remove(&self, user_id: &str, symbol: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write();

        // First match only, mirroring the relational backend
        if let Some(pos) = entries
            .iter()
            .position(|e| e.user_id == user_id && e.symbol == symbol)
        {
            entries.remove(pos);
        }

        Ok(())
    }
}

/// Id-keyed user map
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().get(id).cloned())
    }

    async fn upsert(&self, user: UpsertUser) -> Result<User, StoreError> {
        let mut users = self.users.write();
        let now = Utc::now();

        let record = match users.get(&user.id) {
            Some(existing) => User {
                email: user.email,
                display_name: user.display_name,
                avatar_url: user.avatar_url,
                updated_at: now,
                ..existing.clone()
            },
            None => User {
                id: user.id,
                email: user.email,
                display_name: user.display_name,
                avatar_url: user.avatar_url,
                created_at: now,
                updated_at: now,
            },
        };

        users.insert(record.id.clone(), record.clone());
        Ok(record)
    }
}
