use crate::models::{NewStockQuote, StockQuote};
use crate::storage::connection::PgPooledConnection;
use crate::storage::error::StoreError;
use crate::storage::schema::stock_data;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;

/// Stock repository trait - defines the interface for quote operations
///
/// Upsert-by-symbol is the sole write primitive; there is no partial-field
/// update and no delete.
#[async_trait::async_trait]
pub trait StockRepository: Send + Sync {
    /// All quotes, ordered by symbol ascending. Empty is a valid result.
    async fn list_all(&self) -> Result<Vec<StockQuote>, StoreError>;

    /// Quote for an exact, pre-normalized symbol. Absence is a normal
    /// outcome, not an error.
    async fn find_by_symbol(&self, symbol: &str) -> Result<Option<StockQuote>, StoreError>;

    /// Insert the quote, or overwrite every mutable field of the existing
    /// row for its symbol. The row id survives an overwrite; the
    /// last-updated timestamp is refreshed on every write.
    async fn upsert(&self, quote: NewStockQuote) -> Result<StockQuote, StoreError>;

    /// Upsert each quote in input order, every write independent of the
    /// rest: a failure partway through leaves earlier upserts committed.
    /// Returns the number of quotes written.
    async fn batch_update_prices(&self, quotes: Vec<NewStockQuote>) -> Result<usize, StoreError>;
}

/// PostgreSQL implementation of StockRepository
pub struct PgStockRepository {
    // A connection provider rather than the pool itself, so tests and
    // callers control where connections come from
    get_conn: Arc<dyn Fn() -> Result<PgPooledConnection, StoreError> + Send + Sync>,
}

impl PgStockRepository {
    /// Create a new stock repository with a connection provider
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
impl StockRepository for PgStockRepository {
    async fn list_all(&self) -> Result<Vec<StockQuote>, StoreError> {
        let mut conn = (self.get_conn)()?;

        stock_data::table
            .order(stock_data::symbol.asc())
            .load::<StockQuote>(&mut conn)
            .map_err(StoreError::from)
    }

    async fn find_by_symbol(&self, symbol: &str) -> Result<Option<StockQuote>, StoreError> {
        let mut conn = (self.get_conn)()?;

        stock_data::table
            .filter(stock_data::symbol.eq(symbol))
            .first::<StockQuote>(&mut conn)
            .optional()
            .map_err(StoreError::from)
    }

    async fn upsert(&self, quote: NewStockQuote) -> Result<StockQuote, StoreError> {
        let mut conn = (self.get_conn)()?;

        let existing = stock_data::table
            .filter(stock_data::symbol.eq(&quote.symbol))
            .first::<StockQuote>(&mut conn)
            .optional()?;

        match existing {
            Some(_) => {
                let updated = diesel::update(stock_data::table)
                    .filter(stock_data::symbol.eq(&quote.symbol))
                    .set((&quote, stock_data::last_updated.eq(Utc::now())))
                    .get_result::<StockQuote>(&mut conn)?;

                Ok(updated)
            }
            None => {
                let inserted = diesel::insert_into(stock_data::table)
                    .values(&quote)
                    .get_result::<StockQuote>(&mut conn)?;

                Ok(inserted)
            }
        }
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
