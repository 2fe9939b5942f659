use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One quote row per ticker symbol.
///
/// `symbol` is the unique key: there is at most one live quote per symbol
/// at any time. Rows are seeded at startup, overwritten by upserts and the
/// batch refresh, and never deleted.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::storage::schema::stock_data)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub id: Uuid,

    /// Ticker symbol, uppercased at the API boundary (e.g. "AAPL")
    pub symbol: String,

    /// Company name (e.g. "Apple Inc.")
    pub name: String,

    pub price: f64,

    /// Absolute change since the previous quote
    pub change: f64,

    /// Percent change since the previous quote
    pub change_percent: f64,

    /// Shares traded, non-negative
    pub volume: i64,

    pub market_cap: Option<f64>,

    pub sector: Option<String>,

    /// Server-assigned on every write
    pub last_updated: DateTime<Utc>,
}

/// Quote payload for upserts; id and timestamp are assigned by the store.
#[derive(Debug, Clone, Insertable, AsChangeset, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::storage::schema::stock_data)]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct NewStockQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: i64,
    pub market_cap: Option<f64>,
    pub sector: Option<String>,
}

impl NewStockQuote {
    /// Create a new quote builder
    pub fn new(
        symbol: String,
        name: String,
        price: f64,
        change: f64,
        change_percent: f64,
        volume: i64,
    ) -> Self {
        Self {
            symbol,
            name,
            price,
            change,
            change_percent,
            volume,
            market_cap: None,
            sector: None,
        }
    }

    /// Set market capitalization
    pub fn with_market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    /// Set sector label
    pub fn with_sector(mut self, sector: String) -> Self {
        self.sector = Some(sector);
        self
    }
}
