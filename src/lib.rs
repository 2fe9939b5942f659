// Library Crate Root
// lib.rs

pub mod api;
pub mod config;
pub mod market_data;
pub mod models;
pub mod storage;

// Re-export at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use market_data::SyntheticQuoteFeed;
pub use models::{MarketIndex, StockQuote, User, WatchlistEntry};
pub use storage::StoreError;
