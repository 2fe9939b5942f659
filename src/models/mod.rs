pub mod market_index;
pub mod stock;
pub mod user;
pub mod watchlist;

pub use market_index::MarketIndex;
pub use stock::{NewStockQuote, StockQuote};
pub use user::{UpsertUser, User};
pub use watchlist::{NewWatchlistEntry, WatchlistEntry};
