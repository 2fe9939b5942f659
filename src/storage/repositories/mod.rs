/// Repository traits and their PostgreSQL implementations
///
/// Each repository covers one record kind behind a focused trait; handlers
/// depend on `Arc<dyn Trait>`, never on a concrete backend. The in-memory
/// implementations live in `storage::memory`.
pub mod stock_repository;
pub mod user_repository;
pub mod watchlist_repository;

pub use stock_repository::{PgStockRepository, StockRepository};
pub use user_repository::{PgUserRepository, UserRepository};
pub use watchlist_repository::{PgWatchlistRepository, WatchlistRepository};
