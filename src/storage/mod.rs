/// Entity store: three record kinds behind uniform repository traits
///
/// Two interchangeable backends selected once at startup:
/// - PostgreSQL through Diesel and an r2d2 connection pool
/// - a process-local in-memory store
pub mod connection;
pub mod error;
pub mod memory;
pub mod repositories;
pub mod schema;

pub use connection::{establish_connection_pool, Database};
pub use error::StoreError;
pub use memory::{MemoryStockRepository, MemoryUserRepository, MemoryWatchlistRepository};
