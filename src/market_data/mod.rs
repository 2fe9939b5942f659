/// Market data module
///
/// Everything fabricated stands together here: the fixed reference universe
/// seeded at startup, the mock index rows, and the random-walk quote feed
/// behind the refresh endpoint.
pub mod reference;
pub mod synthetic;

pub use reference::{market_indices, reference_quotes};
pub use synthetic::SyntheticQuoteFeed;
