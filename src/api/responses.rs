use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to add a symbol to the caller's watchlist
///
/// Fields are optional at the wire level so missing ones surface as a 400
/// with a useful message rather than a deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddWatchlistRequest {
    #[schema(example = "AAPL")]
    pub symbol: Option<String>,
    #[schema(example = "Apple Inc.")]
    pub name: Option<String>,
    #[schema(example = "Technology")]
    pub sector: Option<String>,
}

/// Confirmation message for operations without a record to return
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
