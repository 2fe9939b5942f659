use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

use crate::market_data::{self, SyntheticQuoteFeed};
use crate::models::{MarketIndex, NewWatchlistEntry, StockQuote, UpsertUser, User, WatchlistEntry};
use crate::storage::repositories::{StockRepository, UserRepository, WatchlistRepository};
use crate::storage::StoreError;

use super::auth::AuthUser;
use super::responses::*;

/// Shared application state
///
/// Repositories are trait objects so either store backend plugs in; the
/// synthetic feed sits beside them where a real vendor client would.
#[derive(Clone)]
pub struct AppState {
    pub stocks: Arc<dyn StockRepository>,
    pub watchlist: Arc<dyn WatchlistRepository>,
    pub users: Arc<dyn UserRepository>,
    pub quote_feed: Arc<SyntheticQuoteFeed>,
}

/// Errors surfaced by the API layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Point lookup missed - 404
    #[error("{0} not found")]
    NotFound(String),

    /// Required request field missing or blank - 400
    #[error("{0}")]
    Validation(String),

    /// No authenticated identity on a protected route - 401
    #[error("Unauthorized")]
    Unauthorized,

    /// Store-level failure; DuplicateEntry maps to 409, the rest to a
    /// generic 500
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Store(StoreError::DuplicateEntry(_)) => {
                (StatusCode::CONFLICT, self.to_string())
            }
            ApiError::Store(err) => {
                // Storage details stay in the log, never in the body
                tracing::error!("store failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal storage error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

// ============================================================================
// Stock Endpoints
// ============================================================================

/// Get all stock quotes, ordered by symbol
#[utoipa::path(
    get,
    path = "/api/stocks",
    tag = "Stocks",
    responses(
        (status = 200, description = "List of all quotes", body = Vec<StockQuote>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_stocks(State(state): State<AppState>) -> Result<Json<Vec<StockQuote>>, ApiError> {
    let stocks = state.stocks.list_all().await?;
    Ok(Json(stocks))
}

/// Get one stock quote by symbol
#[utoipa::path(
    get,
    path = "/api/stocks/{symbol}",
    tag = "Stocks",
    params(
        ("symbol" = String, Path, description = "Ticker symbol, any case")
    ),
    responses(
        (status = 200, description = "Quote for the symbol", body = StockQuote),
        (status = 404, description = "Unknown symbol", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_stock_by_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<StockQuote>, ApiError> {
    let symbol = symbol.to_uppercase();

    state
        .stocks
        .find_by_symbol(&symbol)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Stock {}", symbol)))
}

/// Re-fabricate every quote through the synthetic feed
#[utoipa::path(
    post,
    path = "/api/stocks/refresh",
    tag = "Stocks",
    responses(
        (status = 200, description = "The full refreshed list", body = Vec<StockQuote>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn refresh_stocks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StockQuote>>, ApiError> {
    let current = state.stocks.list_all().await?;
    let next = state.quote_feed.next_quotes(&current);

    let count = state.stocks.batch_update_prices(next).await?;
    tracing::debug!("refreshed {} quotes", count);

    let refreshed = state.stocks.list_all().await?;
    Ok(Json(refreshed))
}

// ============================================================================
// Watchlist Endpoints
// ============================================================================

/// Get the authenticated user's watchlist
#[utoipa::path(
    get,
    path = "/api/watchlist",
    tag = "Watchlist",
    responses(
        (status = 200, description = "The user's entries", body = Vec<WatchlistEntry>),
        (status = 401, description = "No authenticated identity", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_watchlist(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<WatchlistEntry>>, ApiError> {
    let entries = state.watchlist.list_for_user(&user.id).await?;
    Ok(Json(entries))
}

/// Add a symbol to the authenticated user's watchlist
#[utoipa::path(
    post,
    path = "/api/watchlist",
    tag = "Watchlist",
    request_body = AddWatchlistRequest,
    responses(
        (status = 200, description = "The new entry", body = WatchlistEntry),
        (status = 400, description = "Symbol or name missing", body = ErrorResponse),
        (status = 401, description = "No authenticated identity", body = ErrorResponse),
        (status = 409, description = "Symbol already on the watchlist", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn add_to_watchlist(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<AddWatchlistRequest>,
) -> Result<Json<WatchlistEntry>, ApiError> {
    let symbol = request
        .symbol
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    let name = request.name.as_deref().map(str::trim).unwrap_or_default();

    if symbol.is_empty() || name.is_empty() {
        return Err(ApiError::Validation(
            "Symbol and name are required".to_string(),
        ));
    }

    let entry = state
        .watchlist
        .add(NewWatchlistEntry {
            user_id: user.id,
            symbol: symbol.to_uppercase(),
            name: name.to_string(),
            sector: request.sector,
        })
        .await?;

    Ok(Json(entry))
}

/// Remove a symbol from the authenticated user's watchlist
///
/// Succeeds silently when the symbol was not on the list.
#[utoipa::path(
    delete,
    path = "/api/watchlist/{symbol}",
    tag = "Watchlist",
    params(
        ("symbol" = String, Path, description = "Ticker symbol, any case")
    ),
    responses(
        (status = 200, description = "Confirmation message", body = MessageResponse),
        (status = 401, description = "No authenticated identity", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn remove_from_watchlist(
    State(state): State<AppState>,
    user: AuthUser,
    Path(symbol): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .watchlist
        .remove(&user.id, &symbol.to_uppercase())
        .await?;

    Ok(Json(MessageResponse {
        message: "Removed from watchlist".to_string(),
    }))
}

// ============================================================================
// Market & Auth Endpoints
// ============================================================================

/// Get the mock market index rows
#[utoipa::path(
    get,
    path = "/api/market-indices",
    tag = "Market",
    responses(
        (status = 200, description = "Fixed index list", body = Vec<MarketIndex>)
    )
)]
pub async fn get_market_indices() -> Json<Vec<MarketIndex>> {
    Json(market_data::market_indices())
}

/// Get (and refresh) the authenticated user's profile record
///
/// Upserts the forwarded identity claims so the user row exists before any
/// watchlist write references it.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = "Auth",
    responses(
        (status = 200, description = "The stored user record", body = User),
        (status = 401, description = "No authenticated identity", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_auth_user(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<User>, ApiError> {
    let record = state
        .users
        .upsert(UpsertUser {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            avatar_url: user.avatar_url,
        })
        .await?;

    Ok(Json(record))
}
