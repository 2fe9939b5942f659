use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::responses::*;
use crate::models::{MarketIndex, NewStockQuote, StockQuote, User, WatchlistEntry};

/// OpenAPI specification
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock Dashboard API",
        version = "1.0.0",
        description = "Equity dashboard backend: stock quotes, per-user watchlists and synthetic chart data over a pluggable store",
        license(
            name = "MIT"
        )
    ),
    paths(
        handlers::health_check,
        handlers::get_stocks,
        handlers::get_stock_by_symbol,
        handlers::refresh_stocks,
        handlers::get_watchlist,
        handlers::add_to_watchlist,
        handlers::remove_from_watchlist,
        handlers::get_market_indices,
        handlers::get_auth_user,
    ),
    components(
        schemas(
            StockQuote,
            NewStockQuote,
            WatchlistEntry,
            User,
            MarketIndex,
            AddWatchlistRequest,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Stocks", description = "Stock quote endpoints"),
        (name = "Watchlist", description = "Per-user watchlist endpoints"),
        (name = "Market", description = "Aggregate market data endpoints"),
        (name = "Auth", description = "Authenticated identity endpoints"),
    )
)]
pub struct ApiDoc;
