use std::sync::Arc;
use stock_dashboard_api::api::AppState;
use stock_dashboard_api::config::Config;
use stock_dashboard_api::market_data::{self, SyntheticQuoteFeed};
use stock_dashboard_api::storage::repositories::{
    PgStockRepository, PgUserRepository, PgWatchlistRepository, StockRepository, UserRepository,
    WatchlistRepository,
};
use stock_dashboard_api::storage::{
    establish_connection_pool, MemoryStockRepository, MemoryUserRepository,
    MemoryWatchlistRepository,
};
use stock_dashboard_api::create_router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stock_dashboard_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // Select the store backend and wire up repositories
    let state = build_state(&config);

    // Seed the fixed reference quotes through the ordinary upsert path
    match state
        .stocks
        .batch_update_prices(market_data::reference_quotes())
        .await
    {
        Ok(count) => tracing::info!("✅ Seeded {} reference quotes", count),
        Err(e) => tracing::error!("❌ Failed to seed reference quotes: {}", e),
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await.unwrap();

    tracing::info!("🚀 Stock Dashboard API running on http://{}", config.bind_addr);
    tracing::info!("📊 Quotes: http://{}/api/stocks", config.bind_addr);
    tracing::info!("📚 Swagger UI: http://{}/swagger-ui", config.bind_addr);

    axum::serve(listener, app).await.unwrap();
}

/// Construct repositories for the configured backend
///
/// `DATABASE_URL` set: PostgreSQL with embedded migrations applied at
/// startup. Unset (or pool setup failure): the process-local store, so the
/// dashboard still comes up for demos and development.
fn build_state(config: &Config) -> AppState {
    let quote_feed = Arc::new(SyntheticQuoteFeed::new());

    let Some(database_url) = &config.database_url else {
        tracing::info!("🗄️  DATABASE_URL not set, using the in-memory store");
        return memory_state(quote_feed);
    };

    match establish_connection_pool(database_url, config.pool_size) {
        Ok(db) => {
            tracing::info!("✅ PostgreSQL store selected");

            let db_clone = db.clone();
            let stocks = Arc::new(PgStockRepository::new(move || db_clone.get_conn()))
                as Arc<dyn StockRepository>;

            let db_clone = db.clone();
            let watchlist = Arc::new(PgWatchlistRepository::new(move || db_clone.get_conn()))
                as Arc<dyn WatchlistRepository>;

            let users =
                Arc::new(PgUserRepository::new(move || db.get_conn())) as Arc<dyn UserRepository>;

            AppState {
                stocks,
                watchlist,
                users,
                quote_feed,
            }
        }
        Err(e) => {
            tracing::error!("❌ Failed to initialize PostgreSQL store: {}", e);
            tracing::warn!("⚠️  Falling back to the in-memory store");
            memory_state(quote_feed)
        }
    }
}

fn memory_state(quote_feed: Arc<SyntheticQuoteFeed>) -> AppState {
    AppState {
        stocks: Arc::new(MemoryStockRepository::new()),
        watchlist: Arc::new(MemoryWatchlistRepository::new()),
        users: Arc::new(MemoryUserRepository::new()),
        quote_feed,
    }
}
