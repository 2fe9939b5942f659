use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::*;
use super::openapi::ApiDoc;

/// Create the API router with Swagger UI
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        // Stock endpoints
        .route("/api/stocks", get(get_stocks))
        .route("/api/stocks/refresh", post(refresh_stocks))
        .route("/api/stocks/:symbol", get(get_stock_by_symbol))
        // Watchlist endpoints
        .route("/api/watchlist", get(get_watchlist).post(add_to_watchlist))
        .route("/api/watchlist/:symbol", delete(remove_from_watchlist))
        // Market & auth endpoints
        .route("/api/market-indices", get(get_market_indices))
        .route("/api/auth/user", get(get_auth_user))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::{self, SyntheticQuoteFeed};
    use crate::storage::repositories::StockRepository;
    use crate::storage::{MemoryStockRepository, MemoryUserRepository, MemoryWatchlistRepository};
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let stocks = Arc::new(MemoryStockRepository::new());
        stocks
            .batch_update_prices(market_data::reference_quotes())
            .await
            .unwrap();

        create_router(AppState {
            stocks,
            watchlist: Arc::new(MemoryWatchlistRepository::new()),
            users: Arc::new(MemoryUserRepository::new()),
            quote_feed: Arc::new(SyntheticQuoteFeed::new()),
        })
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn user_request(method: Method, uri: &str, body: Option<&str>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-user-id", "user-1")
            .header(header::CONTENT_TYPE, "application/json");

        match body {
            Some(json) => builder.body(Body::from(json.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_stocks_listed_sorted_by_symbol() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/api/stocks")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let symbols: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["symbol"].as_str().unwrap())
            .collect();

        assert_eq!(symbols.len(), 10);
        let mut sorted = symbols.clone();
        sorted.sort_unstable();
        assert_eq!(symbols, sorted);
    }

    #[tokio::test]
    async fn test_symbol_lookup_uppercases_at_the_boundary() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/api/stocks/aapl")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["symbol"], "AAPL");
        assert_eq!(json["price"], 189.84);
    }

    #[tokio::test]
    async fn test_unknown_symbol_is_404() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/api/stocks/ZZZZ")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_refresh_returns_the_full_list() {
        let app = test_app().await;

        let response = app
            .oneshot(user_request(Method::POST, "/api/stocks/refresh", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_watchlist_requires_identity() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(get_request("/api/watchlist"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/api/watchlist/AAPL")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_add_requires_symbol_and_name() {
        let app = test_app().await;

        let response = app
            .oneshot(user_request(
                Method::POST,
                "/api/watchlist",
                Some(r#"{"symbol":"MSFT"}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Symbol and name are required");
    }

    #[tokio::test]
    async fn test_watchlist_round_trip() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(user_request(
                Method::POST,
                "/api/watchlist",
                Some(r#"{"symbol":"msft","name":"Microsoft Corp.","sector":"Technology"}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let added = body_json(response).await;
        assert_eq!(added["symbol"], "MSFT");
        assert_eq!(added["userId"], "user-1");
        assert!(added["id"].is_string());

        let response = app
            .clone()
            .oneshot(user_request(Method::GET, "/api/watchlist", None))
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let response = app
            .clone()
            .oneshot(user_request(Method::DELETE, "/api/watchlist/MSFT", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(user_request(Method::GET, "/api/watchlist", None))
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_add_is_a_409() {
        let app = test_app().await;
        let body = r#"{"symbol":"AAPL","name":"Apple Inc."}"#;

        let response = app
            .clone()
            .oneshot(user_request(Method::POST, "/api/watchlist", Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(user_request(Method::POST, "/api/watchlist", Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = app
            .oneshot(user_request(Method::GET, "/api/watchlist", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_absent_symbol_succeeds_silently() {
        let app = test_app().await;

        let response = app
            .oneshot(user_request(Method::DELETE, "/api/watchlist/NFLX", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Removed from watchlist");
    }

    #[tokio::test]
    async fn test_market_indices_are_served() {
        let app = test_app().await;

        let response = app
            .oneshot(get_request("/api/market-indices"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 4);
        assert_eq!(json[0]["name"], "S&P 500");
    }

    #[tokio::test]
    async fn test_auth_user_upserts_forwarded_claims() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/user")
                    .header("x-user-id", "user-1")
                    .header("x-user-email", "u1@example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["id"], "user-1");
        assert_eq!(json["email"], "u1@example.com");
    }
}
