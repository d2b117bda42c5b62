//! Static host for the built client.
//!
//! Files under `dist` are served as-is. Any other path falls back to
//! `index.html` so deep links like `/product/42` reach the client router.
//! `/api/*` is left to the backend and answers 404 here.

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::any;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub fn router(dist: &Path) -> Router {
    let index = ServeFile::new(dist.join("index.html"));
    let client = ServeDir::new(dist).fallback(index);

    Router::new()
        .route("/api", any(api_not_served))
        .route("/api/{*rest}", any(api_not_served))
        .fallback_service(client)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn api_not_served() -> (StatusCode, &'static str) {
    (
        StatusCode::NOT_FOUND,
        "The storefront host does not serve the API",
    )
}
