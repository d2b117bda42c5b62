//! In-process API stand-in for native tests.

use std::net::SocketAddr;

use axum::Router;

use super::ApiService;

/// Serve `app` on an ephemeral local port and point an `ApiService` at it.
pub async fn spawn(app: Router) -> ApiService {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ApiService::with_base_url(format!("http://{addr}"))
}

/// An `ApiService` whose base refuses connections.
pub async fn unreachable() -> ApiService {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    ApiService::with_base_url(format!("http://{addr}"))
}
