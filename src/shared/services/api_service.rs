use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::models::{Credentials, Product, User};
use crate::shared::errors::FetchError;

/// Status, status text and body of a finished HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Turn a raw response into `T`, mapping non-2xx statuses to `FetchError::Status`.
pub fn decode_response<T: DeserializeOwned>(raw: RawResponse) -> Result<T, FetchError> {
    if !raw.is_success() {
        return Err(FetchError::Status {
            status: raw.status,
            status_text: raw.status_text,
        });
    }
    serde_json::from_str(&raw.body).map_err(|e| FetchError::Decode(e.to_string()))
}

// API Service for centralized HTTP requests
#[derive(Debug, Clone, PartialEq)]
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join `endpoint` onto the base URL. An empty base keeps the path
    /// origin-relative.
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    // Generic GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let raw = transport::get(&self.url(endpoint)).await?;
        decode_response(raw)
    }

    // Generic POST request
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, FetchError> {
        let body = serde_json::to_string(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        let raw = transport::post(&self.url(endpoint), body).await?;
        decode_response(raw)
    }

    // POST with no meaningful response body
    pub async fn post_empty(&self, endpoint: &str) -> Result<(), FetchError> {
        let raw = transport::post(&self.url(endpoint), String::new()).await?;
        if !raw.is_success() {
            return Err(FetchError::Status {
                status: raw.status,
                status_text: raw.status_text,
            });
        }
        Ok(())
    }

    // Specific API methods
    pub async fn get_products(&self) -> Result<Vec<Product>, FetchError> {
        self.get("/api/products").await
    }

    /// Current session user, `None` when the backend answers 401.
    pub async fn current_user(&self) -> Result<Option<User>, FetchError> {
        match self.get::<User>("/api/user").await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, FetchError> {
        self.post("/api/login", credentials).await
    }

    pub async fn logout(&self) -> Result<(), FetchError> {
        self.post_empty("/api/logout").await
    }
}

// Browser transport (fetch via gloo-net)
#[cfg(target_arch = "wasm32")]
mod transport {
    use gloo_net::http::{Request, Response};

    use super::RawResponse;
    use crate::shared::errors::FetchError;

    async fn collect(response: Response) -> Result<RawResponse, FetchError> {
        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(RawResponse {
            status,
            status_text,
            body,
        })
    }

    pub async fn get(url: &str) -> Result<RawResponse, FetchError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        collect(response).await
    }

    pub async fn post(url: &str, body: String) -> Result<RawResponse, FetchError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| FetchError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        collect(response).await
    }
}

// Native transport (reqwest, desktop builds)
#[cfg(not(target_arch = "wasm32"))]
mod transport {
    use super::RawResponse;
    use crate::shared::errors::FetchError;

    async fn collect(response: reqwest::Response) -> Result<RawResponse, FetchError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }

    pub async fn get(url: &str) -> Result<RawResponse, FetchError> {
        let response = reqwest::Client::new()
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        collect(response).await
    }

    pub async fn post(url: &str, body: String) -> Result<RawResponse, FetchError> {
        let response = reqwest::Client::new()
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        collect(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: "Status".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_url_join() {
        let same_origin = ApiService::with_base_url("");
        assert_eq!(same_origin.url("/api/products"), "/api/products");

        let remote = ApiService::with_base_url("https://shop.example/");
        assert_eq!(remote.url("/api/products"), "https://shop.example/api/products");
        assert_eq!(remote.url("api/user"), "https://shop.example/api/user");
    }

    #[test]
    fn test_decode_product_list() {
        let products: Vec<Product> = decode_response(raw(
            200,
            r#"[{"id": 2, "name": "Rattan Bench", "price": 12345}]"#,
        ))
        .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 2);
    }

    #[test]
    fn test_decode_empty_list() {
        let products: Vec<Product> = decode_response(raw(200, "[]")).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_decode_status_error() {
        let err = decode_response::<Vec<Product>>(raw(500, "oops")).unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                status: 500,
                status_text: "Status".to_string()
            }
        );
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode_response::<Vec<Product>>(raw(200, "<html>")).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod http {
        use axum::http::StatusCode;
        use axum::response::{IntoResponse, Response};
        use axum::routing::{get, post};
        use axum::{Json, Router};

        use super::super::*;
        use crate::shared::services::test_server;

        const MARINA: &str = r#"{"id": 3, "username": "marina", "isAdmin": true}"#;

        async fn login(Json(body): Json<serde_json::Value>) -> Response {
            if body["username"] == "marina" && body["password"] == "secret" {
                (StatusCode::OK, MARINA).into_response()
            } else {
                StatusCode::UNAUTHORIZED.into_response()
            }
        }

        #[tokio::test]
        async fn test_current_user_signed_in() {
            let api = test_server::spawn(
                Router::new().route("/api/user", get(|| async { (StatusCode::OK, MARINA) })),
            )
            .await;

            let user = api.current_user().await.unwrap().unwrap();
            assert_eq!(user.username, "marina");
            assert!(user.is_admin);
        }

        #[tokio::test]
        async fn test_current_user_unauthorized_is_none() {
            let api = test_server::spawn(
                Router::new().route("/api/user", get(|| async { StatusCode::UNAUTHORIZED })),
            )
            .await;

            assert_eq!(api.current_user().await, Ok(None));
        }

        #[tokio::test]
        async fn test_current_user_server_error() {
            let api = test_server::spawn(Router::new().route(
                "/api/user",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            ))
            .await;

            let err = api.current_user().await.unwrap_err();
            assert!(matches!(err, FetchError::Status { status: 500, .. }));
        }

        #[tokio::test]
        async fn test_login_sends_credentials() {
            let api = test_server::spawn(Router::new().route("/api/login", post(login))).await;

            let ok = Credentials {
                username: "marina".to_string(),
                password: "secret".to_string(),
            };
            assert_eq!(api.login(&ok).await.unwrap().id, 3);

            let wrong = Credentials {
                username: "marina".to_string(),
                password: "nope".to_string(),
            };
            assert!(api.login(&wrong).await.unwrap_err().is_unauthorized());
        }

        #[tokio::test]
        async fn test_products_keep_server_order() {
            let api = test_server::spawn(Router::new().route(
                "/api/products",
                get(|| async {
                    (
                        StatusCode::OK,
                        r#"[{"id": 9, "name": "Lamp", "price": 100},
                            {"id": 2, "name": "Bench", "price": 12345}]"#,
                    )
                }),
            ))
            .await;

            let ids: Vec<i64> = api.get_products().await.unwrap().iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![9, 2]);
        }

        #[tokio::test]
        async fn test_unreachable_host_is_network_error() {
            let api = test_server::unreachable().await;

            let err = api.get_products().await.unwrap_err();
            assert!(matches!(err, FetchError::Network(_)));
        }
    }
}
