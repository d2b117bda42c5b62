//! Session state shared through context.
//!
//! Lifecycle: `AuthProvider` creates one `AuthContext` on app start and runs
//! `resolve()`; `sign_in` / `sign_out` are the only other transitions.

use dioxus::prelude::*;

use crate::domain::models::{Credentials, User};
use crate::shared::errors::AuthError;
use crate::shared::logging::{
    log_auth_resolution_failed, log_auth_resolved, log_sign_in, log_sign_out,
};
use crate::shared::services::ApiService;

/// Where the session stands. `Resolving` is distinct from `Anonymous` so
/// guards can wait instead of redirecting.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Resolving,
    Anonymous,
    SignedIn(User),
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin)
    }
}

impl Credentials {
    /// Trim the username and reject empty fields before any request is made.
    pub fn new(username: &str, password: &str) -> Result<Self, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Clone, PartialEq)]
pub struct AuthContext {
    state: Signal<AuthState>,
    api: ApiService,
}

impl AuthContext {
    pub fn new(state: Signal<AuthState>, api: ApiService) -> Self {
        Self { state, api }
    }

    /// Current state; subscribes the calling component.
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user().cloned()
    }

    pub fn is_admin(&self) -> bool {
        self.state.read().is_admin()
    }

    /// Look up the existing session. Failures leave the user anonymous.
    pub async fn resolve(&self) {
        let mut state = self.state;
        state.set(resolve_session(&self.api).await);
    }

    pub async fn sign_in(&self, credentials: Credentials) -> Result<User, AuthError> {
        let mut state = self.state;
        let user = request_sign_in(&self.api, &credentials).await?;
        state.set(AuthState::SignedIn(user.clone()));
        Ok(user)
    }

    /// Tear the session down locally even when the logout request fails.
    pub async fn sign_out(&self) {
        let mut state = self.state;
        let username = self.user().map(|u| u.username);
        state.set(request_sign_out(&self.api, username.as_deref()).await);
    }
}

async fn resolve_session(api: &ApiService) -> AuthState {
    match api.current_user().await {
        Ok(Some(user)) => {
            log_auth_resolved(Some(&user.username), user.is_admin);
            AuthState::SignedIn(user)
        }
        Ok(None) => {
            log_auth_resolved(None, false);
            AuthState::Anonymous
        }
        Err(e) => {
            log_auth_resolution_failed(&e.to_string());
            AuthState::Anonymous
        }
    }
}

async fn request_sign_in(api: &ApiService, credentials: &Credentials) -> Result<User, AuthError> {
    let result = api.login(credentials).await;
    log_sign_in(&credentials.username, result.is_ok());
    match result {
        Ok(user) => Ok(user),
        Err(e) if e.is_unauthorized() => Err(AuthError::InvalidCredentials),
        Err(e) => Err(e.into()),
    }
}

// Always ends anonymous; a failed logout is only logged.
async fn request_sign_out(api: &ApiService, username: Option<&str>) -> AuthState {
    let remote = api.logout().await.err().map(|e| e.to_string());
    log_sign_out(username, remote.as_deref());
    AuthState::Anonymous
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> User {
        User {
            id: 1,
            username: "marina".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_auth_state_defaults_to_resolving() {
        let state = AuthState::default();
        assert_eq!(state, AuthState::Resolving);
        assert!(state.user().is_none());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_auth_state_admin_flag() {
        assert!(AuthState::SignedIn(user(true)).is_admin());
        assert!(!AuthState::SignedIn(user(false)).is_admin());
        assert!(!AuthState::Anonymous.is_admin());
    }

    #[test]
    fn test_credentials_validation() {
        let creds = Credentials::new("  marina ", "secret").unwrap();
        assert_eq!(creds.username, "marina");

        assert_eq!(
            Credentials::new("   ", "secret"),
            Err(AuthError::MissingField("username"))
        );
        assert_eq!(
            Credentials::new("marina", ""),
            Err(AuthError::MissingField("password"))
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod session {
        use axum::Router;
        use axum::http::StatusCode;
        use axum::routing::{get, post};

        use super::*;
        use crate::shared::errors::FetchError;
        use crate::shared::services::test_server;

        fn marina() -> Credentials {
            Credentials::new("marina", "secret").unwrap()
        }

        #[tokio::test]
        async fn test_resolve_signed_in() {
            let api = test_server::spawn(Router::new().route(
                "/api/user",
                get(|| async { (StatusCode::OK, r#"{"id": 1, "username": "marina", "isAdmin": true}"#) }),
            ))
            .await;

            assert_eq!(resolve_session(&api).await, AuthState::SignedIn(user(true)));
        }

        #[tokio::test]
        async fn test_resolve_unauthorized_is_anonymous() {
            let api = test_server::spawn(
                Router::new().route("/api/user", get(|| async { StatusCode::UNAUTHORIZED })),
            )
            .await;

            assert_eq!(resolve_session(&api).await, AuthState::Anonymous);
        }

        #[tokio::test]
        async fn test_resolve_failure_is_anonymous() {
            let broken = test_server::spawn(Router::new().route(
                "/api/user",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            ))
            .await;
            assert_eq!(resolve_session(&broken).await, AuthState::Anonymous);

            let offline = test_server::unreachable().await;
            assert_eq!(resolve_session(&offline).await, AuthState::Anonymous);
        }

        #[tokio::test]
        async fn test_sign_in_unauthorized_is_invalid_credentials() {
            let api = test_server::spawn(
                Router::new().route("/api/login", post(|| async { StatusCode::UNAUTHORIZED })),
            )
            .await;

            assert_eq!(
                request_sign_in(&api, &marina()).await,
                Err(AuthError::InvalidCredentials)
            );
        }

        #[tokio::test]
        async fn test_sign_in_other_failures_pass_through() {
            let api = test_server::spawn(Router::new().route(
                "/api/login",
                post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
            ))
            .await;

            let err = request_sign_in(&api, &marina()).await.unwrap_err();
            assert!(matches!(
                err,
                AuthError::Fetch(FetchError::Status { status: 503, .. })
            ));
        }

        #[tokio::test]
        async fn test_sign_in_returns_user() {
            let api = test_server::spawn(Router::new().route(
                "/api/login",
                post(|| async { (StatusCode::OK, r#"{"id": 1, "username": "marina", "isAdmin": false}"#) }),
            ))
            .await;

            assert_eq!(request_sign_in(&api, &marina()).await, Ok(user(false)));
        }

        #[tokio::test]
        async fn test_sign_out_clears_session_when_logout_fails() {
            let broken = test_server::spawn(Router::new().route(
                "/api/logout",
                post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            ))
            .await;
            assert_eq!(
                request_sign_out(&broken, Some("marina")).await,
                AuthState::Anonymous
            );

            let offline = test_server::unreachable().await;
            assert_eq!(request_sign_out(&offline, Some("marina")).await, AuthState::Anonymous);
        }

        #[tokio::test]
        async fn test_sign_out_ok() {
            let api = test_server::spawn(
                Router::new().route("/api/logout", post(|| async { StatusCode::OK })),
            )
            .await;

            assert_eq!(request_sign_out(&api, None).await, AuthState::Anonymous);
        }
    }
}
