//! Structured logging helpers for the storefront
//!
//! Every event carries an `operation` field so browser console output and
//! host logs can be filtered the same way.

use std::net::SocketAddr;
use std::path::Path;

/// Operation tags attached to log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ProductFetch,
    QueryCache,
    AuthSession,
    RouteGuard,
    StaticHost,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ProductFetch => "product_fetch",
            LogOperation::QueryCache => "query_cache",
            LogOperation::AuthSession => "auth_session",
            LogOperation::RouteGuard => "route_guard",
            LogOperation::StaticHost => "static_host",
        }
    }
}

/// Log a network fetch starting
pub fn log_fetch_start(key: &str) {
    tracing::debug!(
        operation = LogOperation::ProductFetch.as_str(),
        query_key = key,
        "Fetching"
    );
}

pub fn log_fetch_success(key: &str, item_count: usize) {
    tracing::info!(
        operation = LogOperation::ProductFetch.as_str(),
        query_key = key,
        item_count = item_count,
        "Fetch completed"
    );
}

pub fn log_fetch_error(key: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::ProductFetch.as_str(),
        query_key = key,
        error = error,
        "Fetch failed"
    );
}

/// Log a snapshot served from the query cache
pub fn log_cache_hit(key: &str, age_secs: i64) {
    tracing::debug!(
        operation = LogOperation::QueryCache.as_str(),
        query_key = key,
        age_secs = age_secs,
        "Serving cached snapshot"
    );
}

pub fn log_cache_invalidated(key: &str) {
    tracing::debug!(
        operation = LogOperation::QueryCache.as_str(),
        query_key = key,
        "Snapshot invalidated"
    );
}

/// Log the outcome of the initial session lookup
pub fn log_auth_resolved(username: Option<&str>, is_admin: bool) {
    match username {
        Some(username) => tracing::info!(
            operation = LogOperation::AuthSession.as_str(),
            username = username,
            is_admin = is_admin,
            "Session resolved"
        ),
        None => tracing::info!(
            operation = LogOperation::AuthSession.as_str(),
            "No active session"
        ),
    }
}

pub fn log_auth_resolution_failed(error: &str) {
    tracing::warn!(
        operation = LogOperation::AuthSession.as_str(),
        error = error,
        "Session lookup failed - continuing as anonymous"
    );
}

pub fn log_sign_in(username: &str, succeeded: bool) {
    if succeeded {
        tracing::info!(
            operation = LogOperation::AuthSession.as_str(),
            username = username,
            "Signed in"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::AuthSession.as_str(),
            username = username,
            "Sign-in rejected"
        );
    }
}

pub fn log_sign_out(username: Option<&str>, remote_error: Option<&str>) {
    tracing::info!(
        operation = LogOperation::AuthSession.as_str(),
        username = username.unwrap_or("-"),
        remote_error = remote_error.unwrap_or("-"),
        "Signed out"
    );
}

/// Log a guard decision for a non-public route
pub fn log_guard_decision(path: &str, decision: &str) {
    tracing::debug!(
        operation = LogOperation::RouteGuard.as_str(),
        path = path,
        decision = decision,
        "Route guard evaluated"
    );
}

/// Log static host startup
pub fn log_host_started(addr: &SocketAddr, dist: &Path) {
    tracing::info!(
        operation = LogOperation::StaticHost.as_str(),
        addr = %addr,
        dist = %dist.display(),
        "Serving storefront"
    );
}
