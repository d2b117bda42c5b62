//! Server-state caching.
//!
//! `QueryState` is the tri-state value views branch on. `QueryClient` keeps
//! the last successful snapshot per `QueryKey` so pages sharing a key (the
//! catalog and the product page) do not refetch within the stale window.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::shared::errors::FetchError;
use crate::shared::logging::{log_cache_hit, log_cache_invalidated};

/// Stable cache key; the string form is the endpoint it mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Products,
}

impl QueryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::Products => "/api/products",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Pending,
    Ready(T),
    Failed(FetchError),
}

impl<T: Clone> QueryState<T> {
    /// `None` is a fetch still in flight.
    pub fn from_result(result: Option<&Result<T, FetchError>>) -> Self {
        match result {
            None => QueryState::Pending,
            Some(Ok(data)) => QueryState::Ready(data.clone()),
            Some(Err(error)) => QueryState::Failed(error.clone()),
        }
    }
}

struct CachedSnapshot {
    value: Arc<dyn Any + Send + Sync>,
    fetched_at: DateTime<Utc>,
}

/// Snapshot cache shared through context. Cloning shares the same entries.
#[derive(Clone)]
pub struct QueryClient {
    entries: Arc<DashMap<QueryKey, CachedSnapshot>>,
    stale_after: Duration,
}

impl QueryClient {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            stale_after,
        }
    }

    /// Snapshot for `key` if it is younger than the stale window at `now`.
    pub fn get_fresh<T: Clone + 'static>(&self, key: QueryKey, now: DateTime<Utc>) -> Option<T> {
        let entry = self.entries.get(&key)?;
        let age = now - entry.fetched_at;
        if age >= self.stale_after {
            return None;
        }
        let value = entry.value.downcast_ref::<T>()?.clone();
        log_cache_hit(key.as_str(), age.num_seconds());
        Some(value)
    }

    pub fn insert<T: Send + Sync + 'static>(&self, key: QueryKey, value: T, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            CachedSnapshot {
                value: Arc::new(value),
                fetched_at: now,
            },
        );
    }

    pub fn invalidate(&self, key: QueryKey) {
        if self.entries.remove(&key).is_some() {
            log_cache_invalidated(key.as_str());
        }
    }
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_query_key_is_endpoint() {
        assert_eq!(QueryKey::Products.to_string(), "/api/products");
    }

    #[test]
    fn test_fresh_snapshot_served() {
        let client = QueryClient::new(Duration::seconds(60));
        client.insert(QueryKey::Products, vec![1, 2, 3], at(0));

        assert_eq!(client.get_fresh::<Vec<i32>>(QueryKey::Products, at(59)), Some(vec![1, 2, 3]));
        assert_eq!(client.get_fresh::<Vec<i32>>(QueryKey::Products, at(60)), None);
    }

    #[test]
    fn test_latest_snapshot_wins() {
        let client = QueryClient::new(Duration::seconds(60));
        client.insert(QueryKey::Products, vec![1], at(0));
        client.insert(QueryKey::Products, vec![4, 5], at(10));

        assert_eq!(client.get_fresh::<Vec<i32>>(QueryKey::Products, at(20)), Some(vec![4, 5]));
    }

    #[test]
    fn test_wrong_type_misses() {
        let client = QueryClient::new(Duration::seconds(60));
        client.insert(QueryKey::Products, vec![1], at(0));

        assert_eq!(client.get_fresh::<String>(QueryKey::Products, at(1)), None);
    }

    #[test]
    fn test_invalidate() {
        let client = QueryClient::new(Duration::seconds(60));
        let shared = client.clone();
        client.insert(QueryKey::Products, vec![1], at(0));
        shared.invalidate(QueryKey::Products);

        assert_eq!(client.get_fresh::<Vec<i32>>(QueryKey::Products, at(1)), None);
        assert!(client == shared);
    }

    #[test]
    fn test_state_from_result() {
        assert_eq!(QueryState::<Vec<i32>>::from_result(None), QueryState::Pending);

        let ok: Result<Vec<i32>, FetchError> = Ok(vec![]);
        assert_eq!(QueryState::from_result(Some(&ok)), QueryState::Ready(vec![]));

        let err: Result<Vec<i32>, FetchError> = Err(FetchError::Network("offline".into()));
        assert_eq!(
            QueryState::from_result(Some(&err)),
            QueryState::Failed(FetchError::Network("offline".into()))
        );
    }
}
