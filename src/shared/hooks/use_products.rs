use chrono::Utc;
use dioxus::prelude::*;

use crate::domain::models::Product;
use crate::shared::errors::FetchError;
use crate::shared::logging::{log_fetch_error, log_fetch_start, log_fetch_success};
use crate::shared::query::{QueryClient, QueryKey, QueryState};
use crate::shared::services::ApiService;

/// Product collection query handle
#[derive(Clone)]
pub struct ProductsQuery {
    resource: Resource<Result<Vec<Product>, FetchError>>,
    client: QueryClient,
}

impl ProductsQuery {
    /// Current tri-state; subscribes the calling component.
    pub fn state(&self) -> QueryState<Vec<Product>> {
        QueryState::from_result(self.resource.read().as_ref())
    }

    /// Drop the cached snapshot and go back to the network.
    pub fn refetch(&self) {
        let mut resource = self.resource;
        self.client.invalidate(QueryKey::Products);
        resource.restart();
    }
}

/// Serve a fresh snapshot from `client`, otherwise fetch and store one.
pub async fn fetch_products(
    client: &QueryClient,
    api: &ApiService,
) -> Result<Vec<Product>, FetchError> {
    let key = QueryKey::Products;
    if let Some(products) = client.get_fresh::<Vec<Product>>(key, Utc::now()) {
        return Ok(products);
    }

    log_fetch_start(key.as_str());
    match api.get_products().await {
        Ok(products) => {
            log_fetch_success(key.as_str(), products.len());
            client.insert(key, products.clone(), Utc::now());
            Ok(products)
        }
        Err(e) => {
            log_fetch_error(key.as_str(), &e.to_string());
            Err(e)
        }
    }
}

/// Hook to read the product collection, starting the fetch on mount
pub fn use_products() -> ProductsQuery {
    let client = use_context::<QueryClient>();
    let api = use_context::<ApiService>();

    let client_for_fetch = client.clone();
    let resource = use_resource(move || {
        let client = client_for_fetch.clone();
        let api = api.clone();
        async move { fetch_products(&client, &api).await }
    });

    ProductsQuery { resource, client }
}
