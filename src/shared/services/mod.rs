// Shared services
pub mod api_service;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod test_server;

pub use api_service::{ApiService, RawResponse, decode_response};
