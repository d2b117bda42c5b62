//! Client and host configuration.
//!
//! The client has no runtime environment: its settings are compiled in, with
//! `STOREFRONT_API_BASE` read at build time. The native host takes CLI flags.

use chrono::Duration;

pub const DEFAULT_BRAND: &str = "ISLA Living";

/// Snapshots younger than this are served from the query cache.
pub const DEFAULT_STALE_AFTER_SECS: i64 = 60;

// Same-origin in the browser; the desktop build talks to a local host.
#[cfg(target_arch = "wasm32")]
const DEFAULT_API_BASE: &str = "";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_API_BASE: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub brand: String,
    pub api_base_url: String,
    pub stale_after_secs: i64,
}

impl ClientConfig {
    pub fn stale_after(&self) -> Duration {
        Duration::seconds(self.stale_after_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            api_base_url: option_env!("STOREFRONT_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            stale_after_secs: DEFAULT_STALE_AFTER_SECS,
        }
    }
}

#[cfg(feature = "server")]
pub use host::HostArgs;

#[cfg(feature = "server")]
mod host {
    use std::net::{IpAddr, SocketAddr};
    use std::path::PathBuf;

    use clap::Parser;

    use crate::shared::errors::{AppError, Result};

    /// Static host for the built storefront client
    #[derive(Debug, Clone, Parser)]
    #[command(name = "storefront-host", version, about)]
    pub struct HostArgs {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        pub bind: IpAddr,

        /// Port to listen on
        #[arg(long, short, default_value_t = 3000)]
        pub port: u16,

        /// Directory containing the built client (index.html, wasm, assets)
        #[arg(long, default_value = "dist")]
        pub dist: PathBuf,
    }

    impl HostArgs {
        pub fn socket_addr(&self) -> SocketAddr {
            SocketAddr::new(self.bind, self.port)
        }

        /// Check that `dist` is a directory with an `index.html` to fall back to.
        pub fn validate(&self) -> Result<()> {
            if !self.dist.is_dir() {
                return Err(AppError::InvalidPath(self.dist.clone()));
            }
            if !self.dist.join("index.html").is_file() {
                return Err(AppError::MissingIndex(self.dist.clone()));
            }
            Ok(())
        }
    }
}
