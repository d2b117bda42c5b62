// Public API exports (shared between browser and native builds)
pub mod config;
pub mod domain;
pub mod shared;

pub mod app;

// Native static host (`server` feature)
#[cfg(feature = "server")]
pub mod host;
