pub mod errors;
pub mod logging;
pub mod query;
pub mod services;

// Signal-backed state and hooks (need a Dioxus runtime)
pub mod hooks;
pub mod state;
