// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod product;
pub mod user;

pub use product::{Product, format_price};
pub use user::{Credentials, User};
