pub mod admin;
pub mod auth;
pub mod catalog;
pub mod not_found;
pub mod product;

pub use admin::Admin;
pub use auth::SignIn;
pub use catalog::Catalog;
pub use not_found::NotFound;
pub use product::ProductDetail;
