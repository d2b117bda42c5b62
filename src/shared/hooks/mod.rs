// Custom Dioxus hooks
pub mod use_auth;
pub mod use_products;

pub use use_auth::use_auth;
pub use use_products::{ProductsQuery, fetch_products, use_products};
