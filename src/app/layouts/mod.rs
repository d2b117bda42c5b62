pub mod navbar;

pub use navbar::{CategoryMenu, StoreNav};
