pub mod models;
pub mod taxonomy;
