pub mod components;
pub mod guard;
pub mod layouts;
pub mod pages;
pub mod routes;
pub mod view_model;

pub use routes::{App, Route};
