pub mod auth_provider;
pub mod button;
pub mod card;
pub mod common;

pub use auth_provider::AuthProvider;
pub use button::{Button, ButtonVariant};
pub use card::ProductCard;
pub use common::{EmptyState, ErrorMessage, LoadingSpinner};
