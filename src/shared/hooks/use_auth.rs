use dioxus::prelude::*;

use crate::shared::state::AuthContext;

/// Session context provided by `AuthProvider` at the app root
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
