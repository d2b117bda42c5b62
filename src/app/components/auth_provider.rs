use dioxus::prelude::*;

use crate::shared::services::ApiService;
use crate::shared::state::{AuthContext, AuthState};

/// Provides `AuthContext` to `children` and resolves the session once on mount.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_context::<ApiService>();
    let state = use_signal(AuthState::default);
    let auth = use_context_provider(|| AuthContext::new(state, api));

    use_effect(move || {
        let auth = auth.clone();
        spawn(async move {
            auth.resolve().await;
        });
    });

    rsx! { {children} }
}
