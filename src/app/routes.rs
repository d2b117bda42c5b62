use dioxus::prelude::*;
use dioxus::document;

use crate::app::components::{AuthProvider, LoadingSpinner};
use crate::app::guard::{
    Access, AccessDenied, GuardDecision, RedirectTo, decision_log_entry, evaluate,
};
use crate::app::pages::{Admin, Catalog, NotFound, ProductDetail, SignIn};
use crate::config::ClientConfig;
use crate::shared::hooks::use_auth;
use crate::shared::logging::log_guard_decision;
use crate::shared::query::QueryClient;
use crate::shared::services::ApiService;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Catalog {},
    // Raw path segment; non-numeric ids render "not found" on the page.
    #[route("/product/:id")]
    ProductDetail { id: String },
    #[route("/auth")]
    SignIn {},
    #[route("/admin")]
    Admin {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Authorization requirement checked by `Shell` before rendering.
    pub fn access(&self) -> Access {
        match self {
            Route::Admin {} => Access::Admin,
            Route::Catalog {}
            | Route::ProductDetail { .. }
            | Route::SignIn {}
            | Route::NotFound { .. } => Access::Public,
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(ClientConfig::default);
    use_context_provider(|| ApiService::with_base_url(config.api_base_url.clone()));
    use_context_provider(|| QueryClient::new(config.stale_after()));

    use_effect(|| {
        tracing::info!("Storefront initialized");
    });

    rsx! {
        AuthProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Shell() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let auth = use_auth();
    let route = use_route::<Route>();
    let access = route.access();
    let decision = evaluate(access, &auth.state());

    // Once per change of route or outcome, not on every render.
    let log_entry = decision_log_entry(&route, &decision);
    use_effect(use_reactive((&log_entry,), |(log_entry,)| {
        if let Some((path, outcome)) = log_entry {
            log_guard_decision(&path, outcome);
        }
    }));

    let body = match decision {
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::Wait => rsx! {
            div { class: "c-page c-page--centered",
                LoadingSpinner { message: "Checking your session...".to_string() }
            }
        },
        GuardDecision::Redirect(to) => rsx! { RedirectTo { to } },
        GuardDecision::Deny => rsx! {
            div { class: "c-page c-page--centered", AccessDenied {} }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        {body}
    }
}
