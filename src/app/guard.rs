//! Route authorization.
//!
//! Each route declares an `Access` requirement; `evaluate` runs before the
//! route renders. This is a UX guard only: the API must still enforce
//! admin-only operations server-side.

use dioxus::prelude::*;

use crate::app::components::LoadingSpinner;
use crate::app::routes::Route;
use crate::shared::state::AuthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Admin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Render,
    /// Session still resolving; show a loader, decide later.
    Wait,
    Redirect(Route),
    /// Signed in, but not allowed here.
    Deny,
}

impl GuardDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardDecision::Render => "render",
            GuardDecision::Wait => "wait",
            GuardDecision::Redirect(_) => "redirect",
            GuardDecision::Deny => "deny",
        }
    }
}

pub fn evaluate(access: Access, auth: &AuthState) -> GuardDecision {
    match (access, auth) {
        (Access::Public, _) => GuardDecision::Render,
        (Access::Admin, AuthState::Resolving) => GuardDecision::Wait,
        (Access::Admin, AuthState::Anonymous) => GuardDecision::Redirect(Route::SignIn {}),
        (Access::Admin, AuthState::SignedIn(user)) if user.is_admin => GuardDecision::Render,
        (Access::Admin, AuthState::SignedIn(_)) => GuardDecision::Deny,
    }
}

/// Path and outcome worth logging for a guarded route. Public routes log nothing.
pub fn decision_log_entry(
    route: &Route,
    decision: &GuardDecision,
) -> Option<(String, &'static str)> {
    match route.access() {
        Access::Public => None,
        Access::Admin => Some((route.to_string(), decision.as_str())),
    }
}

/// Replace the current history entry with `to`.
#[component]
pub fn RedirectTo(to: Route) -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(to.clone());
    });

    rsx! {
        LoadingSpinner { message: "Redirecting...".to_string() }
    }
}

#[component]
pub fn AccessDenied() -> Element {
    rsx! {
        section { class: "c-notice",
            h1 { class: "c-notice__title", "Admins only" }
            p { class: "c-notice__text",
                "Your account doesn't have access to this page."
            }
            Link { to: Route::Catalog {}, class: "c-button c-button--ghost", "Back to the collection" }
        }
    }
}
