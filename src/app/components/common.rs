use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingSpinner(message: Option<String>) -> Element {
    rsx! {
        div { class: "c-loading",
            role: "status",
            div { class: "c-loading__spinner" }
            if let Some(message) = message {
                p { class: "c-loading__text", "{message}" }
            }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(
    message: String,
    on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "c-error",
            role: "alert",
            p { class: "c-error__text", "{message}" }
            if let Some(handler) = on_retry {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| handler.call(()),
                    "Try again"
                }
            }
        }
    }
}

// Reusable Empty State Component
#[component]
pub fn EmptyState(title: String, description: String) -> Element {
    rsx! {
        div { class: "c-empty",
            h3 { class: "c-empty__title", "{title}" }
            p { class: "c-empty__text", "{description}" }
        }
    }
}
