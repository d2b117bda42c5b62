use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, ErrorMessage};
use crate::app::routes::Route;
use crate::shared::hooks::{use_auth, use_products};
use crate::shared::query::QueryState;

/// Admin landing page. Only reachable through the route guard.
#[component]
pub fn Admin() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let query = use_products();

    let username = auth.user().map(|u| u.username).unwrap_or_default();
    let summary = match query.state() {
        QueryState::Pending => rsx! { p { class: "c-admin__stat", "Loading products..." } },
        QueryState::Ready(products) => rsx! {
            p { class: "c-admin__stat",
                span { class: "c-admin__stat-value", "{products.len()}" }
                " products in the catalog"
            }
        },
        QueryState::Failed(error) => {
            let query = query.clone();
            rsx! {
                ErrorMessage { message: error.to_string(), on_retry: move |_| query.refetch() }
            }
        }
    };

    rsx! {
        div { class: "c-page",
            header { class: "c-admin__header c-container",
                Link { to: Route::Catalog {}, class: "c-breadcrumb", "← Storefront" }
                h1 { class: "c-admin__title", "Dashboard" }
                p { class: "c-admin__user", "Signed in as {username}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        let auth = auth.clone();
                        spawn(async move {
                            auth.sign_out().await;
                            nav.replace(Route::Catalog {});
                        });
                    },
                    "Sign out"
                }
            }
            main { class: "c-container", {summary} }
        }
    }
}
