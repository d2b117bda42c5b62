use dioxus::prelude::*;

use crate::app::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "c-page c-page--centered",
            section { class: "c-notice",
                h1 { class: "c-notice__title", "404 Page Not Found" }
                p { class: "c-notice__text", "Nothing lives at {path}." }
                Link { to: Route::Catalog {}, class: "c-button c-button--ghost", "Back to the collection" }
            }
        }
    }
}
