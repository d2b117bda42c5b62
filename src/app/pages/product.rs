use dioxus::prelude::*;

use crate::app::components::{ErrorMessage, LoadingSpinner};
use crate::app::layouts::StoreNav;
use crate::app::routes::Route;
use crate::app::view_model::{DetailScreen, detail_screen};
use crate::shared::hooks::use_products;

/// Product detail page. Reads the shared product snapshot, so coming from
/// the catalog does not refetch.
#[component]
pub fn ProductDetail(id: String) -> Element {
    let query = use_products();
    let screen = detail_screen(&query.state(), &id);

    let content = match screen {
        DetailScreen::Loading => rsx! { LoadingSpinner {} },
        DetailScreen::Failed { message } => {
            let query = query.clone();
            rsx! {
                ErrorMessage { message, on_retry: move |_| query.refetch() }
            }
        }
        DetailScreen::NotFound => rsx! {
            section { class: "c-notice",
                h1 { class: "c-notice__title", "Product not found" }
                p { class: "c-notice__text", "This piece may have sold out or moved." }
            }
        },
        DetailScreen::Ready(product) => rsx! {
            article { class: "c-detail",
                div { class: "c-detail__media",
                    img {
                        class: "c-detail__image",
                        src: "{product.image_url}",
                        alt: "{product.name}",
                    }
                }
                div { class: "c-detail__body",
                    span { class: "c-card__badge", "{product.category}" }
                    h1 { class: "c-detail__title", "{product.name}" }
                    p { class: "c-detail__price", "{product.price_label}" }
                    p { class: "c-detail__description", "{product.description}" }
                }
            }
        },
    };

    rsx! {
        div { class: "c-page",
            StoreNav {}
            main { class: "c-container",
                Link { to: Route::Catalog {}, class: "c-breadcrumb", "← Back to the collection" }
                {content}
            }
        }
    }
}
