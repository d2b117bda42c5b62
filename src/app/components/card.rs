use dioxus::prelude::*;

use crate::app::view_model::ProductCardModel;

// Product tile for the catalog grid; the whole card is the link.
#[component]
pub fn ProductCard(card: ProductCardModel) -> Element {
    rsx! {
        Link {
            to: card.to.clone(),
            class: "c-card",
            div { class: "c-card__media",
                img {
                    class: "c-card__image",
                    src: "{card.image_url}",
                    alt: "{card.name}",
                    loading: "lazy",
                }
            }
            div { class: "c-card__body",
                div { class: "c-card__header",
                    h2 { class: "c-card__title", "{card.name}" }
                    span { class: "c-card__badge", "{card.category}" }
                }
                p { class: "c-card__excerpt", "{card.excerpt}" }
                div { class: "c-card__footer",
                    p { class: "c-card__price", "{card.price_label}" }
                    span { class: "c-card__icon", "aria-hidden": "true", "🛍" }
                }
            }
        }
    }
}
