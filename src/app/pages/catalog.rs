use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingSpinner, ProductCard};
use crate::app::layouts::StoreNav;
use crate::app::view_model::{CatalogScreen, ProductCardModel, catalog_screen};
use crate::shared::hooks::use_products;

const HERO_TITLE: &str = "Island-Inspired Living";
const HERO_COPY: &str = "Discover our curated collection of furniture that brings the serenity of coastal living to your home.";

/// Storefront landing page
#[component]
pub fn Catalog() -> Element {
    let query = use_products();
    let screen = catalog_screen(&query.state());

    // No chrome until the first response arrives.
    if matches!(screen, CatalogScreen::Loading) {
        return rsx! {
            div { class: "c-page c-page--centered",
                LoadingSpinner {}
            }
        };
    }

    let content = match screen {
        CatalogScreen::Ready { cards } => rsx! { ProductGrid { cards } },
        CatalogScreen::Failed { message } => {
            let query = query.clone();
            rsx! {
                ErrorMessage { message, on_retry: move |_| query.refetch() }
            }
        }
        CatalogScreen::Loading => rsx! {},
    };

    rsx! {
        div { class: "c-page",
            StoreNav {}
            Hero {}
            main { class: "c-container c-catalog", {content} }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        header { class: "c-hero",
            h1 { class: "c-hero__title", "{HERO_TITLE}" }
            p { class: "c-hero__copy", "{HERO_COPY}" }
        }
    }
}

/// Responsive grid: 1 column on phones, 2 on tablets, 3 on desktop.
#[component]
fn ProductGrid(cards: Vec<ProductCardModel>) -> Element {
    if cards.is_empty() {
        return rsx! {
            EmptyState {
                title: "Nothing here yet".to_string(),
                description: "New pieces are on their way. Check back soon.".to_string(),
            }
        };
    }

    rsx! {
        div { class: "c-grid",
            for card in cards {
                ProductCard { key: "{card.id}", card: card.clone() }
            }
        }
    }
}
