//! Render-free view models.
//!
//! Pages turn query and session state into these values and only then into
//! markup, which keeps the branching testable without a DOM.

use crate::app::routes::Route;
use crate::domain::models::{Product, User};
use crate::domain::taxonomy::categories;
use crate::shared::query::QueryState;

/// Card descriptions are clamped to two lines in CSS; this bounds the text
/// handed to the DOM as well.
pub const EXCERPT_CHARS: usize = 140;

#[derive(Debug, Clone, PartialEq)]
pub struct NavAction {
    pub label: &'static str,
    pub to: Route,
    pub sign_in: bool,
}

/// "Admin" for admins, "Sign In" for everyone else (including while the
/// session is still resolving).
pub fn nav_action(user: Option<&User>) -> NavAction {
    match user {
        Some(user) if user.is_admin => NavAction {
            label: "Admin",
            to: Route::Admin {},
            sign_in: false,
        },
        _ => NavAction {
            label: "Sign In",
            to: Route::SignIn {},
            sign_in: true,
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub key: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub category: &'static str,
    pub items: Vec<MenuItem>,
}

pub fn category_menu() -> Vec<MenuSection> {
    categories()
        .map(|category| MenuSection {
            category: category.name,
            items: category
                .subcategories
                .iter()
                .map(|sub| MenuItem {
                    key: format!("{}/{}", category.name, sub),
                    label: sub,
                })
                .collect(),
        })
        .collect()
}

pub fn product_route(id: i64) -> Route {
    Route::ProductDetail { id: id.to_string() }
}

/// Cut `text` to at most `max_chars` characters, ending with an ellipsis.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardModel {
    pub id: i64,
    pub to: Route,
    pub name: String,
    pub category: String,
    pub excerpt: String,
    pub price_label: String,
    pub image_url: String,
}

impl From<&Product> for ProductCardModel {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            to: product_route(product.id),
            name: product.name.clone(),
            category: product.category.clone(),
            excerpt: excerpt(&product.description, EXCERPT_CHARS),
            price_label: product.price_label(),
            image_url: product.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogScreen {
    /// Only the loading indicator is drawn.
    Loading,
    Failed { message: String },
    Ready { cards: Vec<ProductCardModel> },
}

/// Cards keep server order.
pub fn catalog_screen(state: &QueryState<Vec<Product>>) -> CatalogScreen {
    match state {
        QueryState::Pending => CatalogScreen::Loading,
        QueryState::Failed(error) => CatalogScreen::Failed {
            message: format!("We couldn't load the collection. {error}"),
        },
        QueryState::Ready(products) => CatalogScreen::Ready {
            cards: products.iter().map(ProductCardModel::from).collect(),
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailModel {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price_label: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailScreen {
    Loading,
    Failed { message: String },
    NotFound,
    Ready(ProductDetailModel),
}

/// `raw_id` comes straight from the URL and may not be numeric.
pub fn detail_screen(state: &QueryState<Vec<Product>>, raw_id: &str) -> DetailScreen {
    let Ok(id) = raw_id.parse::<i64>() else {
        return DetailScreen::NotFound;
    };
    match state {
        QueryState::Pending => DetailScreen::Loading,
        QueryState::Failed(error) => DetailScreen::Failed {
            message: format!("We couldn't load this product. {error}"),
        },
        QueryState::Ready(products) => match products.iter().find(|p| p.id == id) {
            Some(product) => DetailScreen::Ready(ProductDetailModel {
                name: product.name.clone(),
                category: product.category.clone(),
                description: product.description.clone(),
                price_label: product.price_label(),
                image_url: product.image_url.clone(),
            }),
            None => DetailScreen::NotFound,
        },
    }
}
