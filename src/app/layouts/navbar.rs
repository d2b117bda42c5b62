use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::app::view_model::{category_menu, nav_action};
use crate::config::ClientConfig;
use crate::shared::hooks::use_auth;

/// Sticky storefront navigation: brand, category dropdowns, auth action.
#[component]
pub fn StoreNav() -> Element {
    let config = use_context::<ClientConfig>();

    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__inner",
                Link {
                    to: Route::Catalog {},
                    class: "c-navbar__brand",
                    "{config.brand}"
                }
                CategoryMenu {}
                div { class: "c-navbar__actions",
                    AuthAction {}
                }
            }
        }
    }
}

/// One dropdown per category. Subcategory links don't navigate yet.
#[component]
pub fn CategoryMenu() -> Element {
    let menu = category_menu();

    rsx! {
        ul { class: "c-menu",
            for section in menu {
                li { key: "{section.category}", class: "c-menu__item",
                    button {
                        class: "c-menu__trigger",
                        r#type: "button",
                        "aria-haspopup": "true",
                        "{section.category}"
                    }
                    ul { class: "c-menu__panel",
                        for item in section.items {
                            li { key: "{item.key}",
                                a { class: "c-menu__link", "{item.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

// Does not wait for the session: it shows "Sign In" until auth resolves.
#[component]
fn AuthAction() -> Element {
    let auth = use_auth();
    let action = nav_action(auth.user().as_ref());

    rsx! {
        Link {
            to: action.to,
            class: "c-button c-button--ghost",
            if action.sign_in {
                span { class: "c-navbar__icon", "aria-hidden": "true", "→" }
            }
            "{action.label}"
        }
    }
}
