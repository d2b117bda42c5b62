//! ISLA Living storefront - client entry point

use isla_living_storefront::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] ISLA Living storefront initialized".into());
    dioxus::launch(App);
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    dioxus::launch(App);
}
