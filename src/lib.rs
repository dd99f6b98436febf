pub mod common;
pub mod data;
pub mod frontend;
pub mod models;
pub mod services;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(frontend::App);
}
