//! A family of embeddable portal UI widgets: the navigation bar with its
//! configuration/routing core, a hamburger toggle, a flip card and a
//! language switcher.

pub mod app;
pub mod card;
pub mod hamburger;
pub mod language_switcher;
pub mod navigation;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
