//! Vaccine OCR Web App (Leptos + WASM)

mod api;
mod app;
mod charts;
mod components;
mod config;
mod controller;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    gloo::console::log!("📜 Vaccine OCR viewer loading...");
    leptos::mount::mount_to_body(app::App);
}
