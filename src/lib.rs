//! # blogpessoal
//!
//! Leptos + WASM frontend for the Blog Pessoal REST API: login, tema and
//! postagem listing, create/edit forms and delete confirmation.
//!
//! Page logic lives in browser-independent flows (`state`) that emit
//! commands; `util::commands` executes them against the router, the session
//! and the HTTP service layer (`net`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
