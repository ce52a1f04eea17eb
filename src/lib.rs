//! # auth-app
//!
//! Leptos + WASM client for a token-authenticated user directory.
//!
//! Signs a user up or in against the remote auth service, keeps the issued
//! token in `localStorage`, and lists users from the protected endpoint while
//! that token is held. The view/session machine in `state` is plain Rust and
//! is tested natively; browser glue is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// wasm entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
