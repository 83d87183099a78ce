//! # client
//!
//! Leptos + WASM frontend for Pro-Tasker, a project/task tracker backed by a
//! REST API.
//!
//! This crate contains the session store and its persistence port, the route
//! guard, the REST client, and the login/register/dashboard/project pages.
//! Build for the browser with the `csr` feature (`trunk build`); native builds
//! compile the same modules with browser calls stubbed so tests run anywhere.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
