//! # superteam-client
//!
//! Leptos + WASM frontend for the SuperTeam hero catalog. Browse and search
//! heroes, build and compare teams, keep favorites, and (for admins) manage
//! user accounts, all against the SuperTeam REST API.
//!
//! The crate is organised as pages, components, application state (session
//! store and route gate), and the network layer (wire types, token storage,
//! API client).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. Installs logging and the panic hook, applies any
/// host-page API overrides, and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // The host page may set `window.SUPERTEAM_API_BASE` to point the client
    // at a non-default gateway.
    let base = web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &"SUPERTEAM_API_BASE".into()).ok())
        .and_then(|v| v.as_string());
    crate::net::api::configure(base.as_deref(), None);

    leptos::mount::hydrate_body(app::App);
}
