//! # finalease-client
//!
//! Leptos + WASM frontend for FinalEase, the submission/approval portal:
//! Mahasiswa upload PDF submissions with a title and description, Dosen
//! review the queue and approve or reject them with a reason.
//!
//! This crate contains pages, components, application state, the REST API
//! client, and the persisted-session store. All browser I/O (HTTP, local
//! storage, file inputs) is gated behind the `hydrate` feature so the pure
//! logic compiles and tests on the native target.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the application into the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
