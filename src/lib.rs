pub mod app;
pub mod auth;
pub mod content;
pub mod cookies;
pub mod defs;
pub mod fileserv;

use cfg_if::cfg_if;
cfg_if! { if #[cfg(feature = "hydrate")] {
    #[wasm_bindgen::prelude::wasm_bindgen]
    pub fn hydrate() {

        use app::*;

        _ = console_log::init_with_level(log::Level::Debug);
        console_error_panic_hook::set_once();

        leptos::mount::hydrate_body(App);
    }
}}
