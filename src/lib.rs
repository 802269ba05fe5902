pub mod app;
pub mod error;
pub mod models {
    pub mod post;
    pub mod settings;
}
pub mod board {
    pub mod filter;
    pub mod loader;
    pub mod pagination;
    pub mod state;
}
pub mod components {
    pub mod pager;
    pub mod post_board;
    pub mod post_card;
    pub mod search_bar;
}
pub mod api {
    pub mod posts;
}

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
