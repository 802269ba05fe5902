use crate::models::settings::BoardSettings;

/// Shared server state, provided as context to SSR and server functions.
#[derive(Clone)]
pub struct AppState {
    pub settings: BoardSettings,
    pub leptos_options: leptos::prelude::LeptosOptions,
}

impl axum::extract::FromRef<AppState> for leptos::prelude::LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl AppState {
    pub fn new(settings: BoardSettings, leptos_options: leptos::prelude::LeptosOptions) -> Self {
        Self {
            settings,
            leptos_options,
        }
    }
}
