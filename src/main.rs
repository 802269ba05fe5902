#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::routing::post;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use postboard::app::{shell, App};
    use postboard::state::AppState;
    use tower_http::services::ServeDir;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postboard=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting Postboard server...");

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    let settings = postboard::config::load_settings()?;
    tracing::info!(
        "Posts endpoint: {} (page size {}, fallback timer {} ms)",
        settings.posts_url,
        settings.page_size,
        settings.fallback_timeout_ms
    );

    let app_state = AppState::new(settings, leptos_options.clone());

    // Generate the Leptos route list for SSR
    let routes = generate_route_list(App);

    let app = Router::new()
        .route("/api/{*fn_name}", post(server_fn_handler))
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let state = app_state.clone();
                move || provide_context(state.clone())
            },
            {
                let options = leptos_options.clone();
                move || shell(options.clone())
            },
        )
        // Static files (compiled WASM, JS and CSS)
        .fallback_service(ServeDir::new(&site_root))
        .with_state(app_state);

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(feature = "ssr")]
async fn server_fn_handler(
    axum::extract::State(state): axum::extract::State<postboard::state::AppState>,
    request: axum::extract::Request,
) -> impl axum::response::IntoResponse {
    use leptos::prelude::provide_context;

    leptos_axum::handle_server_fns_with_context(move || provide_context(state.clone()), request)
        .await
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {}
