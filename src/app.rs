use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::path;

use crate::components::post_board::PostBoard;
use crate::components::post_card::SkeletonGrid;
use crate::models::settings::{BoardSettings, DEFAULT_PLACEHOLDER_COUNT};

/// Server function handing the board settings to the browser.
#[server(GetBoardSettings, "/api")]
pub async fn get_board_settings() -> Result<BoardSettings, ServerFnError> {
    let state = expect_context::<crate::state::AppState>();
    Ok(state.settings.clone())
}

/// The HTML document rendered by the server around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/postboard.css"/>
        <Title text="Postboard"/>

        <Router>
            <main>
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let settings = Resource::new(|| (), |_| get_board_settings());

    view! {
        <Suspense fallback=|| view! { <SkeletonGrid count=DEFAULT_PLACEHOLDER_COUNT/> }>
            {move || settings.get().map(|res| match res {
                Ok(settings) => view! { <PostBoard settings=settings/> }.into_any(),
                Err(e) => view! {
                    <p class="error">"Error loading settings: " {e.to_string()}</p>
                }
                .into_any(),
            })}
        </Suspense>
    }
}
