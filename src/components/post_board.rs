use leptos::prelude::*;

use crate::board::state::{BoardEvent, BoardState, CardGrid};
use crate::components::pager::Pager;
use crate::components::post_card::{PostCard, SkeletonGrid, CARD_GRID_CLASS};
use crate::components::search_bar::SearchBar;
use crate::models::settings::BoardSettings;

/// Searchable, paginated grid of posts.
///
/// The posts request starts once the component is mounted in the browser;
/// until it settles the grid shows skeleton cards.
#[component]
pub fn PostBoard(settings: BoardSettings) -> impl IntoView {
    let state = RwSignal::new(BoardState::new(&settings));
    let dispatch = move |event: BoardEvent| state.update(|s| s.apply(event));

    #[cfg(feature = "hydrate")]
    {
        let settings = settings.clone();
        Effect::new(move |_| start_loading(&settings, dispatch));
    }

    let query = Signal::derive(move || state.with(|s| s.query().to_string()));
    let page = Signal::derive(move || state.with(|s| s.page()));
    let page_count = Signal::derive(move || state.with(|s| s.page_count()));
    let grid = Memo::new(move |_| state.with(|s| s.grid()));

    view! {
        <div class="container mx-auto mt-5 px-4">
            <SearchBar
                query=query
                on_search=move |q: String| dispatch(BoardEvent::SearchChanged(q))
            />
            {move || match grid.get() {
                CardGrid::Placeholders(count) => view! { <SkeletonGrid count=count/> }.into_any(),
                CardGrid::Posts(posts) => view! {
                    <div class=CARD_GRID_CLASS>
                        {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
                    </div>
                    <Pager
                        page=page
                        page_count=page_count
                        on_change=move |p: usize| dispatch(BoardEvent::PageChanged(p))
                    />
                }
                .into_any(),
                CardGrid::Failed(message) => view! {
                    <div role="alert" class="alert alert-error">
                        <span>"Could not load posts: " {message}</span>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Kick off the fetch and fallback timer; both are cancelled on unmount.
#[cfg(feature = "hydrate")]
fn start_loading(settings: &BoardSettings, dispatch: impl Fn(BoardEvent) + Copy + 'static) {
    use futures::future::{AbortHandle, Abortable};

    use crate::api::posts::BrowserPostSource;
    use crate::board::loader::run_load;

    let source = BrowserPostSource::new(settings.posts_url.clone());
    let fallback = settings.fallback_timeout().map(gloo_timers::future::sleep);

    let (handle, registration) = AbortHandle::new_pair();
    on_cleanup(move || handle.abort());

    leptos::task::spawn_local(async move {
        let load = run_load(&source, fallback, dispatch);
        if Abortable::new(load, registration).await.is_err() {
            tracing::debug!("Post loading cancelled on unmount");
        }
    });
}
