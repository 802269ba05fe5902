use leptos::prelude::*;

use crate::models::post::Post;

/// Responsive grid shared by real and placeholder cards.
pub const CARD_GRID_CLASS: &str = "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4";

const CARD_CLASS: &str = "card h-64 w-full overflow-hidden rounded-2xl bg-base-100/80 backdrop-blur shadow-md";

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    view! {
        <div class=format!("{CARD_CLASS} transition hover:scale-105 hover:shadow-xl")>
            <div class="card-body">
                <div class="avatar placeholder mb-4">
                    <div class="bg-neutral text-neutral-content w-10 rounded-full">
                        <span>{post.id}</span>
                    </div>
                </div>
                <h2 class="card-title text-xl font-bold truncate">{post.title}</h2>
                <p class="line-clamp-4">{post.body}</p>
            </div>
        </div>
    }
}

/// Grey stand-in for a card while posts are loading.
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class=CARD_CLASS data-skeleton="card">
            <div class="card-body">
                <div class="skeleton h-10 w-10 shrink-0 rounded-full"></div>
                <div class="skeleton h-7 w-3/5 mb-4"></div>
                {(0..4).map(|_| view! { <div class="skeleton h-5 w-full"></div> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SkeletonGrid(count: usize) -> impl IntoView {
    view! {
        <div class=CARD_GRID_CLASS>
            {(0..count).map(|_| view! { <SkeletonCard/> }).collect_view()}
        </div>
    }
}
