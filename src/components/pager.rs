use leptos::prelude::*;

use crate::board::pagination::{page_items, PageItem};

/// Numeric page selector. Only ever requests pages in `[1, page_count]`.
#[component]
pub fn Pager(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] page_count: Signal<usize>,
    #[prop(into)] on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || (page_count.get() > 0)>
            <nav class="flex justify-center mt-4" aria-label="pagination">
                <div class="join">
                    {move || {
                        page_items(page.get(), page_count.get())
                            .into_iter()
                            .map(|item| render_item(item, on_change))
                            .collect_view()
                    }}
                </div>
            </nav>
        </Show>
    }
}

fn render_item(item: PageItem, on_change: Callback<usize>) -> AnyView {
    match item {
        PageItem::Previous(target) => arrow("«", "Previous page", target, on_change),
        PageItem::Next(target) => arrow("»", "Next page", target, on_change),
        PageItem::Ellipsis => view! {
            <span class="join-item btn btn-disabled">"…"</span>
        }
        .into_any(),
        PageItem::Page { number, selected } => {
            let class = if selected {
                "join-item btn btn-primary"
            } else {
                "join-item btn"
            };
            view! {
                <button
                    class=class
                    aria-current=selected.then_some("page")
                    on:click=move |_| on_change.run(number)
                >
                    {number}
                </button>
            }
            .into_any()
        }
    }
}

fn arrow(
    label: &'static str,
    title: &'static str,
    target: Option<usize>,
    on_change: Callback<usize>,
) -> AnyView {
    view! {
        <button
            class="join-item btn"
            title=title
            disabled=target.is_none()
            on:click=move |_| {
                if let Some(page) = target {
                    on_change.run(page);
                }
            }
        >
            {label}
        </button>
    }
    .into_any()
}
