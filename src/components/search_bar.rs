use leptos::prelude::*;

/// Title search input. Every keystroke is reported through `on_search`.
#[component]
pub fn SearchBar(
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-container my-4">
            <label class="form-control w-full">
                <div class="label">
                    <span class="label-text">"Search by title"</span>
                </div>
                <input
                    type="text"
                    class="input input-bordered w-full"
                    placeholder="Search by title"
                    on:input=move |ev| on_search.run(event_target_value(&ev))
                    prop:value=query
                />
            </label>
        </div>
    }
}
