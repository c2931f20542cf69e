//! Search bar component

use easyrecipe::pages::home::normalize_search_term;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Submits the trimmed term; blank input is ignored.
#[component]
pub fn SearchBar(
    /// Called with the trimmed search term
    on_search: impl Fn(String) + 'static,
    /// Placeholder text
    #[prop(default = "Search recipes...")]
    placeholder: &'static str,
) -> impl IntoView {
    let value = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(term) = normalize_search_term(&value.get_untracked()) {
            on_search(term);
        }
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="text"
                class="search-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button type="submit" class="search-button">
                "Search"
            </button>
        </form>
    }
}
