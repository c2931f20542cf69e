//! Loading indicator

use leptos::prelude::*;

/// Spinner with a caption. Styling comes from the `.loading` and
/// `.loading-spinner` classes.
#[component]
pub fn Loading(
    #[prop(default = "Loading...")] message: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading-spinner" aria-hidden="true"></span>
            <p class="loading-message">{message}</p>
        </div>
    }
}
