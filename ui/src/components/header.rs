//! Header component

use easyrecipe::routes::{Route, NAV_LINKS};
use leptos::prelude::*;

/// Main application header
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-container">
                <a href=Route::Home.path() class="header-logo">
                    "EasyRecipe"
                </a>

                <nav class="header-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, route)| {
                            view! {
                                <a href=route.path() class="nav-link">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
