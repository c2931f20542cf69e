//! EasyRecipe UI - Leptos frontend
//!
//! Browse recipes, keep favorites and build a shopping list against the
//! EasyRecipe REST API. Page logic lives in the `easyrecipe` crate; this
//! crate renders it and supplies the browser transport and storage.

pub mod api;
pub mod components;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::{FavoritesPage, HomePage, RecipePage, ShoppingPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new());

    view! {
        <Title text="EasyRecipe" />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/recipe/:id") view=RecipePage />
                <Route path=path!("/favorites") view=FavoritesPage />
                <Route path=path!("/shopping-list") view=ShoppingPage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/" class="btn btn-primary">"Go Home"</a>
        </div>
    }
}
