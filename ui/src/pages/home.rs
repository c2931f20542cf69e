//! Home page: recipe of the day, categories, search

use crate::components::{CategoryList, Header, Loading, RecipeCard, SearchBar};
use crate::state::AppState;
use easyrecipe::pages::home::fetch_initial;
use easyrecipe::pages::{HomePage as HomeModel, ListingStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Listing page with search and category filters
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let model = RwSignal::new(HomeModel::new());

    // Initial load on mount
    let api = state.api.clone();
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let outcome = fetch_initial(&api).await;
            model.update(|m| m.apply_load(outcome));
        });
    });

    let on_search = {
        let api = state.api.clone();
        move |input: String| {
            let Some(term) = model.try_update(|m| m.begin_search(&input)).flatten() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.search_recipes(&term).await;
                model.update(|m| m.apply_search(&term, result));
            });
        }
    };

    let on_select = {
        let api = state.api.clone();
        move |category: Option<String>| {
            let Some(name) = model
                .try_update(|m| m.begin_category(category.as_deref()))
                .flatten()
            else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.recipes_by_category(&name).await;
                model.update(|m| m.apply_category(&name, result));
            });
        }
    };

    let categories = Signal::derive(move || model.with(|m| m.categories.clone()));
    let selected = Signal::derive(move || model.with(|m| m.selected_category().map(String::from)));
    let status = Memo::new(move |_| model.with(|m| m.status()));

    view! {
        <div class="page">
            <Header />

            <main class="container">
                <section class="hero">
                    <h1>"Discover delicious recipes"</h1>
                    <SearchBar on_search=on_search />
                </section>

                {move || {
                    model
                        .with(|m| m.featured().cloned())
                        .map(|recipe| {
                            view! {
                                <section class="featured">
                                    <h2 class="section-title">"Recipe of the Day"</h2>
                                    <RecipeCard recipe=recipe />
                                </section>
                            }
                        })
                }}

                <Show when=move || model.with(|m| m.show_categories())>
                    <section class="categories">
                        <h2 class="section-title">"Categories"</h2>
                        <CategoryList
                            categories=categories
                            selected=selected
                            on_select=on_select.clone()
                        />
                    </section>
                </Show>

                <section class="recipes">
                    {move || {
                        model
                            .with(|m| m.heading())
                            .map(|heading| view! { <h2 class="section-title">{heading}</h2> })
                    }}

                    {move || match status.get() {
                        ListingStatus::Loading => view! { <Loading /> }.into_any(),
                        ListingStatus::Error => {
                            view! {
                                <p class="message error">{model.with_untracked(|m| m.error.clone())}</p>
                            }
                                .into_any()
                        }
                        ListingStatus::Empty => {
                            view! { <p class="message empty">"No recipes to show."</p> }.into_any()
                        }
                        ListingStatus::Results => {
                            view! {
                                <div class="recipe-grid">
                                    {model
                                        .with_untracked(|m| m.visible_recipes().to_vec())
                                        .into_iter()
                                        .map(|recipe| view! { <RecipeCard recipe=recipe /> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>
            </main>
        </div>
    }
}
