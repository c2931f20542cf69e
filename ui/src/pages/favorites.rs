//! Favorites page

use crate::components::{Header, Loading, RecipeCard};
use crate::state::AppState;
use easyrecipe::pages::FavoritesPage as FavoritesModel;
use easyrecipe::routes::Route;
use easyrecipe::types::Favorite;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Loading,
    Empty,
    List,
}

/// Saved recipes for the current identity
#[component]
pub fn FavoritesPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let model = RwSignal::new(FavoritesModel::new(state.current_identity()));

    {
        let api = state.api.clone();
        Effect::new(move |_| {
            let Some(user_id) = model.try_update(|m| m.begin_load()).flatten() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.favorites(user_id).await;
                model.update(|m| m.apply_load(result));
            });
        });
    }

    let on_remove = {
        let api = state.api.clone();
        move |favorite_id: i64| {
            let api = api.clone();
            spawn_local(async move {
                let result = api.remove_favorite(favorite_id).await;
                model.update(|m| m.apply_remove(favorite_id, result));
            });
        }
    };

    let stage = Memo::new(move |_| {
        model.with(|m| {
            if m.loading {
                Stage::Loading
            } else if m.needs_identity() || m.favorites.is_empty() {
                Stage::Empty
            } else {
                Stage::List
            }
        })
    });

    view! {
        <div class="page">
            <Header />

            <main class="container">
                <h1 class="page-title">"My Favorites"</h1>

                {move || {
                    model
                        .with(|m| m.error.clone())
                        .map(|message| view! { <div class="message error">{message}</div> })
                }}

                {move || match stage.get() {
                    Stage::Loading => view! { <Loading message="Loading favorites..." /> }.into_any(),
                    Stage::Empty => {
                        view! {
                            <div class="empty-state">
                                <p>"You have no favorites yet."</p>
                                <a href=Route::Home.path() class="btn btn-primary">"Explore recipes"</a>
                            </div>
                        }
                            .into_any()
                    }
                    Stage::List => {
                        let on_remove = on_remove.clone();
                        view! {
                            <div class="recipe-grid">
                                <For
                                    each=move || model.with(|m| m.favorites.clone())
                                    key=|favorite: &Favorite| favorite.id
                                    let:favorite
                                >
                                    <FavoriteCard favorite=favorite on_remove=on_remove.clone() />
                                </For>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn FavoriteCard(
    favorite: Favorite,
    on_remove: impl Fn(i64) + 'static,
) -> impl IntoView {
    let favorite_id = favorite.id;

    view! {
        <div class="favorite-card">
            <RecipeCard recipe=favorite.summary() />
            <button class="btn btn-danger" on:click=move |_| on_remove(favorite_id)>
                "Remove"
            </button>
        </div>
    }
}
