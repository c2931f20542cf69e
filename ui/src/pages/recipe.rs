//! Recipe detail page

use crate::components::{Header, Loading};
use crate::state::{timeout_millis, AppState};
use easyrecipe::pages::detail::{
    add_recipe_ingredients, fetch_detail, toggle_favorite, MESSAGE_TIMEOUT, NOT_FOUND,
};
use easyrecipe::pages::{DetailView, RecipeDetailPage};
use easyrecipe::types::RecipeDetail;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

/// What the body shows. Kept separate so button state changes don't
/// rebuild the recipe markup.
#[derive(Debug, Clone, PartialEq)]
enum Stage {
    Loading,
    Failed(String),
    NotFound,
    Ready(RecipeDetail),
}

fn stage(page: &RecipeDetailPage) -> Stage {
    match page.view() {
        DetailView::Loading => Stage::Loading,
        DetailView::Failed(message) => Stage::Failed(message.to_string()),
        DetailView::NotFound => Stage::NotFound,
        DetailView::Ready(detail) => Stage::Ready(detail.clone()),
    }
}

fn expire_messages_later(model: RwSignal<RecipeDetailPage>) {
    spawn_local(async move {
        TimeoutFuture::new(timeout_millis(MESSAGE_TIMEOUT)).await;
        model.update(|m| m.expire_messages());
    });
}

/// Recipe detail with favorite and shopping-list actions
#[component]
pub fn RecipePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let params = use_params_map();
    let model = RwSignal::new(RecipeDetailPage::new(""));

    // Reload whenever the route id changes
    {
        let state = state.clone();
        Effect::new(move |_| {
            let recipe_id = params.read().get("id").unwrap_or_default();
            model.set(RecipeDetailPage::new(recipe_id.clone()));

            let identity = state.current_identity();
            let api = state.api.clone();
            spawn_local(async move {
                let outcome = fetch_detail(&api, &recipe_id, identity).await;
                model.update(|m| {
                    if m.recipe_id == recipe_id {
                        m.apply_load(outcome);
                    }
                });
            });
        });
    }

    let on_toggle_favorite = {
        let state = state.clone();
        move |_: MouseEvent| {
            let Some((recipe, currently)) = model.try_update(|m| m.begin_toggle_favorite()).flatten()
            else {
                return;
            };
            let state = state.clone();
            spawn_local(async move {
                let result = toggle_favorite(&state.api, &state.identity, &recipe, currently).await;
                model.update(|m| m.apply_toggle_favorite(result));
                expire_messages_later(model);
            });
        }
    };

    let on_add_to_list = {
        let state = state.clone();
        move |_: MouseEvent| {
            let Some(recipe_id) = model.try_update(|m| m.begin_add_to_list()).flatten() else {
                return;
            };
            let state = state.clone();
            spawn_local(async move {
                let result = add_recipe_ingredients(&state.api, &state.identity, &recipe_id).await;
                model.update(|m| m.apply_add_to_list(result));
                expire_messages_later(model);
            });
        }
    };

    let stage = Memo::new(move |_| model.with(stage));

    view! {
        <div class="page">
            <Header />

            <main class="container recipe-detail">
                <a href="/" class="back-link">"← Back to recipes"</a>

                {move || {
                    model
                        .with(|m| m.success.clone())
                        .map(|message| view! { <div class="message success">{message}</div> })
                }}
                {move || {
                    model
                        .with(|m| m.banner_error().map(String::from))
                        .map(|message| view! { <div class="message error">{message}</div> })
                }}

                {move || match stage.get() {
                    Stage::Loading => view! { <Loading message="Loading recipe..." /> }.into_any(),
                    Stage::Failed(message) => {
                        view! { <p class="message error">{message}</p> }.into_any()
                    }
                    Stage::NotFound => view! { <p class="message empty">{NOT_FOUND}</p> }.into_any(),
                    Stage::Ready(detail) => {
                        let on_toggle_favorite = on_toggle_favorite.clone();
                        let on_add_to_list = on_add_to_list.clone();
                        view! {
                            <RecipeBody detail=detail />
                            <div class="recipe-actions">
                                <button
                                    class=move || {
                                        if model.with(|m| m.is_favorite) {
                                            "btn btn-favorite active"
                                        } else {
                                            "btn btn-favorite"
                                        }
                                    }
                                    disabled=move || model.with(|m| m.favorite_pending)
                                    on:click=on_toggle_favorite
                                >
                                    {move || model.with(|m| m.favorite_label())}
                                </button>
                                <button
                                    class="btn btn-primary"
                                    disabled=move || model.with(|m| m.adding_to_list)
                                    on:click=on_add_to_list
                                >
                                    {move || model.with(|m| m.list_label())}
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}

/// Static recipe markup: image, badges, ingredients, instructions, video
#[component]
fn RecipeBody(detail: RecipeDetail) -> impl IntoView {
    let recipe = detail.recipe;
    let paragraphs: Vec<String> = recipe
        .instruction_paragraphs()
        .into_iter()
        .map(String::from)
        .collect();
    let embed_url = recipe.video_embed_url();
    let summary = recipe.summary;
    let alt = summary.title.clone();

    view! {
        <article class="recipe">
            <header class="recipe-header">
                {summary.thumbnail.map(|src| view! { <img class="recipe-image" src=src alt=alt /> })}
                <div>
                    <h1 class="recipe-title">{summary.title}</h1>
                    <div class="recipe-meta">
                        {summary.category.map(|c| view! { <span class="recipe-card-category">{c}</span> })}
                        {summary.area.map(|a| view! { <span class="recipe-card-area">{a}</span> })}
                    </div>
                </div>
            </header>

            <section class="recipe-ingredients">
                <h2>"Ingredients"</h2>
                <ul>
                    {detail
                        .ingredients
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <span class="measure">{item.measure.unwrap_or_default()}</span>
                                    " "
                                    <span class="ingredient">{item.ingredient}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="recipe-instructions">
                <h2>"Instructions"</h2>
                {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </section>

            {embed_url
                .map(|url| {
                    view! {
                        <section class="recipe-video">
                            <h2>"Video"</h2>
                            <iframe
                                src=url
                                width="560"
                                height="315"
                                title="Recipe video"
                                frameborder="0"
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            ></iframe>
                        </section>
                    }
                })}
        </article>
    }
}
