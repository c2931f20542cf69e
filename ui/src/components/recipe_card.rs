//! Recipe card component

use easyrecipe::routes::Route;
use easyrecipe::types::RecipeSummary;
use leptos::prelude::*;

/// Card linking to a recipe's detail page
#[component]
pub fn RecipeCard(recipe: RecipeSummary) -> impl IntoView {
    let href = Route::Recipe(recipe.id.clone()).path();
    let RecipeSummary {
        title,
        thumbnail,
        category,
        area,
        ..
    } = recipe;
    let alt = title.clone();

    view! {
        <a href=href class="recipe-card">
            <div class="recipe-card-image">
                {thumbnail.map(|src| view! { <img src=src alt=alt loading="lazy" /> })}
            </div>
            <div class="recipe-card-content">
                <h3 class="recipe-card-title">{title}</h3>
                <div class="recipe-card-meta">
                    {category
                        .filter(|c| !c.is_empty())
                        .map(|c| view! { <span class="recipe-card-category">{c}</span> })}
                    {area
                        .filter(|a| !a.is_empty())
                        .map(|a| view! { <span class="recipe-card-area">{a}</span> })}
                </div>
            </div>
        </a>
    }
}
