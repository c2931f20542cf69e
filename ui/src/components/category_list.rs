//! Category filter list

use easyrecipe::types::Category;
use leptos::prelude::*;

fn chip_class(active: bool) -> &'static str {
    if active {
        "category-item active"
    } else {
        "category-item"
    }
}

/// "All" followed by one entry per category. Selecting "All" reports `None`.
#[component]
pub fn CategoryList(
    /// Categories to show
    #[prop(into)]
    categories: Signal<Vec<Category>>,
    /// Currently selected category name
    #[prop(into)]
    selected: Signal<Option<String>>,
    /// Called with the chosen category, or `None` for "All"
    on_select: impl Fn(Option<String>) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let on_all = {
        let on_select = on_select.clone();
        move |_| on_select(None)
    };

    view! {
        <div class="category-list">
            <button
                class=move || chip_class(selected.get().is_none())
                on:click=on_all
            >
                "All"
            </button>
            <For
                each=move || categories.get()
                key=|category| category.key().to_string()
                children=move |category| {
                    let name = category.name;
                    let is_active = {
                        let name = name.clone();
                        move || selected.get().as_deref() == Some(name.as_str())
                    };
                    let on_click = {
                        let name = name.clone();
                        let on_select = on_select.clone();
                        move |_| on_select(Some(name.clone()))
                    };
                    view! {
                        <button class=move || chip_class(is_active()) on:click=on_click>
                            {name}
                        </button>
                    }
                }
            />
        </div>
    }
}
