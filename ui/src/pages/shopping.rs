//! Shopping list page

use crate::components::{Header, Loading};
use crate::state::{timeout_millis, AppState};
use easyrecipe::pages::detail::MESSAGE_TIMEOUT;
use easyrecipe::pages::shopping::CLEAR_CONFIRMATION;
use easyrecipe::pages::ShoppingPage as ShoppingModel;
use easyrecipe::routes::Route;
use easyrecipe::types::{ShoppingItem, ShoppingItemUpdate};
use gloo_timers::future::TimeoutFuture;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    NoIdentity,
    Loading,
    Ready,
}

/// Owned copy of one recipe group for rendering.
#[derive(Debug, Clone, PartialEq)]
struct GroupView {
    label: String,
    items: Vec<ShoppingItem>,
}

async fn write_clipboard(text: String) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    match JsFuture::from(promise).await {
        Ok(_) => true,
        Err(e) => {
            warn!(error = ?e, "Clipboard write rejected");
            false
        }
    }
}

fn confirm_clear() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(CLEAR_CONFIRMATION).ok())
        .unwrap_or(false)
}

/// Manual items and recipe ingredients, grouped by recipe
#[component]
pub fn ShoppingPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let model = RwSignal::new(ShoppingModel::new(state.current_identity()));

    {
        let api = state.api.clone();
        Effect::new(move |_| {
            let Some(user_id) = model.try_update(|m| m.begin_load()).flatten() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.shopping_list(user_id).await;
                model.update(|m| m.apply_load(result));
            });
        });
    }

    let on_add = {
        let api = state.api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(item) = model.try_update(|m| m.begin_add()).flatten() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.add_shopping_item(&item).await;
                model.update(|m| m.apply_add(result));
            });
        }
    };

    let on_toggle = {
        let api = state.api.clone();
        move |item_id: i64| {
            let Some(purchased) = model.with_untracked(|m| m.begin_toggle(item_id)) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api
                    .update_shopping_item(item_id, &ShoppingItemUpdate::purchased(purchased))
                    .await;
                model.update(|m| m.apply_toggle(item_id, purchased, result));
            });
        }
    };

    let on_remove = {
        let api = state.api.clone();
        move |item_id: i64| {
            let api = api.clone();
            spawn_local(async move {
                let result = api.remove_shopping_item(item_id).await;
                model.update(|m| m.apply_remove(item_id, result));
            });
        }
    };

    let on_copy = move |_: MouseEvent| {
        let text = model.with_untracked(|m| m.copy_text());
        spawn_local(async move {
            let copied = write_clipboard(text).await;
            model.update(|m| m.apply_copy(copied));
            if copied {
                TimeoutFuture::new(timeout_millis(MESSAGE_TIMEOUT)).await;
                model.update(|m| m.expire_notice());
            }
        });
    };

    let on_clear = {
        let api = state.api.clone();
        move |_: MouseEvent| {
            if !confirm_clear() {
                return;
            }
            let Some(user_id) = model.with_untracked(|m| m.identity) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.clear_shopping_list(user_id).await;
                model.update(|m| m.apply_clear(result));
            });
        }
    };

    let stage = Memo::new(move |_| {
        model.with(|m| {
            if m.needs_identity() {
                Stage::NoIdentity
            } else if m.loading {
                Stage::Loading
            } else {
                Stage::Ready
            }
        })
    });

    let groups = Memo::new(move |_| {
        model.with(|m| {
            m.groups()
                .into_iter()
                .map(|group| GroupView {
                    label: group.label.to_string(),
                    items: group.items.into_iter().cloned().collect(),
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page">
            <Header />

            <main class="container shopping-list">
                <h1 class="page-title">"Shopping List"</h1>

                {move || {
                    model
                        .with(|m| m.notice.clone())
                        .map(|message| view! { <div class="message success">{message}</div> })
                }}
                {move || {
                    model
                        .with(|m| m.error.clone())
                        .map(|message| view! { <div class="message error">{message}</div> })
                }}

                {move || match stage.get() {
                    Stage::NoIdentity => {
                        view! {
                            <div class="empty-state">
                                <p>"Your shopping list is empty."</p>
                                <a href=Route::Home.path() class="btn btn-primary">"Explore recipes"</a>
                            </div>
                        }
                            .into_any()
                    }
                    Stage::Loading => {
                        view! { <Loading message="Loading shopping list..." /> }.into_any()
                    }
                    Stage::Ready => {
                        let on_add = on_add.clone();
                        let on_toggle = on_toggle.clone();
                        let on_remove = on_remove.clone();
                        let on_clear = on_clear.clone();
                        view! {
                            <form class="add-item-form" on:submit=on_add>
                                <input
                                    type="text"
                                    class="input"
                                    placeholder="Ingredient"
                                    prop:value=move || model.with(|m| m.draft.ingredient.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        model.update(|m| m.draft.ingredient = value);
                                    }
                                />
                                <input
                                    type="text"
                                    class="input"
                                    placeholder="Quantity (optional)"
                                    prop:value=move || model.with(|m| m.draft.quantity.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        model.update(|m| m.draft.quantity = value);
                                    }
                                />
                                <button type="submit" class="btn btn-primary">"Add"</button>
                            </form>

                            <Show
                                when=move || !model.with(|m| m.items.is_empty())
                                fallback=|| {
                                    view! { <p class="message empty">"Your shopping list is empty."</p> }
                                }
                            >
                                <div class="list-toolbar">
                                    <span class="pending-count">
                                        {move || format!("{} item(s) left", model.with(|m| m.pending_count()))}
                                    </span>
                                    <button class="btn" on:click=on_copy>"Copy list"</button>
                                    <button class="btn btn-danger" on:click=on_clear.clone()>
                                        "Clear list"
                                    </button>
                                </div>

                                {
                                    let on_toggle = on_toggle.clone();
                                    let on_remove = on_remove.clone();
                                    move || {
                                        groups
                                            .get()
                                            .into_iter()
                                            .map(|group| {
                                                view! {
                                                    <ItemGroupView
                                                        group=group
                                                        on_toggle=on_toggle.clone()
                                                        on_remove=on_remove.clone()
                                                    />
                                                }
                                            })
                                            .collect_view()
                                    }
                                }
                            </Show>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn ItemGroupView(
    group: GroupView,
    on_toggle: impl Fn(i64) + Clone + 'static,
    on_remove: impl Fn(i64) + Clone + 'static,
) -> impl IntoView {
    view! {
        <section class="item-group">
            <h2 class="section-title">{group.label}</h2>
            <ul class="items">
                {group
                    .items
                    .into_iter()
                    .map(|item| {
                        let item_id = item.id;
                        let on_toggle = on_toggle.clone();
                        let on_remove = on_remove.clone();
                        view! {
                            <li class=if item.purchased { "item purchased" } else { "item" }>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=item.purchased
                                        on:change=move |_| on_toggle(item_id)
                                    />
                                    <span>{item.display_line()}</span>
                                </label>
                                <button class="btn btn-small" on:click=move |_| on_remove(item_id)>
                                    "Remove"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
