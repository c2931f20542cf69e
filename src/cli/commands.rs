//! Command handlers
//!
//! Each subcommand drives the page controller the browser UI uses for the
//! same screen and prints its state. Handlers return `false` when the page
//! ended in an error, which the binary turns into a failing exit code.

use super::output::Output;
use super::{Cli, Commands, FavoritesCommands, ShoppingCommands};
use crate::api::{ApiClient, HttpTransport};
use crate::config::ClientConfig;
use crate::identity::{current_identity, FileIdentityStore, IdentityStore};
use crate::pages::detail::{self, add_recipe_ingredients};
use crate::pages::shopping::CLEAR_CONFIRMATION;
use crate::pages::{
    DetailView, FavoritesPage, HomePage, ItemDraft, ListingStatus, RecipeDetailPage, ShoppingPage,
};
use crate::types::RecipeDetail;
use tracing::debug;

/// Printed when a command changes data but no identity is stored.
const NO_IDENTITY: &str = "No identity stored yet. Nothing was changed.";

/// Run the parsed command against the configured API.
pub async fn run(cli: &Cli, config: &ClientConfig, output: &Output) -> bool {
    let api = ApiClient::from_config(config);
    let store = FileIdentityStore::new(&config.storage.identity_file);
    debug!(api = %api.base_url(), identity_file = %store.path().display(), "Running command");

    match &cli.command {
        Commands::Home => home(&api, output).await,
        Commands::Search { term } => search(&api, term, output).await,
        Commands::Category { name } => category(&api, name, output).await,
        Commands::Show { id } => show(&api, &store, id, output).await,
        Commands::Favorite { id } => favorite(&api, &store, id, output).await,
        Commands::Favorites(cmd) => favorites(&api, &store, cmd, output).await,
        Commands::Shopping(cmd) => shopping(&api, &store, cmd, output).await,
        Commands::Whoami => whoami(&api, &store, output).await,
    }
}

// ============= Listing =============

async fn home<T: HttpTransport>(api: &ApiClient<T>, output: &Output) -> bool {
    let mut page = HomePage::new();
    page.load(api).await;

    output.banner();
    if let Some(featured) = page.featured() {
        output.header("Recipe of the Day");
        output.recipe(featured);
    }
    if page.show_categories() {
        output.header("Categories");
        let names: Vec<&str> = page.categories.iter().map(|c| c.name.as_str()).collect();
        output.paragraph(&names.join(", "));
    }
    render_listing(&page, output)
}

async fn search<T: HttpTransport>(api: &ApiClient<T>, term: &str, output: &Output) -> bool {
    let mut page = HomePage::new();
    page.loading = false;
    page.search(api, term).await;
    if page.search_term().is_none() {
        output.warning("Enter a search term.");
        return false;
    }
    render_listing(&page, output)
}

async fn category<T: HttpTransport>(api: &ApiClient<T>, name: &str, output: &Output) -> bool {
    let mut page = HomePage::new();
    page.select_category(api, Some(name.trim())).await;
    render_listing(&page, output)
}

fn render_listing(page: &HomePage, output: &Output) -> bool {
    if let Some(heading) = page.heading() {
        output.header(&heading);
    }
    match page.status() {
        ListingStatus::Results => {
            for recipe in page.visible_recipes() {
                output.recipe(recipe);
            }
            output.hint("Open a recipe with `easyrecipe show <id>`");
            true
        }
        ListingStatus::Empty => {
            output.info("No recipes to show.");
            true
        }
        ListingStatus::Error => {
            output.error(page.error.as_deref().unwrap_or_default());
            false
        }
        ListingStatus::Loading => false,
    }
}

// ============= Recipe detail =============

async fn load_detail<T: HttpTransport>(
    api: &ApiClient<T>,
    store: &impl IdentityStore,
    id: &str,
    output: &Output,
) -> Option<RecipeDetailPage> {
    let mut page = RecipeDetailPage::new(id.trim());
    page.load(api, current_identity(store)).await;

    match page.view() {
        DetailView::Ready(_) => Some(page),
        DetailView::Failed(message) => {
            output.error(message);
            None
        }
        DetailView::NotFound => {
            output.warning(detail::NOT_FOUND);
            None
        }
        DetailView::Loading => None,
    }
}

async fn show<T: HttpTransport>(
    api: &ApiClient<T>,
    store: &impl IdentityStore,
    id: &str,
    output: &Output,
) -> bool {
    let Some(page) = load_detail(api, store, id, output).await else {
        return false;
    };
    if let DetailView::Ready(detail) = page.view() {
        render_detail(detail, page.is_favorite, output);
    }
    true
}

fn render_detail(detail: &RecipeDetail, is_favorite: bool, output: &Output) {
    let summary = &detail.recipe.summary;
    output.header(&summary.title);
    output.kv("Id", &summary.id);
    if let Some(category) = summary.category.as_deref() {
        output.kv("Category", category);
    }
    if let Some(area) = summary.area.as_deref() {
        output.kv("Area", area);
    }
    output.kv("Favorite", if is_favorite { "yes" } else { "no" });

    output.subheader("Ingredients");
    for ingredient in &detail.ingredients {
        let line = match ingredient.measure.as_deref().map(str::trim) {
            Some(measure) if !measure.is_empty() => {
                format!("{} {}", measure, ingredient.ingredient)
            }
            _ => ingredient.ingredient.clone(),
        };
        output.list_item(&line);
    }

    let paragraphs = detail.recipe.instruction_paragraphs();
    if !paragraphs.is_empty() {
        output.subheader("Instructions");
        for paragraph in paragraphs {
            output.paragraph(paragraph);
            output.newline();
        }
    }

    if let Some(url) = detail.recipe.video_embed_url() {
        output.subheader("Video");
        output.paragraph(&url);
    }
}

async fn favorite<T: HttpTransport>(
    api: &ApiClient<T>,
    store: &impl IdentityStore,
    id: &str,
    output: &Output,
) -> bool {
    let Some(mut page) = load_detail(api, store, id, output).await else {
        return false;
    };
    page.toggle_favorite(api, store).await;

    if let Some(message) = page.banner_error() {
        output.error(message);
        return false;
    }
    if let Some(message) = page.success.as_deref() {
        output.success(message);
    }
    true
}

// ============= Favorites =============

async fn favorites<T: HttpTransport>(
    api: &ApiClient<T>,
    store: &impl IdentityStore,
    cmd: &FavoritesCommands,
    output: &Output,
) -> bool {
    let mut page = FavoritesPage::new(current_identity(store));
    if page.needs_identity() {
        let read_only = matches!(cmd, FavoritesCommands::List);
        if read_only {
            output.info("You have no favorites yet.");
        } else {
            output.error(NO_IDENTITY);
        }
        output.hint("Save one with `easyrecipe favorite <recipe-id>`");
        return read_only;
    }

    match cmd {
        FavoritesCommands::List => {
            page.load(api).await;
            if let Some(message) = page.error.as_deref() {
                output.error(message);
                return false;
            }
            output.header("My Favorites");
            if page.is_empty() {
                output.info("You have no favorites yet.");
                return true;
            }
            output.table_header(&["Id", "Recipe", "Title"]);
            for favorite in &page.favorites {
                output.table_row(&[
                    favorite.id.to_string().as_str(),
                    favorite.external_recipe_id.as_str(),
                    favorite.recipe_name.as_str(),
                ]);
            }
            true
        }
        FavoritesCommands::Remove { id } => {
            page.remove(api, *id).await;
            match page.error.as_deref() {
                Some(message) => {
                    output.error(message);
                    false
                }
                None => {
                    output.success("Removed from favorites!");
                    true
                }
            }
        }
    }
}

// ============= Shopping list =============

async fn shopping<T: HttpTransport>(
    api: &ApiClient<T>,
    store: &impl IdentityStore,
    cmd: &ShoppingCommands,
    output: &Output,
) -> bool {
    // Bulk add provisions an identity; everything else is gated on one.
    if let ShoppingCommands::AddRecipe { id } = cmd {
        return match add_recipe_ingredients(api, store, id.trim()).await {
            Ok(added) => {
                output.success(&format!(
                    "Added {} ingredients to shopping list!",
                    added.items_added
                ));
                true
            }
            Err(e) => {
                debug!(error = %e, "Bulk add failed");
                output.error(detail::ADD_TO_LIST_ERROR);
                false
            }
        };
    }

    let mut page = ShoppingPage::new(current_identity(store));
    if page.needs_identity() {
        let read_only = matches!(cmd, ShoppingCommands::List | ShoppingCommands::Copy);
        if read_only {
            output.info("Your shopping list is empty.");
        } else {
            output.error(NO_IDENTITY);
        }
        output.hint("Add a recipe's ingredients with `easyrecipe shopping add-recipe <recipe-id>`");
        return read_only;
    }

    match cmd {
        ShoppingCommands::List => {
            page.load(api).await;
            if page.error.is_none() {
                render_shopping(&page, output);
            }
        }
        ShoppingCommands::Add {
            ingredient,
            quantity,
        } => {
            page.draft = ItemDraft::new(ingredient.as_str(), quantity.clone().unwrap_or_default());
            page.add(api).await;
            if let Some(item) = page.items.last() {
                output.success(&format!("Added {}", item.display_line()));
            }
        }
        ShoppingCommands::Toggle { id } => {
            page.load(api).await;
            if page.error.is_none() {
                if page.begin_toggle(*id).is_none() {
                    output.warning(&format!("No item with id {}", id));
                    return false;
                }
                page.toggle(api, *id).await;
                if let Some(item) = page.items.iter().find(|item| item.id == *id) {
                    if page.error.is_none() {
                        output.shopping_item(item);
                    }
                }
            }
        }
        ShoppingCommands::Remove { id } => {
            page.remove(api, *id).await;
            if page.error.is_none() {
                output.success("Item removed.");
            }
        }
        ShoppingCommands::Clear { yes } => {
            if !*yes && !output.confirm(CLEAR_CONFIRMATION) {
                output.info("Nothing changed.");
                return true;
            }
            page.clear(api).await;
            if page.error.is_none() {
                output.success("Shopping list cleared.");
            }
        }
        ShoppingCommands::Copy => {
            page.load(api).await;
            if page.error.is_none() {
                println!("{}", page.copy_text());
            }
        }
        ShoppingCommands::AddRecipe { .. } => {}
    }

    match page.error.as_deref() {
        Some(message) => {
            output.error(message);
            false
        }
        None => true,
    }
}

fn render_shopping(page: &ShoppingPage, output: &Output) {
    output.header("Shopping List");
    if page.is_empty() {
        output.info("Your shopping list is empty.");
        return;
    }
    for group in page.groups() {
        output.subheader(group.label);
        for item in group.items {
            output.shopping_item(item);
        }
    }
    output.newline();
    output.kv("Pending", &page.pending_count().to_string());
}

// ============= Identity =============

async fn whoami<T: HttpTransport>(
    api: &ApiClient<T>,
    store: &FileIdentityStore,
    output: &Output,
) -> bool {
    let Some(user_id) = current_identity(store) else {
        output.info("No identity stored yet. One is created on the first favorite or shopping list change.");
        return true;
    };

    output.kv("User id", &user_id.to_string());
    output.kv("Stored in", &store.path().display().to_string());
    match api.user(user_id).await {
        Ok(user) => {
            output.kv("Name", &user.name);
            output.kv("Email", &user.email);
        }
        Err(e) => output.warning(&format!("Could not fetch user record: {}", e)),
    }
    true
}
