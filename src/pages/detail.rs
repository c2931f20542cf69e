//! Recipe detail page controller

use crate::api::{ApiClient, HttpTransport};
use crate::identity::{get_or_create_identity, IdentityStore};
use crate::types::{AddedIngredients, NewFavorite, RecipeDetail, RecipeSummary, Result, UserId};
use std::time::Duration;
use tracing::{error, warn};

/// How long success and error messages stay visible.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(3);

pub const LOAD_ERROR: &str = "Error loading recipe.";
pub const NOT_FOUND: &str = "Recipe not found.";
pub const ALREADY_FAVORITE: &str = "Recipe is already in favorites.";
pub const FAVORITE_ERROR: &str = "Error updating favorites.";
pub const ADD_TO_LIST_ERROR: &str = "Error adding to shopping list.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// What the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView<'a> {
    Loading,
    /// Blocking error: nothing was loaded.
    Failed(&'a str),
    NotFound,
    Ready(&'a RecipeDetail),
}

#[derive(Debug)]
pub struct DetailLoad {
    pub detail: Option<RecipeDetail>,
    pub is_favorite: bool,
}

/// Fetch the recipe and, when an identity exists, its favorite status.
/// A failed status check is logged and reads as "not a favorite".
pub async fn fetch_detail<T: HttpTransport>(
    api: &ApiClient<T>,
    recipe_id: &str,
    identity: Option<UserId>,
) -> Result<DetailLoad> {
    let detail = api.recipe(recipe_id).await?;

    let mut is_favorite = false;
    if let Some(user_id) = identity {
        match api.check_favorite(recipe_id, user_id).await {
            Ok(status) => is_favorite = status,
            Err(e) => warn!(recipe_id, error = %e, "Error checking favorite status"),
        }
    }

    Ok(DetailLoad {
        detail,
        is_favorite,
    })
}

/// Remove or create the favorite for `recipe`, provisioning an identity
/// first if needed.
pub async fn toggle_favorite<T, S>(
    api: &ApiClient<T>,
    store: &S,
    recipe: &RecipeSummary,
    currently_favorite: bool,
) -> Result<FavoriteChange>
where
    T: HttpTransport,
    S: IdentityStore + ?Sized,
{
    let user_id = get_or_create_identity(api, store).await?;

    if currently_favorite {
        api.remove_favorite_by_recipe(&recipe.id, user_id).await?;
        Ok(FavoriteChange::Removed)
    } else {
        api.add_favorite(&NewFavorite::for_recipe(user_id, recipe))
            .await?;
        Ok(FavoriteChange::Added)
    }
}

/// Bulk-add a recipe's ingredients to the shopping list.
pub async fn add_recipe_ingredients<T, S>(
    api: &ApiClient<T>,
    store: &S,
    recipe_id: &str,
) -> Result<AddedIngredients>
where
    T: HttpTransport,
    S: IdentityStore + ?Sized,
{
    let user_id = get_or_create_identity(api, store).await?;
    api.add_recipe_to_shopping_list(recipe_id, user_id).await
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetailPage {
    pub recipe_id: String,
    pub detail: Option<RecipeDetail>,
    pub is_favorite: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub favorite_pending: bool,
    pub adding_to_list: bool,
}

impl RecipeDetailPage {
    pub fn new(recipe_id: impl Into<String>) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            detail: None,
            is_favorite: false,
            loading: true,
            error: None,
            success: None,
            favorite_pending: false,
            adding_to_list: false,
        }
    }

    // ============= Load =============

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_load(&mut self, outcome: Result<DetailLoad>) {
        self.loading = false;
        match outcome {
            Ok(load) => {
                self.detail = load.detail;
                self.is_favorite = load.is_favorite;
            }
            Err(e) => {
                error!(recipe_id = %self.recipe_id, error = %e, "Error loading recipe");
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
    }

    pub async fn load<T: HttpTransport>(&mut self, api: &ApiClient<T>, identity: Option<UserId>) {
        self.begin_load();
        let outcome = fetch_detail(api, &self.recipe_id, identity).await;
        self.apply_load(outcome);
    }

    // ============= Favorite =============

    /// Mark the favorite action as pending. Returns the recipe and its
    /// current favorite flag, or `None` when no recipe is loaded or the
    /// action is already running.
    pub fn begin_toggle_favorite(&mut self) -> Option<(RecipeSummary, bool)> {
        if self.favorite_pending {
            return None;
        }
        let summary = self.detail.as_ref()?.recipe.summary.clone();
        self.favorite_pending = true;
        self.error = None;
        Some((summary, self.is_favorite))
    }

    /// The flag flips only once the server confirmed the change.
    pub fn apply_toggle_favorite(&mut self, result: Result<FavoriteChange>) {
        self.favorite_pending = false;
        match result {
            Ok(FavoriteChange::Added) => {
                self.is_favorite = true;
                self.success = Some("Added to favorites!".to_string());
            }
            Ok(FavoriteChange::Removed) => {
                self.is_favorite = false;
                self.success = Some("Removed from favorites!".to_string());
            }
            Err(e) => {
                error!(recipe_id = %self.recipe_id, error = %e, "Error updating favorites");
                let message = if e.is_bad_request() {
                    ALREADY_FAVORITE
                } else {
                    FAVORITE_ERROR
                };
                self.error = Some(message.to_string());
            }
        }
    }

    pub async fn toggle_favorite<T, S>(&mut self, api: &ApiClient<T>, store: &S)
    where
        T: HttpTransport,
        S: IdentityStore + ?Sized,
    {
        let Some((recipe, currently)) = self.begin_toggle_favorite() else {
            return;
        };
        let result = toggle_favorite(api, store, &recipe, currently).await;
        self.apply_toggle_favorite(result);
    }

    // ============= Shopping list =============

    /// Returns the recipe id to add, or `None` when already running.
    pub fn begin_add_to_list(&mut self) -> Option<String> {
        if self.adding_to_list {
            return None;
        }
        self.adding_to_list = true;
        self.success = None;
        self.error = None;
        Some(self.recipe_id.clone())
    }

    pub fn apply_add_to_list(&mut self, result: Result<AddedIngredients>) {
        self.adding_to_list = false;
        match result {
            Ok(added) => {
                self.success = Some(format!(
                    "Added {} ingredients to shopping list!",
                    added.items_added
                ));
            }
            Err(e) => {
                error!(recipe_id = %self.recipe_id, error = %e, "Error adding to shopping list");
                self.error = Some(ADD_TO_LIST_ERROR.to_string());
            }
        }
    }

    pub async fn add_to_shopping_list<T, S>(&mut self, api: &ApiClient<T>, store: &S)
    where
        T: HttpTransport,
        S: IdentityStore + ?Sized,
    {
        let Some(recipe_id) = self.begin_add_to_list() else {
            return;
        };
        let result = add_recipe_ingredients(api, store, &recipe_id).await;
        self.apply_add_to_list(result);
    }

    // ============= Messages =============

    /// Drop transient messages after [`MESSAGE_TIMEOUT`]. The blocking load
    /// error stays while no recipe is loaded.
    pub fn expire_messages(&mut self) {
        self.success = None;
        if self.detail.is_some() {
            self.error = None;
        }
    }

    // ============= View helpers =============

    pub fn view(&self) -> DetailView<'_> {
        if self.loading {
            return DetailView::Loading;
        }
        match (&self.detail, &self.error) {
            (Some(detail), _) => DetailView::Ready(detail),
            (None, Some(error)) => DetailView::Failed(error),
            (None, None) => DetailView::NotFound,
        }
    }

    /// Action error or success banner, shown next to a loaded recipe.
    pub fn banner_error(&self) -> Option<&str> {
        self.detail.as_ref().and(self.error.as_deref())
    }

    pub fn favorite_label(&self) -> &'static str {
        if self.favorite_pending {
            "Saving..."
        } else if self.is_favorite {
            "Remove Favorite"
        } else {
            "Add to Favorites"
        }
    }

    pub fn list_label(&self) -> &'static str {
        if self.adding_to_list {
            "Adding..."
        } else {
            "Add to List"
        }
    }
}
