//! API gateway for the ReceitaFacil REST service
//!
//! Every remote capability the client uses goes through [`ApiClient`]: it
//! joins the configured base URL with the endpoint path, sends JSON, and
//! turns non-2xx statuses into [`AppError::Status`]. Failures are logged with
//! the endpoint before they reach the caller. Status semantics (404 meaning
//! "empty", 400 meaning "already exists") are left to the page controllers.
//!
//! # Endpoints
//!
//! ## Recipes
//! - `GET /recipes/search?name=` - Search by name
//! - `GET /recipes/categories` - Category list
//! - `GET /recipes/category/{name}` - Recipes in a category
//! - `GET /recipes/{id}` - Recipe detail with ingredients
//! - `GET /recipes/random` - Random recipe
//!
//! ## Users
//! - `POST /users/` - Create user
//! - `GET /users/{id}` - Fetch user
//!
//! ## Favorites
//! - `GET /favorites?user_id=` - List favorites
//! - `POST /favorites/` - Create favorite
//! - `DELETE /favorites/{id}` - Remove by favorite id
//! - `GET /favorites/check/{recipeId}?user_id=` - Favorite status
//! - `DELETE /favorites/recipe/{recipeId}?user_id=` - Remove by recipe id
//!
//! ## Shopping list
//! - `GET /shopping-list?user_id=` - List items
//! - `POST /shopping-list/` - Create item
//! - `PUT /shopping-list/{id}` - Partial update
//! - `DELETE /shopping-list/{id}` - Remove item
//! - `POST /shopping-list/add-recipe/{recipeId}?user_id=` - Bulk add ingredients
//! - `DELETE /shopping-list/clear/?user_id=` - Remove all items

#[cfg(feature = "native")]
pub mod reqwest_transport;
pub mod transport;

#[cfg(feature = "native")]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, TransportError};

use crate::types::{
    AddedIngredients, AppError, CategoriesEnvelope, Category, Favorite, FavoriteStatus,
    MealsEnvelope, NewFavorite, NewShoppingItem, NewUser, RandomEnvelope, RecipeDetail,
    RecipeDetailEnvelope, RecipeSummary, Result, ShoppingItem, ShoppingItemUpdate, User, UserId,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use tracing::{debug, error};

/// Characters left intact by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment or query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Typed client over an [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ============= Recipes =============

    pub async fn search_recipes(&self, name: &str) -> Result<Vec<RecipeSummary>> {
        let endpoint = format!("/recipes/search?name={}", encode_component(name));
        let envelope: MealsEnvelope = self.get(&endpoint).await?;
        Ok(envelope.meals.unwrap_or_default())
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        let envelope: CategoriesEnvelope = self.get("/recipes/categories").await?;
        Ok(envelope.categories.unwrap_or_default())
    }

    pub async fn recipes_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>> {
        let endpoint = format!("/recipes/category/{}", encode_component(category));
        let envelope: MealsEnvelope = self.get(&endpoint).await?;
        Ok(envelope.meals.unwrap_or_default())
    }

    /// Recipe detail; `None` when the service answers without a recipe.
    pub async fn recipe(&self, id: &str) -> Result<Option<RecipeDetail>> {
        let endpoint = format!("/recipes/{}", encode_component(id));
        let envelope: RecipeDetailEnvelope = self.get(&endpoint).await?;
        Ok(envelope.meal.map(|recipe| RecipeDetail {
            recipe,
            ingredients: envelope.ingredients.unwrap_or_default(),
        }))
    }

    pub async fn random_recipe(&self) -> Result<Option<RecipeSummary>> {
        let envelope: RandomEnvelope = self.get("/recipes/random").await?;
        Ok(envelope.meal)
    }

    // ============= Users =============

    pub async fn create_user(&self, user: &NewUser) -> Result<User> {
        self.send_json(Method::Post, "/users/", user).await
    }

    pub async fn user(&self, id: UserId) -> Result<User> {
        self.get(&format!("/users/{}", id)).await
    }

    // ============= Favorites =============

    pub async fn favorites(&self, user_id: UserId) -> Result<Vec<Favorite>> {
        self.get(&format!("/favorites?user_id={}", user_id)).await
    }

    pub async fn add_favorite(&self, favorite: &NewFavorite) -> Result<()> {
        let _: IgnoredAny = self.send_json(Method::Post, "/favorites/", favorite).await?;
        Ok(())
    }

    pub async fn remove_favorite(&self, favorite_id: i64) -> Result<()> {
        let endpoint = format!("/favorites/{}", favorite_id);
        let _: IgnoredAny = self.request(Method::Delete, &endpoint, None).await?;
        Ok(())
    }

    pub async fn check_favorite(&self, recipe_id: &str, user_id: UserId) -> Result<bool> {
        let endpoint = format!(
            "/favorites/check/{}?user_id={}",
            encode_component(recipe_id),
            user_id
        );
        let status: FavoriteStatus = self.get(&endpoint).await?;
        Ok(status.is_favorite)
    }

    pub async fn remove_favorite_by_recipe(&self, recipe_id: &str, user_id: UserId) -> Result<()> {
        let endpoint = format!(
            "/favorites/recipe/{}?user_id={}",
            encode_component(recipe_id),
            user_id
        );
        let _: IgnoredAny = self.request(Method::Delete, &endpoint, None).await?;
        Ok(())
    }

    // ============= Shopping List =============

    pub async fn shopping_list(&self, user_id: UserId) -> Result<Vec<ShoppingItem>> {
        self.get(&format!("/shopping-list?user_id={}", user_id)).await
    }

    pub async fn add_shopping_item(&self, item: &NewShoppingItem) -> Result<ShoppingItem> {
        self.send_json(Method::Post, "/shopping-list/", item).await
    }

    pub async fn update_shopping_item(&self, item_id: i64, update: &ShoppingItemUpdate) -> Result<()> {
        let endpoint = format!("/shopping-list/{}", item_id);
        let _: IgnoredAny = self.send_json(Method::Put, &endpoint, update).await?;
        Ok(())
    }

    pub async fn remove_shopping_item(&self, item_id: i64) -> Result<()> {
        let endpoint = format!("/shopping-list/{}", item_id);
        let _: IgnoredAny = self.request(Method::Delete, &endpoint, None).await?;
        Ok(())
    }

    pub async fn add_recipe_to_shopping_list(
        &self,
        recipe_id: &str,
        user_id: UserId,
    ) -> Result<AddedIngredients> {
        let endpoint = format!(
            "/shopping-list/add-recipe/{}?user_id={}",
            encode_component(recipe_id),
            user_id
        );
        self.request(Method::Post, &endpoint, None).await
    }

    pub async fn clear_shopping_list(&self, user_id: UserId) -> Result<()> {
        let endpoint = format!("/shopping-list/clear/?user_id={}", user_id);
        let _: IgnoredAny = self.request(Method::Delete, &endpoint, None).await?;
        Ok(())
    }

    // ============= Plumbing =============

    async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R> {
        self.request(Method::Get, endpoint, None).await
    }

    async fn send_json<B, R>(&self, method: Method, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(|e| {
            logged(AppError::Encode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
        })?;
        self.request(method, endpoint, Some(body)).await
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<R> {
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body,
        };

        debug!(%method, endpoint, "Calling API");

        let response = self.transport.send(request).await.map_err(|e| {
            logged(AppError::Transport {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
        })?;

        if !response.is_success() {
            return Err(logged(AppError::Status {
                endpoint: endpoint.to_string(),
                status: response.status,
            }));
        }

        // Empty bodies (204, bare DELETE acknowledgements) decode as JSON null.
        let body = match response.body.trim() {
            "" => "null",
            text => text,
        };

        serde_json::from_str(body).map_err(|e| {
            logged(AppError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
        })
    }
}

fn logged(err: AppError) -> AppError {
    let endpoint = match &err {
        AppError::Transport { endpoint, .. }
        | AppError::Status { endpoint, .. }
        | AppError::Decode { endpoint, .. }
        | AppError::Encode { endpoint, .. } => endpoint.as_str(),
        _ => "",
    };
    error!(endpoint, error = %err, "Error calling API");
    err
}
