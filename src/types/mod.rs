use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============= Recipe Types =============

/// A recipe as it appears in search results, category listings and the
/// "recipe of the day" slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub title: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
}

/// Full recipe record returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(flatten)]
    pub summary: RecipeSummary,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub video_url: Option<String>,
}

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub ingredient: String,
    #[serde(default)]
    pub measure: Option<String>,
}

/// Recipe plus its ordered ingredients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
}

const VIDEO_ID_MARKER: &str = "v=";
const VIDEO_EMBED_BASE: &str = "https://www.youtube.com/embed/";

impl Recipe {
    /// Instructions split into paragraphs on `\r\n`, skipping blank ones.
    pub fn instruction_paragraphs(&self) -> Vec<&str> {
        self.instructions
            .as_deref()
            .unwrap_or_default()
            .split("\r\n")
            .filter(|p| !p.trim().is_empty())
            .collect()
    }

    /// Video id taken from the segment following the first `v=` marker.
    ///
    /// A second `v=` in the URL terminates the segment.
    pub fn video_id(&self) -> Option<&str> {
        let url = self.video_url.as_deref()?;
        let id = url.split(VIDEO_ID_MARKER).nth(1)?;
        (!id.is_empty()).then_some(id)
    }

    pub fn video_embed_url(&self) -> Option<String> {
        self.video_id().map(|id| format!("{VIDEO_EMBED_BASE}{id}"))
    }
}

// ============= Category Types =============

/// Recipe category. The API may send full records or bare names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "CategoryRecord")]
pub struct Category {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRecord {
    Name(String),
    Full {
        #[serde(rename = "idCategory", default)]
        id: Option<String>,
        #[serde(rename = "strCategory")]
        name: String,
    },
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        match record {
            CategoryRecord::Name(name) => Self { id: None, name },
            CategoryRecord::Full { id, name } => Self { id, name },
        }
    }
}

impl Category {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Stable key for list rendering: the id when present, else the name.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

// ============= Response Envelopes =============

#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<RecipeSummary>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RandomEnvelope {
    #[serde(default)]
    pub meal: Option<RecipeSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipeDetailEnvelope {
    #[serde(default)]
    pub meal: Option<Recipe>,
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct FavoriteStatus {
    #[serde(rename = "isFavorite", alias = "is_favorite")]
    pub is_favorite: bool,
}

/// Result of the bulk "add recipe ingredients" call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AddedIngredients {
    #[serde(alias = "itemsAdded", alias = "count", default)]
    pub items_added: u32,
}

// ============= Identity Types =============

/// Server-side user id held by the client as its identity token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(UserId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, alias = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

// ============= Favorite Types =============

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i64,
    #[serde(default, alias = "user_id", alias = "usuario_id")]
    pub user_id: Option<UserId>,
    #[serde(alias = "external_recipe_id", alias = "receita_id_externa")]
    pub external_recipe_id: String,
    #[serde(default, alias = "recipe_name", alias = "nome_receita")]
    pub recipe_name: String,
    #[serde(default, alias = "image_url", alias = "imagem_url")]
    pub image_url: Option<String>,
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
}

impl Favorite {
    /// Card view of the denormalized recipe reference.
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.external_recipe_id.clone(),
            title: self.recipe_name.clone(),
            thumbnail: self.image_url.clone(),
            category: self.category.clone(),
            area: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
    pub user_id: UserId,
    pub external_recipe_id: String,
    pub recipe_name: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl NewFavorite {
    pub fn for_recipe(user_id: UserId, recipe: &RecipeSummary) -> Self {
        Self {
            user_id,
            external_recipe_id: recipe.id.clone(),
            recipe_name: recipe.title.clone(),
            image_url: recipe.thumbnail.clone(),
            category: recipe.category.clone(),
        }
    }
}

// ============= Shopping List Types =============

/// Group label for items that did not come from a recipe.
pub const MANUAL_GROUP: &str = "Manual";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: i64,
    #[serde(default, alias = "user_id", alias = "usuario_id")]
    pub user_id: Option<UserId>,
    #[serde(alias = "ingrediente")]
    pub ingredient: String,
    #[serde(default, alias = "quantidade")]
    pub quantity: Option<String>,
    #[serde(default, alias = "comprado")]
    pub purchased: bool,
    #[serde(default, alias = "recipe_name", alias = "receita_nome")]
    pub recipe_name: Option<String>,
}

impl ShoppingItem {
    /// `quantity ingredient`, or just the ingredient when no quantity is set.
    pub fn display_line(&self) -> String {
        match self.quantity.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => format!("{} {}", q, self.ingredient),
            _ => self.ingredient.clone(),
        }
    }

    pub fn group_label(&self) -> &str {
        match self.recipe_name.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => MANUAL_GROUP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShoppingItem {
    pub user_id: UserId,
    pub ingredient: String,
    pub quantity: Option<String>,
}

/// Partial update body for `PUT /shopping-list/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShoppingItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl ShoppingItemUpdate {
    pub fn purchased(purchased: bool) -> Self {
        Self {
            purchased: Some(purchased),
            ..Self::default()
        }
    }
}

// ============= Error Types =============

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Network error calling {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    #[error("HTTP error! status: {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Failed to parse response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("Failed to serialize request for {endpoint}: {message}")]
    Encode { endpoint: String, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status carried by the error, if it came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(400)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
