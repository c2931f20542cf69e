//! Favorites page controller

use crate::api::{ApiClient, HttpTransport};
use crate::types::{Favorite, Result, UserId};
use tracing::{debug, error};

pub const LOAD_ERROR: &str = "Error loading favorites.";
pub const REMOVE_ERROR: &str = "Error removing favorite.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesPage {
    pub identity: Option<UserId>,
    pub favorites: Vec<Favorite>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FavoritesPage {
    /// Page for the given identity; without one the page only shows a
    /// call-to-action and never fetches.
    pub fn new(identity: Option<UserId>) -> Self {
        Self {
            identity,
            favorites: Vec::new(),
            loading: identity.is_some(),
            error: None,
        }
    }

    pub fn needs_identity(&self) -> bool {
        self.identity.is_none()
    }

    pub fn begin_load(&mut self) -> Option<UserId> {
        let user_id = self.identity?;
        self.loading = true;
        self.error = None;
        Some(user_id)
    }

    /// 404 means the user has no favorites yet.
    pub fn apply_load(&mut self, result: Result<Vec<Favorite>>) {
        self.loading = false;
        match result {
            Ok(favorites) => self.favorites = favorites,
            Err(e) if e.is_not_found() => {
                debug!("No favorites stored yet");
                self.favorites.clear();
            }
            Err(e) => {
                error!(error = %e, "Error loading favorites");
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
    }

    pub async fn load<T: HttpTransport>(&mut self, api: &ApiClient<T>) {
        let Some(user_id) = self.begin_load() else {
            return;
        };
        let result = api.favorites(user_id).await;
        self.apply_load(result);
    }

    /// Splice the favorite out locally once the delete succeeded.
    pub fn apply_remove(&mut self, favorite_id: i64, result: Result<()>) {
        match result {
            Ok(()) => {
                self.error = None;
                self.favorites.retain(|f| f.id != favorite_id);
            }
            Err(e) => {
                error!(favorite_id, error = %e, "Error removing favorite");
                self.error = Some(REMOVE_ERROR.to_string());
            }
        }
    }

    pub async fn remove<T: HttpTransport>(&mut self, api: &ApiClient<T>, favorite_id: i64) {
        let result = api.remove_favorite(favorite_id).await;
        self.apply_remove(favorite_id, result);
    }

    /// Loaded, no error, nothing stored.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.favorites.is_empty()
    }
}
