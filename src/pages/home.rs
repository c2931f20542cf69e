//! Listing/search page controller

use crate::api::{ApiClient, HttpTransport};
use crate::types::{Category, RecipeSummary, Result};
use tracing::{debug, error};

pub const LOAD_ERROR: &str = "Error loading data. Check if the API is running.";
pub const SEARCH_ERROR: &str = "Error searching recipes.";
pub const CATEGORY_ERROR: &str = "Error loading category.";

/// The single active filter. Choosing one clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    None,
    Search(String),
    Category(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Loading,
    Results,
    Empty,
    Error,
}

/// Data gathered on mount.
#[derive(Debug)]
pub struct InitialListing {
    pub categories: Vec<Category>,
    pub featured: Option<RecipeSummary>,
    /// First category and the outcome of fetching its recipes.
    pub default_category: Option<(String, Result<Vec<RecipeSummary>>)>,
}

/// Categories and the random recipe are fetched together; the first
/// category's recipes are fetched once the category list is known.
pub async fn fetch_initial<T: HttpTransport>(api: &ApiClient<T>) -> Result<InitialListing> {
    let (categories, featured) = futures::try_join!(api.categories(), api.random_recipe())?;

    let default_category = match categories.first() {
        Some(first) => {
            let name = first.name.clone();
            let recipes = api.recipes_by_category(&name).await;
            Some((name, recipes))
        }
        None => None,
    };

    Ok(InitialListing {
        categories,
        featured,
        default_category,
    })
}

/// Trimmed search term, or `None` for blank input.
pub fn normalize_search_term(input: &str) -> Option<String> {
    let term = input.trim();
    (!term.is_empty()).then(|| term.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub recipes: Vec<RecipeSummary>,
    pub categories: Vec<Category>,
    pub featured: Option<RecipeSummary>,
    pub filter: ActiveFilter,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            recipes: Vec::new(),
            categories: Vec::new(),
            featured: None,
            filter: ActiveFilter::None,
            loading: true,
            error: None,
        }
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    // ============= Initial load =============

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Categories and the featured recipe are always kept. The default
    /// category listing is only adopted while no filter is active, so a
    /// search or category picked during the load keeps its own results.
    pub fn apply_load(&mut self, outcome: Result<InitialListing>) {
        let user_filtered = self.filter != ActiveFilter::None;

        let listing = match outcome {
            Ok(listing) => listing,
            Err(e) => {
                error!(error = %e, "Initial listing failed");
                if !user_filtered {
                    self.loading = false;
                    self.error = Some(LOAD_ERROR.to_string());
                }
                return;
            }
        };

        self.categories = listing.categories;
        self.featured = listing.featured;
        if user_filtered {
            debug!("Filter chosen during initial load, keeping it");
            return;
        }
        self.loading = false;

        match listing.default_category {
            Some((name, Ok(recipes))) => {
                self.recipes = recipes;
                self.filter = ActiveFilter::Category(name);
            }
            Some((name, Err(e))) => {
                error!(category = %name, error = %e, "Default category failed");
                self.error = Some(LOAD_ERROR.to_string());
            }
            None => {}
        }
    }

    pub async fn load<T: HttpTransport>(&mut self, api: &ApiClient<T>) {
        self.begin_load();
        let outcome = fetch_initial(api).await;
        self.apply_load(outcome);
    }

    // ============= Search =============

    /// Start a search. Returns the term to fetch, or `None` when the input
    /// is blank and nothing changes.
    pub fn begin_search(&mut self, input: &str) -> Option<String> {
        let term = normalize_search_term(input)?;
        self.loading = true;
        self.error = None;
        self.filter = ActiveFilter::Search(term.clone());
        Some(term)
    }

    pub fn apply_search(&mut self, term: &str, result: Result<Vec<RecipeSummary>>) {
        // A newer filter superseded this request.
        if self.filter != ActiveFilter::Search(term.to_string()) {
            return;
        }
        self.loading = false;

        match result {
            Ok(recipes) => {
                if recipes.is_empty() {
                    self.error = Some(format!("No recipes found for \"{}\"", term));
                }
                self.recipes = recipes;
            }
            Err(e) => {
                error!(term, error = %e, "Search failed");
                self.error = Some(SEARCH_ERROR.to_string());
            }
        }
    }

    pub async fn search<T: HttpTransport>(&mut self, api: &ApiClient<T>, input: &str) {
        let Some(term) = self.begin_search(input) else {
            return;
        };
        let result = api.search_recipes(&term).await;
        self.apply_search(&term, result);
    }

    // ============= Category =============

    /// Select a category, or clear the selection with `None` ("All").
    /// Returns the category whose recipes must be fetched.
    pub fn begin_category(&mut self, category: Option<&str>) -> Option<String> {
        self.error = None;
        match category {
            Some(name) => {
                self.loading = true;
                self.filter = ActiveFilter::Category(name.to_string());
                Some(name.to_string())
            }
            None => {
                self.loading = false;
                self.filter = ActiveFilter::None;
                None
            }
        }
    }

    pub fn apply_category(&mut self, category: &str, result: Result<Vec<RecipeSummary>>) {
        if self.filter != ActiveFilter::Category(category.to_string()) {
            return;
        }
        self.loading = false;

        match result {
            Ok(recipes) => self.recipes = recipes,
            Err(e) => {
                error!(category, error = %e, "Category listing failed");
                self.error = Some(CATEGORY_ERROR.to_string());
            }
        }
    }

    pub async fn select_category<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        category: Option<&str>,
    ) {
        let Some(name) = self.begin_category(category) else {
            return;
        };
        let result = api.recipes_by_category(&name).await;
        self.apply_category(&name, result);
    }

    // ============= View helpers =============

    pub fn status(&self) -> ListingStatus {
        if self.loading {
            ListingStatus::Loading
        } else if self.error.is_some() {
            ListingStatus::Error
        } else if self.recipes.is_empty() {
            ListingStatus::Empty
        } else {
            ListingStatus::Results
        }
    }

    pub fn search_term(&self) -> Option<&str> {
        match &self.filter {
            ActiveFilter::Search(term) => Some(term),
            _ => None,
        }
    }

    pub fn selected_category(&self) -> Option<&str> {
        match &self.filter {
            ActiveFilter::Category(name) => Some(name),
            _ => None,
        }
    }

    pub fn heading(&self) -> Option<String> {
        match &self.filter {
            ActiveFilter::Search(term) => Some(format!("Results for \"{}\"", term)),
            ActiveFilter::Category(name) => Some(format!("{} Recipes", name)),
            ActiveFilter::None => None,
        }
    }

    /// The featured recipe is hidden while searching.
    pub fn featured(&self) -> Option<&RecipeSummary> {
        match self.filter {
            ActiveFilter::Search(_) => None,
            _ => self.featured.as_ref(),
        }
    }

    pub fn show_categories(&self) -> bool {
        self.search_term().is_none() && !self.categories.is_empty()
    }

    /// Recipes to render in the grid: nothing while loading or on error.
    pub fn visible_recipes(&self) -> &[RecipeSummary] {
        match self.status() {
            ListingStatus::Results => &self.recipes,
            _ => &[],
        }
    }
}
