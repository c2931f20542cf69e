//! Shopping list page controller
//!
//! The flat item list is the only stored state. Grouping by originating
//! recipe and the clipboard text are projections recomputed on demand.

use crate::api::{ApiClient, HttpTransport};
use crate::types::{AppError, NewShoppingItem, Result, ShoppingItem, ShoppingItemUpdate, UserId};
use tracing::{debug, error};

pub const LOAD_ERROR: &str = "Error loading shopping list.";
pub const INGREDIENT_REQUIRED: &str = "Ingredient name is required.";
pub const ADD_ERROR: &str = "Error adding item.";
pub const UPDATE_ERROR: &str = "Error updating item.";
pub const REMOVE_ERROR: &str = "Error removing item.";
pub const CLEAR_ERROR: &str = "Error clearing list.";
pub const COPY_ERROR: &str = "Error copying list.";
pub const COPIED: &str = "List copied to clipboard!";

/// Prompt shown before clearing the whole list.
pub const CLEAR_CONFIRMATION: &str = "Clear the entire shopping list?";

/// Manual-entry form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub ingredient: String,
    pub quantity: String,
}

impl ItemDraft {
    pub fn new(ingredient: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            quantity: quantity.into(),
        }
    }

    /// Validate into a create request. A blank quantity becomes `None`.
    pub fn to_new_item(&self, user_id: UserId) -> Result<NewShoppingItem> {
        let ingredient = self.ingredient.trim();
        if ingredient.is_empty() {
            return Err(AppError::InvalidInput(INGREDIENT_REQUIRED.to_string()));
        }
        let quantity = self.quantity.trim();
        Ok(NewShoppingItem {
            user_id,
            ingredient: ingredient.to_string(),
            quantity: (!quantity.is_empty()).then(|| quantity.to_string()),
        })
    }
}

/// Items sharing an originating recipe label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGroup<'a> {
    pub label: &'a str,
    pub items: Vec<&'a ShoppingItem>,
}

/// Group items by recipe label in order of first appearance.
pub fn group_by_recipe(items: &[ShoppingItem]) -> Vec<ItemGroup<'_>> {
    let mut groups: Vec<ItemGroup<'_>> = Vec::new();
    for item in items {
        let label = item.group_label();
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.items.push(item),
            None => groups.push(ItemGroup {
                label,
                items: vec![item],
            }),
        }
    }
    groups
}

/// Unpurchased items as `quantity ingredient` lines.
pub fn copy_text(items: &[ShoppingItem]) -> String {
    items
        .iter()
        .filter(|item| !item.purchased)
        .map(ShoppingItem::display_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingPage {
    pub identity: Option<UserId>,
    pub items: Vec<ShoppingItem>,
    pub draft: ItemDraft,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl ShoppingPage {
    pub fn new(identity: Option<UserId>) -> Self {
        Self {
            identity,
            items: Vec::new(),
            draft: ItemDraft::default(),
            loading: identity.is_some(),
            error: None,
            notice: None,
        }
    }

    pub fn needs_identity(&self) -> bool {
        self.identity.is_none()
    }

    // ============= Load =============

    pub fn begin_load(&mut self) -> Option<UserId> {
        let user_id = self.identity?;
        self.loading = true;
        self.error = None;
        Some(user_id)
    }

    /// 404 means the list is empty.
    pub fn apply_load(&mut self, result: Result<Vec<ShoppingItem>>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) if e.is_not_found() => {
                debug!("No shopping list stored yet");
                self.items.clear();
            }
            Err(e) => {
                error!(error = %e, "Error loading shopping list");
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
    }

    pub async fn load<T: HttpTransport>(&mut self, api: &ApiClient<T>) {
        let Some(user_id) = self.begin_load() else {
            return;
        };
        let result = api.shopping_list(user_id).await;
        self.apply_load(result);
    }

    // ============= Add =============

    /// Validate the draft. Invalid input sets the error and returns `None`
    /// so no request is made.
    pub fn begin_add(&mut self) -> Option<NewShoppingItem> {
        let user_id = self.identity?;
        self.notice = None;
        match self.draft.to_new_item(user_id) {
            Ok(item) => {
                self.error = None;
                Some(item)
            }
            Err(e) => {
                debug!(error = %e, "Rejected shopping item");
                self.error = Some(INGREDIENT_REQUIRED.to_string());
                None
            }
        }
    }

    pub fn apply_add(&mut self, result: Result<ShoppingItem>) {
        match result {
            Ok(item) => {
                self.items.push(item);
                self.draft = ItemDraft::default();
            }
            Err(e) => {
                error!(error = %e, "Error adding item");
                self.error = Some(ADD_ERROR.to_string());
            }
        }
    }

    pub async fn add<T: HttpTransport>(&mut self, api: &ApiClient<T>) {
        let Some(item) = self.begin_add() else {
            return;
        };
        let result = api.add_shopping_item(&item).await;
        self.apply_add(result);
    }

    // ============= Toggle =============

    /// New purchased value for `item_id`, or `None` if the item is unknown.
    pub fn begin_toggle(&self, item_id: i64) -> Option<bool> {
        self.items
            .iter()
            .find(|item| item.id == item_id)
            .map(|item| !item.purchased)
    }

    pub fn apply_toggle(&mut self, item_id: i64, purchased: bool, result: Result<()>) {
        match result {
            Ok(()) => {
                self.error = None;
                if let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) {
                    item.purchased = purchased;
                }
            }
            Err(e) => {
                error!(item_id, error = %e, "Error updating item");
                self.error = Some(UPDATE_ERROR.to_string());
            }
        }
    }

    pub async fn toggle<T: HttpTransport>(&mut self, api: &ApiClient<T>, item_id: i64) {
        let Some(purchased) = self.begin_toggle(item_id) else {
            return;
        };
        let result = api
            .update_shopping_item(item_id, &ShoppingItemUpdate::purchased(purchased))
            .await;
        self.apply_toggle(item_id, purchased, result);
    }

    // ============= Remove / clear =============

    pub fn apply_remove(&mut self, item_id: i64, result: Result<()>) {
        match result {
            Ok(()) => {
                self.error = None;
                self.items.retain(|item| item.id != item_id);
            }
            Err(e) => {
                error!(item_id, error = %e, "Error removing item");
                self.error = Some(REMOVE_ERROR.to_string());
            }
        }
    }

    pub async fn remove<T: HttpTransport>(&mut self, api: &ApiClient<T>, item_id: i64) {
        let result = api.remove_shopping_item(item_id).await;
        self.apply_remove(item_id, result);
    }

    /// Empties the list only when the server call succeeded.
    pub fn apply_clear(&mut self, result: Result<()>) {
        match result {
            Ok(()) => {
                self.error = None;
                self.items.clear();
            }
            Err(e) => {
                error!(error = %e, "Error clearing list");
                self.error = Some(CLEAR_ERROR.to_string());
            }
        }
    }

    /// Clear the list. Callers ask for confirmation first.
    pub async fn clear<T: HttpTransport>(&mut self, api: &ApiClient<T>) {
        let Some(user_id) = self.identity else {
            return;
        };
        let result = api.clear_shopping_list(user_id).await;
        self.apply_clear(result);
    }

    // ============= Copy =============

    pub fn copy_text(&self) -> String {
        copy_text(&self.items)
    }

    pub fn apply_copy(&mut self, copied: bool) {
        if copied {
            self.notice = Some(COPIED.to_string());
        } else {
            error!("Error copying list to clipboard");
            self.error = Some(COPY_ERROR.to_string());
        }
    }

    /// Drop the copy notice after [`MESSAGE_TIMEOUT`](super::detail::MESSAGE_TIMEOUT).
    pub fn expire_notice(&mut self) {
        self.notice = None;
    }

    // ============= View helpers =============

    pub fn groups(&self) -> Vec<ItemGroup<'_>> {
        group_by_recipe(&self.items)
    }

    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|item| !item.purchased).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, ingredient: &str, quantity: Option<&str>, recipe: Option<&str>) -> ShoppingItem {
        ShoppingItem {
            id,
            user_id: Some(UserId(1)),
            ingredient: ingredient.into(),
            quantity: quantity.map(String::from),
            purchased: false,
            recipe_name: recipe.map(String::from),
        }
    }

    fn status(code: u16) -> AppError {
        AppError::Status {
            endpoint: "/shopping-list/clear/?user_id=1".into(),
            status: code,
        }
    }

    #[test]
    fn test_draft_validation() {
        let err = ItemDraft::new("  ", "1").to_new_item(UserId(1)).unwrap_err();
        assert_eq!(err, AppError::InvalidInput(INGREDIENT_REQUIRED.into()));

        let item = ItemDraft::new(" Garlic ", "  ").to_new_item(UserId(1)).unwrap();
        assert_eq!(item.ingredient, "Garlic");
        assert_eq!(item.quantity, None);
    }

    #[test]
    fn test_blank_ingredient_rejected_before_request() {
        let mut page = ShoppingPage::new(Some(UserId(1)));
        page.draft = ItemDraft::new("", "2");
        assert_eq!(page.begin_add(), None);
        assert_eq!(page.error.as_deref(), Some(INGREDIENT_REQUIRED));
    }

    #[test]
    fn test_groups_follow_first_appearance_with_manual_fallback() {
        let items = vec![
            item(1, "Soy sauce", Some("3/4 cup"), Some("Teriyaki Chicken Casserole")),
            item(2, "Garlic", Some("2 cloves"), None),
            item(3, "Chicken", Some("2"), Some("Teriyaki Chicken Casserole")),
            item(4, "Milk", None, Some("")),
        ];
        let groups = group_by_recipe(&items);
        let labels: Vec<_> = groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Teriyaki Chicken Casserole", "Manual"]);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_copy_text_skips_purchased() {
        let mut items = vec![
            item(1, "Garlic", Some("2 cloves"), None),
            item(2, "Rice", Some("1 cup"), None),
            item(3, "Salt", None, None),
        ];
        items[1].purchased = true;
        assert_eq!(copy_text(&items), "2 cloves Garlic\nSalt");
        assert_eq!(copy_text(&[]), "");
    }

    #[test]
    fn test_toggle_twice_restores_and_touches_only_target() {
        let mut page = ShoppingPage::new(Some(UserId(1)));
        page.apply_load(Ok(vec![item(1, "Garlic", None, None), item(2, "Rice", None, None)]));
        let before = page.items.clone();

        let purchased = page.begin_toggle(1).unwrap();
        page.apply_toggle(1, purchased, Ok(()));
        assert!(page.items[0].purchased);
        assert_eq!(page.items[1], before[1]);
        assert_eq!(page.pending_count(), 1);

        let purchased = page.begin_toggle(1).unwrap();
        page.apply_toggle(1, purchased, Ok(()));
        assert_eq!(page.items, before);
        assert_eq!(page.begin_toggle(42), None);
    }

    #[test]
    fn test_clear_only_on_success() {
        let mut page = ShoppingPage::new(Some(UserId(1)));
        page.apply_load(Ok(vec![item(1, "Garlic", None, None)]));
        let before = page.items.clone();

        page.apply_clear(Err(status(500)));
        assert_eq!(page.items, before);
        assert_eq!(page.error.as_deref(), Some(CLEAR_ERROR));

        page.apply_clear(Ok(()));
        assert!(page.items.is_empty());
        assert_eq!(page.error, None);
    }

    #[test]
    fn test_success_after_failure_clears_banner() {
        let mut page = ShoppingPage::new(Some(UserId(1)));
        page.apply_load(Ok(vec![item(1, "Garlic", None, None), item(2, "Rice", None, None)]));

        page.apply_toggle(1, true, Err(status(500)));
        assert_eq!(page.error.as_deref(), Some(UPDATE_ERROR));
        page.apply_toggle(1, true, Ok(()));
        assert_eq!(page.error, None);
        assert!(page.items[0].purchased);

        page.apply_remove(2, Err(status(500)));
        assert_eq!(page.error.as_deref(), Some(REMOVE_ERROR));
        page.apply_remove(2, Ok(()));
        assert_eq!(page.error, None);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_load_not_found_is_empty() {
        let mut page = ShoppingPage::new(Some(UserId(1)));
        page.apply_load(Err(status(404)));
        assert_eq!(page.error, None);
        assert!(page.is_empty());

        page.apply_load(Err(status(502)));
        assert_eq!(page.error.as_deref(), Some(LOAD_ERROR));
    }
}
