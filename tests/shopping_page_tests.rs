//! Shopping list page tests driven through the scripted transport

mod common;

use common::mocks::MockTransport;
use common::shopping_item;
use easyrecipe::api::Method;
use easyrecipe::pages::shopping::{
    ADD_ERROR, CLEAR_ERROR, COPIED, INGREDIENT_REQUIRED, LOAD_ERROR, UPDATE_ERROR,
};
use easyrecipe::pages::{ItemDraft, ShoppingPage};
use easyrecipe::types::UserId;
use rstest::rstest;
use serde_json::json;

const LIST: &str = "/shopping-list?user_id=1";

fn loaded_mock() -> MockTransport {
    let mock = MockTransport::new();
    mock.on(
        Method::Get,
        LIST,
        200,
        json!([
            shopping_item(1, "soy sauce", Some("3/4 cup"), Some("Teriyaki Chicken Casserole")),
            shopping_item(2, "Garlic", Some("2 cloves"), None),
            shopping_item(3, "chicken breasts", Some("2"), Some("Teriyaki Chicken Casserole")),
        ]),
    );
    mock
}

async fn loaded_page(api: &easyrecipe::ApiClient<MockTransport>) -> ShoppingPage {
    let mut page = ShoppingPage::new(Some(UserId(1)));
    page.load(api).await;
    page
}

#[tokio::test]
async fn test_without_identity_nothing_is_fetched() {
    let api = MockTransport::new().into_client();
    let mut page = ShoppingPage::new(None);

    page.load(&api).await;
    page.clear(&api).await;

    assert!(page.needs_identity());
    assert!(api.transport().requests().is_empty());
}

#[tokio::test]
async fn test_load_groups_by_recipe() {
    let api = loaded_mock().into_client();
    let page = loaded_page(&api).await;

    let groups = page.groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label, "Teriyaki Chicken Casserole");
    assert_eq!(groups[0].items.len(), 2);
    assert_eq!(groups[1].label, "Manual");
    assert_eq!(page.pending_count(), 3);
}

#[rstest]
#[case(404, None)]
#[case(500, Some(LOAD_ERROR))]
#[tokio::test]
async fn test_load_failures(#[case] status: u16, #[case] expected: Option<&str>) {
    let mock = MockTransport::new();
    mock.on(Method::Get, LIST, status, json!({}));
    let api = mock.into_client();

    let page = loaded_page(&api).await;

    assert_eq!(page.error.as_deref(), expected);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_add_manual_item_with_blank_quantity() {
    let mock = MockTransport::new();
    mock.on(Method::Get, LIST, 404, json!({}));
    mock.on(
        Method::Post,
        "/shopping-list/",
        201,
        shopping_item(5, "Salt", None, None),
    );
    let api = mock.into_client();
    let mut page = loaded_page(&api).await;
    page.draft = ItemDraft::new(" Salt ", "   ");

    page.add(&api).await;

    let body = api.transport().last_body(Method::Post, "/shopping-list/").unwrap();
    assert_eq!(body, json!({ "userId": 1, "ingredient": "Salt", "quantity": null }));
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].display_line(), "Salt");
    assert_eq!(page.draft, ItemDraft::default());
}

#[tokio::test]
async fn test_blank_ingredient_is_rejected_locally() {
    let api = loaded_mock().into_client();
    let mut page = loaded_page(&api).await;
    page.draft = ItemDraft::new("   ", "1 cup");

    page.add(&api).await;

    assert_eq!(page.error.as_deref(), Some(INGREDIENT_REQUIRED));
    assert_eq!(api.transport().calls(Method::Post, "/shopping-list/"), 0);
    assert_eq!(page.draft.quantity, "1 cup");
}

#[tokio::test]
async fn test_failed_add_keeps_draft() {
    let mock = loaded_mock();
    mock.fail(Method::Post, "/shopping-list/", "offline");
    let api = mock.into_client();
    let mut page = loaded_page(&api).await;
    page.draft = ItemDraft::new("Rice", "1 cup");

    page.add(&api).await;

    assert_eq!(page.error.as_deref(), Some(ADD_ERROR));
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.draft.ingredient, "Rice");
}

#[tokio::test]
async fn test_toggle_sends_new_flag_and_patches_one_item() {
    let mock = loaded_mock();
    mock.on(Method::Put, "/shopping-list/2", 200, json!({ "id": 2, "purchased": true }));
    let api = mock.into_client();
    let mut page = loaded_page(&api).await;

    page.toggle(&api, 2).await;

    assert_eq!(
        api.transport().last_body(Method::Put, "/shopping-list/2"),
        Some(json!({ "purchased": true }))
    );
    let flags: Vec<bool> = page.items.iter().map(|i| i.purchased).collect();
    assert_eq!(flags, vec![false, true, false]);
    assert_eq!(page.pending_count(), 2);
    assert_eq!(page.copy_text(), "3/4 cup soy sauce\n2 chicken breasts");

    page.toggle(&api, 2).await;
    assert_eq!(
        api.transport().last_body(Method::Put, "/shopping-list/2"),
        Some(json!({ "purchased": false }))
    );
    assert!(page.items.iter().all(|i| !i.purchased));
}

#[tokio::test]
async fn test_failed_toggle_leaves_flag() {
    let mock = loaded_mock();
    mock.on(Method::Put, "/shopping-list/1", 500, json!({}));
    let api = mock.into_client();
    let mut page = loaded_page(&api).await;

    page.toggle(&api, 1).await;

    assert!(!page.items[0].purchased);
    assert_eq!(page.error.as_deref(), Some(UPDATE_ERROR));
}

#[tokio::test]
async fn test_remove_splices_item() {
    let mock = loaded_mock();
    mock.on_empty(Method::Delete, "/shopping-list/1", 204);
    let api = mock.into_client();
    let mut page = loaded_page(&api).await;

    page.remove(&api, 1).await;

    let ids: Vec<i64> = page.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(api.transport().calls(Method::Get, LIST), 1);
}

#[tokio::test]
async fn test_clear_empties_only_after_success() {
    let mock = loaded_mock();
    mock.on(Method::Delete, "/shopping-list/clear/?user_id=1", 500, json!({}));
    mock.on_empty(Method::Delete, "/shopping-list/clear/?user_id=1", 204);
    let api = mock.into_client();
    let mut page = loaded_page(&api).await;

    page.clear(&api).await;
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.error.as_deref(), Some(CLEAR_ERROR));

    page.clear(&api).await;
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_copy_notice() {
    let api = loaded_mock().into_client();
    let mut page = loaded_page(&api).await;

    assert_eq!(
        page.copy_text(),
        "3/4 cup soy sauce\n2 cloves Garlic\n2 chicken breasts"
    );
    page.apply_copy(true);
    assert_eq!(page.notice.as_deref(), Some(COPIED));
}
