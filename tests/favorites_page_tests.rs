//! Favorites page tests driven through the scripted transport

mod common;

use common::favorite;
use common::mocks::MockTransport;
use easyrecipe::api::Method;
use easyrecipe::pages::favorites::{LOAD_ERROR, REMOVE_ERROR};
use easyrecipe::pages::FavoritesPage;
use easyrecipe::types::UserId;
use rstest::rstest;
use serde_json::json;

const LIST: &str = "/favorites?user_id=1";

#[tokio::test]
async fn test_without_identity_nothing_is_fetched() {
    let api = MockTransport::new().into_client();
    let mut page = FavoritesPage::new(None);

    page.load(&api).await;

    assert!(page.needs_identity());
    assert!(api.transport().requests().is_empty());
}

#[tokio::test]
async fn test_load_lists_favorites_as_cards() {
    let mock = MockTransport::new();
    mock.on(
        Method::Get,
        LIST,
        200,
        json!([
            favorite(10, "52772", "Teriyaki Chicken Casserole"),
            favorite(11, "52771", "Spicy Arrabiata Penne"),
        ]),
    );
    let api = mock.into_client();
    let mut page = FavoritesPage::new(Some(UserId(1)));

    page.load(&api).await;

    assert_eq!(page.favorites.len(), 2);
    let card = page.favorites[0].summary();
    assert_eq!(card.id, "52772");
    assert_eq!(card.title, "Teriyaki Chicken Casserole");
    assert_eq!(card.category.as_deref(), Some("Chicken"));
}

#[tokio::test]
async fn test_snake_case_records_are_accepted() {
    let mock = MockTransport::new();
    mock.on(
        Method::Get,
        LIST,
        200,
        json!([{
            "id": 3,
            "user_id": 1,
            "external_recipe_id": "52772",
            "recipe_name": "Teriyaki Chicken Casserole",
            "image_url": "https://img.test/52772.jpg"
        }]),
    );
    let api = mock.into_client();
    let mut page = FavoritesPage::new(Some(UserId(1)));

    page.load(&api).await;

    assert_eq!(page.favorites[0].external_recipe_id, "52772");
    assert_eq!(
        page.favorites[0].image_url.as_deref(),
        Some("https://img.test/52772.jpg")
    );
}

#[rstest]
#[case(404, None)]
#[case(500, Some(LOAD_ERROR))]
#[case(401, Some(LOAD_ERROR))]
#[tokio::test]
async fn test_load_failures(#[case] status: u16, #[case] expected: Option<&str>) {
    let mock = MockTransport::new();
    mock.on(Method::Get, LIST, status, json!({ "detail": "x" }));
    let api = mock.into_client();
    let mut page = FavoritesPage::new(Some(UserId(1)));

    page.load(&api).await;

    assert_eq!(page.error.as_deref(), expected);
    assert!(page.favorites.is_empty());
    assert!(!page.loading);
}

#[tokio::test]
async fn test_remove_splices_without_refetch() {
    let mock = MockTransport::new();
    mock.on(
        Method::Get,
        LIST,
        200,
        json!([
            favorite(10, "52772", "Teriyaki Chicken Casserole"),
            favorite(11, "52771", "Spicy Arrabiata Penne"),
        ]),
    );
    mock.on_empty(Method::Delete, "/favorites/10", 204);
    let api = mock.into_client();
    let mut page = FavoritesPage::new(Some(UserId(1)));
    page.load(&api).await;

    page.remove(&api, 10).await;

    assert_eq!(page.favorites.len(), 1);
    assert_eq!(page.favorites[0].id, 11);
    assert_eq!(api.transport().calls(Method::Get, LIST), 1);
}

#[tokio::test]
async fn test_failed_remove_keeps_entry() {
    let mock = MockTransport::new();
    mock.on(Method::Get, LIST, 200, json!([favorite(10, "52772", "Teriyaki")]));
    mock.on(Method::Delete, "/favorites/10", 500, json!({}));
    let api = mock.into_client();
    let mut page = FavoritesPage::new(Some(UserId(1)));
    page.load(&api).await;

    page.remove(&api, 10).await;

    assert_eq!(page.favorites.len(), 1);
    assert_eq!(page.error.as_deref(), Some(REMOVE_ERROR));
}
