//! CLI Integration Tests for EasyRecipe
//!
//! Runs the built binary against temp configs and a mocked API.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to run easyrecipe with arguments inside `dir`
fn run_easyrecipe(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_easyrecipe"))
        .args(args)
        .arg("--no-color")
        .current_dir(dir)
        .env_remove("EASYRECIPE_API_URL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Temp dir with a config whose identity file lives inside it
fn workspace(api_url: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("easyrecipe.toml"),
        format!(
            "log_level = \"warn\"\n\n[api]\nbase_url = \"{}\"\n\n[storage]\nidentity_file = \"identity.json\"\n",
            api_url
        ),
    )
    .unwrap();
    dir
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    let output = run_easyrecipe(&["--help"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("EasyRecipe"));
    for command in ["home", "search", "category", "show", "favorite", "favorites", "shopping", "whoami"] {
        assert!(stdout.contains(command), "missing {} in help", command);
    }
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    let output = run_easyrecipe(&["--version"], dir.path());

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("easyrecipe"));
}

#[test]
fn test_shopping_help_lists_actions() {
    let dir = TempDir::new().unwrap();
    let output = run_easyrecipe(&["shopping", "--help"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for action in ["list", "add", "toggle", "remove", "clear", "copy", "add-recipe"] {
        assert!(stdout.contains(action), "missing {} in help", action);
    }
}

// =============================================================================
// Offline behavior
// =============================================================================

#[test]
fn test_whoami_without_identity() {
    // Nothing listens here; no request must be made
    let dir = workspace("http://127.0.0.1:1");
    let output = run_easyrecipe(&["whoami"], dir.path());

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No identity stored yet"));
    assert!(!dir.path().join("identity.json").exists());
}

#[test]
fn test_favorites_without_identity_shows_call_to_action() {
    let dir = workspace("http://127.0.0.1:1");
    let output = run_easyrecipe(&["favorites", "list"], dir.path());

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("no favorites yet"));
}

#[test]
fn test_shopping_list_without_identity_is_empty() {
    let dir = workspace("http://127.0.0.1:1");
    let output = run_easyrecipe(&["shopping", "list"], dir.path());

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Your shopping list is empty."));
}

#[test]
fn test_shopping_changes_without_identity_fail() {
    let dir = workspace("http://127.0.0.1:1");
    for args in [
        &["shopping", "add", "Garlic", "-q", "2 cloves"][..],
        &["shopping", "toggle", "1"][..],
        &["shopping", "remove", "1"][..],
        &["shopping", "clear", "--yes"][..],
    ] {
        let output = run_easyrecipe(args, dir.path());

        assert!(!output.status.success(), "{:?} should fail", args);
        assert!(String::from_utf8_lossy(&output.stderr).contains("No identity stored yet"));
    }
    assert!(!dir.path().join("identity.json").exists());
}

#[test]
fn test_favorite_remove_without_identity_fails() {
    let dir = workspace("http://127.0.0.1:1");
    let output = run_easyrecipe(&["favorites", "remove", "3"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No identity stored yet"));
}

#[test]
fn test_invalid_api_url_is_rejected() {
    let dir = workspace("ftp://example.com");
    let output = run_easyrecipe(&["home"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("api.base_url"));
}

#[test]
fn test_unreachable_api_fails() {
    let dir = workspace("http://127.0.0.1:1");
    let output = run_easyrecipe(&["search", "chicken"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error searching recipes."));
}

// =============================================================================
// Against a mocked API
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_search_prints_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/search"))
        .and(query_param("name", "curry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meals": [{ "idMeal": "52820", "strMeal": "Katsu Chicken Curry", "strArea": "Japanese" }]
        })))
        .mount(&server)
        .await;

    let dir = workspace("http://127.0.0.1:1");
    let uri = server.uri();
    let dir_path = dir.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        run_easyrecipe(&["--api-url", &uri, "search", "curry"], &dir_path)
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Results for \"curry\""));
    assert!(stdout.contains("Katsu Chicken Curry"));
    assert!(stdout.contains("[Japanese]"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_recipe_provisions_identity_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 12, "name": "User", "email": "user_1@receitafacil.local"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/shopping-list/add-recipe/52772"))
        .and(query_param("user_id", "12"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items_added": 9 })),
        )
        .mount(&server)
        .await;

    let dir = workspace(&server.uri());
    let dir_path = dir.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        run_easyrecipe(&["shopping", "add-recipe", "52772"], &dir_path)
    })
    .await
    .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Added 9 ingredients to shopping list!"));
    let stored = fs::read_to_string(dir.path().join("identity.json")).unwrap();
    assert!(stored.contains("\"userId\": \"12\""));
}
