//! # EasyRecipe
//!
//! Client for the ReceitaFacil recipe service: browse and search recipes,
//! open a recipe, keep favorites, and manage a shopping list.
//!
//! ## Overview
//!
//! The crate holds everything except DOM rendering, so the same code runs
//! in two front ends:
//!
//! 1. **The browser UI** (`ui/`, Leptos) - depends on this crate with
//!    `default-features = false` and supplies its own HTTP transport and
//!    `localStorage` identity store.
//! 2. **The `easyrecipe` binary** - a terminal front end over the same page
//!    controllers, using `reqwest`.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use easyrecipe::{ApiClient, HomePage, ReqwestTransport};
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = ApiClient::new("http://localhost:8000", ReqwestTransport::new());
//!
//!     let mut home = HomePage::new();
//!     home.load(&api).await;
//!     for recipe in home.visible_recipes() {
//!         println!("{} - {}", recipe.id, recipe.title);
//!     }
//! }
//! ```
//!
//! ### Identity
//!
//! ```rust,ignore
//! use easyrecipe::identity::{get_or_create_identity, FileIdentityStore};
//!
//! let store = FileIdentityStore::new(".easyrecipe/identity.json");
//! let user_id = get_or_create_identity(&api, &store).await?;
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `native` | `reqwest` transport, file identity store, TOML config and the CLI (default) |
//!
//! ## Modules
//!
//! - [`api`] - REST gateway and the transport seam
//! - [`identity`] - Identity token storage and provisioning
//! - [`pages`] - View models for the four routed pages
//! - [`routes`] - Route table and navigation entries
//! - [`config`] - Client configuration
//! - [`types`] - Wire models and error handling

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// REST gateway for the recipe service.
pub mod api;
/// Terminal front end.
#[cfg(feature = "native")]
pub mod cli;
/// Client configuration.
pub mod config;
/// Identity token storage and provisioning.
pub mod identity;
/// Page view models.
pub mod pages;
/// Client routes.
pub mod routes;
/// Core types (wire models, errors).
pub mod types;

// Re-export commonly used types
#[cfg(feature = "native")]
pub use api::ReqwestTransport;
pub use api::{ApiClient, HttpTransport};
pub use config::ClientConfig;
pub use identity::{get_or_create_identity, IdentityStore, MemoryIdentityStore};
pub use pages::{FavoritesPage, HomePage, RecipeDetailPage, ShoppingPage};
pub use routes::Route;
pub use types::{AppError, Result};
