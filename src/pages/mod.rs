//! Page controllers
//!
//! Each route owns an independent view model. State changes are split into
//! synchronous `begin_*` / `apply_*` steps around the network call so the
//! browser UI can keep a model inside a signal and update it from a spawned
//! task, while native callers use the `async` drivers that chain the steps.
//! No state is shared between pages apart from the identity token.

pub mod detail;
pub mod favorites;
pub mod home;
pub mod shopping;

pub use detail::{DetailView, FavoriteChange, RecipeDetailPage};
pub use favorites::FavoritesPage;
pub use home::{ActiveFilter, HomePage, ListingStatus};
pub use shopping::{ItemDraft, ItemGroup, ShoppingPage};
