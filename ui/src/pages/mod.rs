//! Routed pages

pub mod favorites;
pub mod home;
pub mod recipe;
pub mod shopping;

pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use recipe::RecipePage;
pub use shopping::ShoppingPage;
