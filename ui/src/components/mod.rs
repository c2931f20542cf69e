//! Reusable UI components

pub mod category_list;
pub mod header;
pub mod loading;
pub mod recipe_card;
pub mod search_bar;

pub use category_list::CategoryList;
pub use header::Header;
pub use loading::Loading;
pub use recipe_card::RecipeCard;
pub use search_bar::SearchBar;
