//! Client-visible routes

use std::fmt;

/// A routed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Recipe(String),
    Favorites,
    ShoppingList,
}

/// Navigation bar entries, in display order.
pub const NAV_LINKS: [(&str, Route); 3] = [
    ("Home", Route::Home),
    ("Favorites", Route::Favorites),
    ("Shopping List", Route::ShoppingList),
];

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Recipe(id) => format!("/recipe/{}", crate::api::encode_component(id)),
            Route::Favorites => "/favorites".to_string(),
            Route::ShoppingList => "/shopping-list".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
