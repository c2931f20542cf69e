//! Shared test helpers: mocks and JSON fixtures shaped like the API's
//! responses.

#![allow(dead_code)]

pub mod mocks;

use serde_json::{json, Value};

pub fn meal(id: &str, title: &str) -> Value {
    json!({
        "idMeal": id,
        "strMeal": title,
        "strMealThumb": format!("https://img.test/{}.jpg", id),
    })
}

pub fn teriyaki() -> Value {
    json!({
        "idMeal": "52772",
        "strMeal": "Teriyaki Chicken Casserole",
        "strMealThumb": "https://img.test/52772.jpg",
        "strCategory": "Chicken",
        "strArea": "Japanese",
        "strInstructions": "Preheat oven to 350F.\r\n\r\nCombine soy sauce and sugar.\r\nBake for 15 minutes.",
        "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
    })
}

pub fn teriyaki_detail() -> Value {
    json!({
        "meal": teriyaki(),
        "ingredients": [
            { "ingredient": "soy sauce", "measure": "3/4 cup" },
            { "ingredient": "water", "measure": "1/2 cup" },
            { "ingredient": "chicken breasts", "measure": "2" },
        ],
    })
}

pub fn favorite(id: i64, recipe_id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "userId": 1,
        "externalRecipeId": recipe_id,
        "recipeName": name,
        "imageUrl": null,
        "category": "Chicken",
    })
}

pub fn shopping_item(id: i64, ingredient: &str, quantity: Option<&str>, recipe: Option<&str>) -> Value {
    json!({
        "id": id,
        "userId": 1,
        "ingredient": ingredient,
        "quantity": quantity,
        "purchased": false,
        "recipeName": recipe,
    })
}
