//! Raw-record builders for both wire dialects and canonical dish fixtures.

use serde_json::{json, Value};
use tastelens_types::Dish;

/// A raw record in the detail/recommendation dialect
/// (`dish_name` / `img_url`).
pub fn detail_record(name: &str) -> Value {
    json!({
        "dish_name": name,
        "img_url": format!("https://img.example/{}.jpg", name.to_lowercase().replace(' ', "-")),
        "restaurant_name": "Spice Route",
        "average_cost": 220,
        "rating": 4.2,
        "diet_type": "Vegetarian",
        "cuisine": "North Indian",
        "calories": 480
    })
}

/// A raw record in the feed dialect (`food_name` / `image`).
pub fn feed_record(name: &str) -> Value {
    json!({
        "food_name": name,
        "image": format!("https://img.example/{}.jpg", name.to_lowercase().replace(' ', "-")),
        "restaurant_name": "Spice Route",
        "average_cost": "220",
        "rating": "4.2",
        "diet_type": "Vegetarian"
    })
}

/// A record that fails normalization: no resolvable name in either dialect.
pub fn nameless_record() -> Value {
    json!({
        "img_url": "https://img.example/mystery.jpg",
        "rating": 5.0
    })
}

/// A canonical dish fixture, for seeding scripted sources.
pub fn dish(name: &str) -> Dish {
    let mut dish = Dish::new(name, name).expect("fixture names are non-empty");
    dish.restaurant_name = Some("Spice Route".to_string());
    dish.average_cost = 220.0;
    dish.rating = 4.2;
    dish.cuisine = Some("North Indian".to_string());
    dish
}

/// A list of canonical dishes.
pub fn dishes(names: &[&str]) -> Vec<Dish> {
    names.iter().map(|name| dish(name)).collect()
}
