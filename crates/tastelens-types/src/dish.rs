use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sentinel image used when a dish record carries no usable image URL.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Canonical dish entity.
///
/// Every `Dish` that reaches a renderer has a non-empty `id` and `name`;
/// raw records that cannot resolve both are dropped at normalization time
/// and never constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Opaque identifier, unique per dish. Routing and cache key.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    /// Non-negative, currency-agnostic. Formatting is a renderer concern.
    #[serde(default)]
    pub average_cost: f64,
    /// In [0, 5]. One decimal of precision assumed but not enforced.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub diet_type: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub calories: Option<f64>,
}

impl Dish {
    /// Construct a dish, enforcing the id/name invariant.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(Error::InvalidDish("empty id".to_string()));
        }
        if name.trim().is_empty() {
            return Err(Error::InvalidDish("empty name".to_string()));
        }
        Ok(Self {
            id,
            name,
            image_url: None,
            restaurant_name: None,
            average_cost: 0.0,
            rating: 0.0,
            diet_type: None,
            cuisine: None,
            calories: None,
        })
    }

    /// Image URL for display, falling back to the placeholder sentinel
    /// when the record carried none (or an empty string).
    pub fn image_or_placeholder(&self) -> &str {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_IMAGE_URL,
        }
    }

    /// Restaurant name for display. Absent renders empty, never panics.
    pub fn restaurant_or_empty(&self) -> &str {
        self.restaurant_name.as_deref().unwrap_or("")
    }
}

/// Payload of a successful recommendation request: two independent lists.
/// Either list may be empty; that is still success, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recommendations {
    pub recently_rated: Vec<Dish>,
    pub recommended: Vec<Dish>,
}
