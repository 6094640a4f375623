//! Typed views over the service's response bodies.
//!
//! Lists default to empty so a missing section deserializes as valid success;
//! the `error` field is kept separate so callers can give a body-level error
//! precedence over everything else in the payload.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// `GET /home` body: `{ "featured_dishes": [RawDish, ...] }`.
///
/// `featured_dishes` stays an `Option` so callers can tell "key absent"
/// (broken contract) apart from "present but empty".
#[derive(Debug, Deserialize)]
pub struct HomeEnvelope {
    #[serde(default)]
    pub featured_dishes: Option<Vec<Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl HomeEnvelope {
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// `GET /dish/{id}` body: a single raw record, or `{ "error": "..." }`.
#[derive(Debug, Deserialize)]
pub struct DishEnvelope {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub record: Value,
}

impl DishEnvelope {
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// `POST /recommend` body: two independent lists, or `{ "error": "..." }`.
#[derive(Debug, Deserialize)]
pub struct RecommendEnvelope {
    #[serde(default)]
    pub recently_rated: Vec<Value>,
    #[serde(default)]
    pub recommendations: Vec<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RecommendEnvelope {
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}
