//! Typed operations over the TasteLens HTTP API.
//!
//! Transport happens in the async methods; everything after the body arrives
//! is delegated to pure decode functions so the status/body handling rules
//! stay testable without a live service.

use reqwest::Url;
use serde_json::json;
use tastelens_types::{Dish, Recommendations};
use tastelens_wire::{normalize_dish, normalize_dishes, DishEnvelope, HomeEnvelope, RecommendEnvelope};
use tracing::warn;

use crate::error::{ApiError, Result};

/// Client for the TasteLens service. Cheap to clone; the underlying
/// reqwest client shares its connection pool across clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client against a service base URL (e.g. `http://127.0.0.1:5000`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ApiError::Connectivity(format!("invalid base URL: {}", err)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Connectivity(format!(
                "base URL cannot carry a path: {}",
                base_url
            )));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked at construction: the base can always carry path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetch the featured dishes for the landing feed. `GET /home`.
    ///
    /// Records that fail normalization are dropped individually; one bad
    /// record never fails the whole feed.
    pub async fn featured(&self) -> Result<Vec<Dish>> {
        let response = self.http.get(self.endpoint(&["home"])).send().await?;
        let status_ok = response.status().is_success();
        let body = response.text().await?;
        decode_featured(status_ok, &body)
    }

    /// Fetch a single dish by identifier. `GET /dish/{id}`.
    pub async fn dish(&self, id: &str) -> Result<Dish> {
        let response = self.http.get(self.endpoint(&["dish", id])).send().await?;
        let status_ok = response.status().is_success();
        let body = response.text().await?;
        decode_dish(status_ok, &body)
    }

    /// Request recommendations for a favorite dish. `POST /recommend` with
    /// `{"favorite_dish": ...}` as the JSON body.
    pub async fn recommend(&self, favorite_dish: &str) -> Result<Recommendations> {
        let response = self
            .http
            .post(self.endpoint(&["recommend"]))
            .json(&json!({ "favorite_dish": favorite_dish }))
            .send()
            .await?;
        let status_ok = response.status().is_success();
        let body = response.text().await?;
        decode_recommendations(status_ok, &body)
    }
}

fn decode_featured(status_ok: bool, body: &str) -> Result<Vec<Dish>> {
    if !status_ok {
        return Err(ApiError::Connectivity(
            "feed request returned an error status".to_string(),
        ));
    }
    let envelope = HomeEnvelope::parse(body).map_err(|err| malformed("/home", err))?;
    let raws = envelope
        .featured_dishes
        .ok_or_else(|| malformed("/home", "body is missing the featured_dishes list"))?;
    Ok(normalize_dishes(&raws))
}

fn decode_dish(status_ok: bool, body: &str) -> Result<Dish> {
    if !status_ok {
        return Err(ApiError::NotFound);
    }
    let envelope = DishEnvelope::parse(body).map_err(|err| malformed("/dish", err))?;
    if let Some(message) = envelope.error {
        return Err(ApiError::Domain(message));
    }
    normalize_dish(&envelope.record)
        .ok_or_else(|| malformed("/dish", "record is missing required fields"))
}

fn decode_recommendations(status_ok: bool, body: &str) -> Result<Recommendations> {
    // A body-level error takes precedence over HTTP status, so parse first.
    match RecommendEnvelope::parse(body) {
        Ok(envelope) => {
            if let Some(message) = envelope.error {
                return Err(ApiError::Domain(message));
            }
            if !status_ok {
                return Err(ApiError::Connectivity(
                    "recommendation request returned an error status".to_string(),
                ));
            }
            Ok(Recommendations {
                recently_rated: normalize_dishes(&envelope.recently_rated),
                recommended: normalize_dishes(&envelope.recommendations),
            })
        }
        Err(err) if status_ok => Err(malformed("/recommend", err)),
        Err(_) => Err(ApiError::Connectivity(
            "recommendation request returned an error status".to_string(),
        )),
    }
}

fn malformed(endpoint: &str, detail: impl ToString) -> ApiError {
    let detail = detail.to_string();
    warn!(endpoint, %detail, "malformed response body");
    ApiError::Malformed(detail)
}
