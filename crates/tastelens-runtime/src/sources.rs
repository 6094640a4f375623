//! Source traits at the controller/transport seam.
//!
//! Controllers only know "something that can fetch"; the real `ApiClient`
//! plugs in behind `Arc<dyn ...>`, and tests plug in scripted sources with
//! controllable resolution order. Futures are boxed so the trait objects
//! stay object-safe.

use futures::future::BoxFuture;
use tastelens_client::{ApiClient, ApiError};
use tastelens_types::{Dish, Recommendations};

/// Fetches the featured dishes for the landing feed. No key parameter.
pub trait FeedSource: Send + Sync {
    fn fetch_featured(&self) -> BoxFuture<'static, Result<Vec<Dish>, ApiError>>;
}

/// Fetches a single dish by identifier.
pub trait DishSource: Send + Sync {
    fn fetch_dish(&self, id: &str) -> BoxFuture<'static, Result<Dish, ApiError>>;
}

/// Fetches recommendations for a favorite dish (write-style request).
pub trait RecommendSource: Send + Sync {
    fn fetch_recommendations(
        &self,
        favorite_dish: &str,
    ) -> BoxFuture<'static, Result<Recommendations, ApiError>>;
}

impl FeedSource for ApiClient {
    fn fetch_featured(&self) -> BoxFuture<'static, Result<Vec<Dish>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.featured().await })
    }
}

impl DishSource for ApiClient {
    fn fetch_dish(&self, id: &str) -> BoxFuture<'static, Result<Dish, ApiError>> {
        let client = self.clone();
        let id = id.to_string();
        Box::pin(async move { client.dish(&id).await })
    }
}

impl RecommendSource for ApiClient {
    fn fetch_recommendations(
        &self,
        favorite_dish: &str,
    ) -> BoxFuture<'static, Result<Recommendations, ApiError>> {
        let client = self.clone();
        let favorite_dish = favorite_dish.to_string();
        Box::pin(async move { client.recommend(&favorite_dish).await })
    }
}
