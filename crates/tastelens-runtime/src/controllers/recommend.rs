use std::sync::{Arc, Mutex};

use tastelens_client::ApiError;
use tastelens_types::{FetchMachine, FetchState, Generation, Recommendations};
use tokio::task::JoinHandle;

use crate::controllers::{lock, settle};
use crate::sources::RecommendSource;

struct Inner {
    machine: FetchMachine<Recommendations>,
    favorite_dish: Option<String>,
}

/// Profile recommendations, keyed by the user's favorite dish.
///
/// A domain-level error in the response body (unknown dish, malformed
/// input) surfaces verbatim; empty result lists are success, not errors.
pub struct RecommendationController {
    source: Arc<dyn RecommendSource>,
    inner: Arc<Mutex<Inner>>,
}

impl RecommendationController {
    pub fn new(source: Arc<dyn RecommendSource>) -> Self {
        Self {
            source,
            inner: Arc::new(Mutex::new(Inner {
                machine: FetchMachine::new(),
                favorite_dish: None,
            })),
        }
    }

    /// Request recommendations for a favorite dish. A repeat of the current
    /// favorite does not issue a second request; a new favorite supersedes
    /// whatever is in flight.
    pub fn request(&self, favorite_dish: &str) -> Option<JoinHandle<()>> {
        let generation = {
            let mut inner = lock(&self.inner);
            let same_key = inner.favorite_dish.as_deref() == Some(favorite_dish);
            if same_key && !matches!(inner.machine.state(), FetchState::Idle) {
                return None;
            }
            inner.favorite_dish = Some(favorite_dish.to_string());
            inner.machine.begin()
        };
        Some(self.spawn_fetch(favorite_dish, generation))
    }

    /// Explicitly re-arm after an error. No-op with no key or while loading.
    pub fn retry(&self) -> Option<JoinHandle<()>> {
        let (favorite_dish, generation) = {
            let mut inner = lock(&self.inner);
            if inner.machine.is_loading() {
                return None;
            }
            let favorite_dish = inner.favorite_dish.clone()?;
            let generation = inner.machine.begin();
            (favorite_dish, generation)
        };
        Some(self.spawn_fetch(&favorite_dish, generation))
    }

    fn spawn_fetch(&self, favorite_dish: &str, generation: Generation) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        settle(
            self.source.fetch_recommendations(favorite_dish),
            generation,
            ApiError::user_message,
            move |event| {
                if !lock(&inner).machine.apply(event) {
                    tracing::debug!("discarding stale recommendation completion");
                }
            },
        )
    }

    /// Snapshot of the current state for the renderer.
    pub fn state(&self) -> FetchState<Recommendations> {
        lock(&self.inner).machine.state().clone()
    }
}
