use std::sync::{Arc, Mutex};

use tastelens_client::ApiError;
use tastelens_types::{Dish, FetchMachine, FetchState, Generation};
use tokio::task::JoinHandle;

use crate::controllers::{lock, settle};
use crate::sources::DishSource;

struct Inner {
    machine: FetchMachine<Dish>,
    dish_id: Option<String>,
}

/// Dish detail view, keyed by dish identifier (the route parameter).
///
/// Re-fetches whenever the identifier changes; asking again for the current
/// identifier is a no-op, so at most one request is outstanding per key.
pub struct DishDetailController {
    source: Arc<dyn DishSource>,
    inner: Arc<Mutex<Inner>>,
}

impl DishDetailController {
    pub fn new(source: Arc<dyn DishSource>) -> Self {
        Self {
            source,
            inner: Arc::new(Mutex::new(Inner {
                machine: FetchMachine::new(),
                dish_id: None,
            })),
        }
    }

    /// Point the view at a dish. Fetches when the identifier is new; a
    /// repeat of the current identifier does not issue a second request
    /// (after an error, use [`retry`](Self::retry) instead).
    pub fn set_dish(&self, id: &str) -> Option<JoinHandle<()>> {
        let generation = {
            let mut inner = lock(&self.inner);
            let same_key = inner.dish_id.as_deref() == Some(id);
            if same_key && !matches!(inner.machine.state(), FetchState::Idle) {
                return None;
            }
            inner.dish_id = Some(id.to_string());
            inner.machine.begin()
        };
        Some(self.spawn_fetch(id, generation))
    }

    /// Explicitly re-arm after an error. No-op with no key or while loading.
    pub fn retry(&self) -> Option<JoinHandle<()>> {
        let (id, generation) = {
            let mut inner = lock(&self.inner);
            if inner.machine.is_loading() {
                return None;
            }
            let id = inner.dish_id.clone()?;
            let generation = inner.machine.begin();
            (id, generation)
        };
        Some(self.spawn_fetch(&id, generation))
    }

    fn spawn_fetch(&self, id: &str, generation: Generation) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        settle(
            self.source.fetch_dish(id),
            generation,
            ApiError::user_message,
            move |event| {
                if !lock(&inner).machine.apply(event) {
                    tracing::debug!("discarding stale dish fetch completion");
                }
            },
        )
    }

    /// Snapshot of the current state for the renderer.
    pub fn state(&self) -> FetchState<Dish> {
        lock(&self.inner).machine.state().clone()
    }

    /// The identifier the view is currently pointed at.
    pub fn dish_id(&self) -> Option<String> {
        lock(&self.inner).dish_id.clone()
    }
}
