use std::sync::{Arc, Mutex};

use tastelens_types::{Dish, FetchMachine, FetchState};
use tokio::task::JoinHandle;

use crate::controllers::{lock, settle};
use crate::sources::FeedSource;

/// Landing feed: a fixed collection of featured dishes, fetched once per
/// view activation. No key parameter.
pub struct FeedController {
    source: Arc<dyn FeedSource>,
    machine: Arc<Mutex<FetchMachine<Vec<Dish>>>>,
}

impl FeedController {
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self {
            source,
            machine: Arc::new(Mutex::new(FetchMachine::new())),
        }
    }

    /// Start (or restart) the feed fetch. A no-op while a fetch is already
    /// in flight. Returns the handle of the spawned fetch task, if any.
    pub fn activate(&self) -> Option<JoinHandle<()>> {
        let generation = {
            let mut machine = lock(&self.machine);
            if machine.is_loading() {
                return None;
            }
            machine.begin()
        };

        let machine = Arc::clone(&self.machine);
        Some(settle(
            self.source.fetch_featured(),
            generation,
            // Feed error policy: every failure collapses to the one generic
            // connectivity message.
            |_| tastelens_client::error::CONNECTIVITY_MESSAGE.to_string(),
            move |event| {
                if !lock(&machine).apply(event) {
                    tracing::debug!("discarding stale feed completion");
                }
            },
        ))
    }

    /// Snapshot of the current state for the renderer.
    pub fn state(&self) -> FetchState<Vec<Dish>> {
        lock(&self.machine).state().clone()
    }
}
