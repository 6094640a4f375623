use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use futures::future::BoxFuture;
use tastelens_client::ApiError;
use tastelens_runtime::{DishSource, FeedSource, RecommendSource};
use tastelens_types::{Dish, Recommendations};
use tokio::sync::oneshot;

struct Entry<T> {
    gate: Option<oneshot::Receiver<()>>,
    outcome: Result<T, ApiError>,
}

/// A source that replays a scripted queue of outcomes, one per fetch.
///
/// Gated entries park until the test fires their sender, which lets a test
/// resolve overlapping requests in any order it wants. The issued counter
/// records how many fetches were actually started.
pub struct ScriptedSource<T> {
    entries: Mutex<VecDeque<Entry<T>>>,
    issued: AtomicUsize,
}

pub type ScriptedFeedSource = ScriptedSource<Vec<Dish>>;
pub type ScriptedDishSource = ScriptedSource<Dish>;
pub type ScriptedRecommendSource = ScriptedSource<Recommendations>;

impl<T> Default for ScriptedSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScriptedSource<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            issued: AtomicUsize::new(0),
        }
    }

    /// Queue an outcome that resolves as soon as it is fetched.
    pub fn push_ok(&self, data: T) {
        self.push_entry(None, Ok(data));
    }

    pub fn push_err(&self, err: ApiError) {
        self.push_entry(None, Err(err));
    }

    /// Queue an outcome that parks until the returned sender fires (or drops).
    pub fn push_gated_ok(&self, data: T) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push_entry(Some(rx), Ok(data));
        tx
    }

    pub fn push_gated_err(&self, err: ApiError) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push_entry(Some(rx), Err(err));
        tx
    }

    /// How many fetches have been issued against this source.
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }

    fn push_entry(&self, gate: Option<oneshot::Receiver<()>>, outcome: Result<T, ApiError>) {
        self.entries
            .lock()
            .expect("scripted source lock")
            .push_back(Entry { gate, outcome });
    }

    fn next_entry(&self) -> Entry<T> {
        self.issued.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .expect("scripted source lock")
            .pop_front()
            .unwrap_or(Entry {
                gate: None,
                outcome: Err(ApiError::Connectivity(
                    "scripted source exhausted".to_string(),
                )),
            })
    }
}

impl<T: Send + 'static> ScriptedSource<T> {
    fn fetch(&self) -> BoxFuture<'static, Result<T, ApiError>> {
        let entry = self.next_entry();
        Box::pin(async move {
            if let Some(gate) = entry.gate {
                // A dropped sender still releases the gate.
                let _ = gate.await;
            }
            entry.outcome
        })
    }
}

impl FeedSource for ScriptedSource<Vec<Dish>> {
    fn fetch_featured(&self) -> BoxFuture<'static, Result<Vec<Dish>, ApiError>> {
        self.fetch()
    }
}

impl DishSource for ScriptedSource<Dish> {
    fn fetch_dish(&self, _id: &str) -> BoxFuture<'static, Result<Dish, ApiError>> {
        self.fetch()
    }
}

impl RecommendSource for ScriptedSource<Recommendations> {
    fn fetch_recommendations(
        &self,
        _favorite_dish: &str,
    ) -> BoxFuture<'static, Result<Recommendations, ApiError>> {
        self.fetch()
    }
}
