//! View controllers: one fetch state machine per screen.
//!
//! Each controller owns its machine exclusively, issues at most one logical
//! request at a time, and tags every spawned fetch with the generation it
//! was issued under so a superseded request can never overwrite the state
//! of a newer one. Controllers never auto-retry; re-arming takes a key
//! change or an explicit retry.

mod detail;
mod feed;
mod recommend;

pub use detail::DishDetailController;
pub use feed::FeedController;
pub use recommend::RecommendationController;

use futures::future::BoxFuture;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tastelens_client::ApiError;
use tastelens_types::{FetchEvent, Generation};
use tokio::task::JoinHandle;

/// Lock with poison recovery: a panicked fetch task must not wedge the view.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drive one fetch to completion and feed the outcome back into the owning
/// machine, tagged with the generation it was issued under. The raw error
/// never crosses this boundary; only the mapped message does.
pub(crate) fn settle<T, A>(
    fut: BoxFuture<'static, Result<T, ApiError>>,
    generation: Generation,
    to_message: fn(&ApiError) -> String,
    apply: A,
) -> JoinHandle<()>
where
    T: Send + 'static,
    A: FnOnce(FetchEvent<T>) + Send + 'static,
{
    tokio::spawn(async move {
        let event = match fut.await {
            Ok(data) => FetchEvent::FetchSucceeded { generation, data },
            Err(err) => FetchEvent::FetchFailed {
                generation,
                message: to_message(&err),
            },
        };
        apply(event);
    })
}
