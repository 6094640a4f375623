pub mod dish;
pub mod error;
pub mod fetch;

pub use dish::{Dish, Recommendations, PLACEHOLDER_IMAGE_URL};
pub use error::{Error, Result};
pub use fetch::{FetchEvent, FetchMachine, FetchState, Generation};
