// Error types
pub mod error;

// Response envelopes per endpoint
pub mod envelope;

// Raw record -> canonical Dish normalization
pub mod normalize;

pub use envelope::{DishEnvelope, HomeEnvelope, RecommendEnvelope};
pub use error::{Error, Result};
pub use normalize::{normalize_dish, normalize_dishes};
