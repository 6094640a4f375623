pub mod config;
pub mod controllers;
pub mod error;
pub mod sources;

pub use config::{Config, ServiceConfig, UserProfile};
pub use controllers::{DishDetailController, FeedController, RecommendationController};
pub use error::{Error, Result};
pub use sources::{DishSource, FeedSource, RecommendSource};
