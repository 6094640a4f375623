//! Test support for the TasteLens client crates.
//!
//! Provides scripted sources whose completions resolve in an order the test
//! controls (for stale-suppression and re-key properties) and raw-record
//! builders for both wire dialects.

pub mod fixtures;
pub mod sources;

pub use sources::{
    ScriptedDishSource, ScriptedFeedSource, ScriptedRecommendSource, ScriptedSource,
};
