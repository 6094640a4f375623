mod args;
mod commands;
pub mod render;

pub use args::{Cli, ColorChoice, Commands};
pub use commands::run;
