use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "tastelens")]
#[command(about = "Discover dishes and personalized recommendations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to the XDG config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Service base URL, overriding the configured one
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the featured dishes from the landing feed
    Home,

    /// Show the details of one dish
    Dish {
        /// Dish identifier (the dish name, as the service routes by name)
        id: String,
    },

    /// Show the user profile with recently rated and recommended dishes
    Profile {
        /// Favorite dish to base recommendations on, overriding the profile
        #[arg(long)]
        favorite_dish: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}
