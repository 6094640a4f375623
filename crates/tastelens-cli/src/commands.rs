use std::sync::Arc;

use anyhow::Result;
use is_terminal::IsTerminal;
use tastelens_client::ApiClient;
use tastelens_runtime::{
    Config, DishDetailController, FeedController, RecommendationController, UserProfile,
};

use crate::args::{Cli, ColorChoice, Commands};
use crate::render::{self, RenderOpts};

pub fn run(cli: Cli) -> Result<()> {
    init_tracing();

    let config = Config::load(cli.config.as_deref())?;
    let base_url = cli
        .base_url
        .unwrap_or_else(|| config.service.base_url.clone());
    let client = ApiClient::new(&base_url)?;

    let opts = RenderOpts {
        enable_color: match cli.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        },
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch(cli.command, client, config.profile, opts))
}

async fn dispatch(
    command: Commands,
    client: ApiClient,
    profile: UserProfile,
    opts: RenderOpts,
) -> Result<()> {
    match command {
        Commands::Home => {
            let controller = FeedController::new(Arc::new(client));
            // The pre-fetch snapshot is the progress line; it goes to stderr
            // so piped output stays clean.
            eprintln!("{}", render::render_feed(&controller.state(), &opts).trim_end());
            if let Some(task) = controller.activate() {
                task.await?;
            }
            print!("{}", render::render_feed(&controller.state(), &opts));
        }
        Commands::Dish { id } => {
            let controller = DishDetailController::new(Arc::new(client));
            eprintln!("{}", render::render_dish(&controller.state(), &opts).trim_end());
            if let Some(task) = controller.set_dish(&id) {
                task.await?;
            }
            print!("{}", render::render_dish(&controller.state(), &opts));
        }
        Commands::Profile { favorite_dish } => {
            let mut profile = profile;
            if let Some(favorite) = favorite_dish {
                profile.favorite_dish = favorite;
            }
            let controller = RecommendationController::new(Arc::new(client));
            if let Some(task) = controller.request(&profile.favorite_dish) {
                task.await?;
            }
            print!(
                "{}",
                render::render_recommendations(&profile, &controller.state(), &opts)
            );
        }
    }
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // Controlled with the RUST_LOG environment variable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
