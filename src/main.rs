use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

use platelog::api::NutritionApi;
use platelog::cli;
use platelog::goals::{GoalStore, default_goals_path};

#[derive(Parser)]
#[command(name = "platelog")]
#[command(about = "Track meals by photo against daily nutrition goals")]
struct Cli {
    /// Base URL of the nutrition server
    #[arg(long, env = "PLATELOG_SERVER_URL", default_value = "http://127.0.0.1:5000")]
    server_url: String,

    /// Where the goal file lives (defaults to the platform data directory)
    #[arg(long, env = "PLATELOG_GOALS_PATH", value_name = "FILE")]
    goals_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// With no subcommand the graphical tracker opens
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a meal photo and print the estimate with today's summary
    Analyze {
        /// Path to the photo to submit
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,

        /// Name of the food, passed along as a hint for the analysis
        #[arg(long)]
        name: Option<String>,

        /// Portion hint, e.g. "2 slices"
        #[arg(long)]
        quantity: Option<String>,
    },
    /// Print today's totals, goal progress, and streak
    Stats,
    /// Show or update the stored daily goals
    Goals {
        /// Updates in the form NUTRIENT=VALUE, e.g. calories=1800
        #[arg(value_name = "NUTRIENT=VALUE")]
        set: Vec<String>,
    },
    /// Clear today's totals on the server
    Reset,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "platelog=debug" } else { "platelog=info" };
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.parse()?))
        .init();

    let store = GoalStore::new(args.goals_path.unwrap_or_else(default_goals_path));
    let api = NutritionApi::new(args.server_url.as_str())?;

    match args.command {
        Some(command) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async {
                match command {
                    Commands::Analyze { image_path, name, quantity } => {
                        cli::run_analyze(&api, &store, &image_path, name, quantity).await
                    }
                    Commands::Stats => cli::run_stats(&api, &store).await,
                    Commands::Goals { set } => cli::run_goals(&store, &set).await,
                    Commands::Reset => cli::run_reset(&api).await,
                }
            })
        }
        None => launch_window(api, store),
    }
}

#[cfg(feature = "gui")]
fn launch_window(api: NutritionApi, store: GoalStore) -> anyhow::Result<()> {
    platelog::gui::run(api, store)
}

#[cfg(not(feature = "gui"))]
fn launch_window(_api: NutritionApi, _store: GoalStore) -> anyhow::Result<()> {
    anyhow::bail!("this build has no window support; use a subcommand (see --help)")
}
