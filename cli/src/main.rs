mod browse;
mod forms;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skillet_core::api::{ApiConfig, HttpRecipeApi, DEFAULT_SERVER};
use skillet_core::views::CollectionView;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "skillet")]
#[command(about = "Terminal client for a remote recipe collection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the collection interactively
    Browse {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, env = "SKILLET_SERVER", default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// Print the collection and exit
    List {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, env = "SKILLET_SERVER", default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// Register a new recipe
    New {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, env = "SKILLET_SERVER", default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// Edit an existing recipe
    Edit {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, env = "SKILLET_SERVER", default_value = DEFAULT_SERVER)]
        server: String,
        /// Recipe id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Browse { server } => {
            browse::run(&client(&server)?).await?;
        }
        Commands::List { server } => {
            list(&client(&server)?).await;
        }
        Commands::New { server } => {
            forms::run_create(&client(&server)?).await?;
        }
        Commands::Edit { server, id } => {
            forms::run_edit(&client(&server)?, &id).await?;
        }
    }

    Ok(())
}

fn client(server: &str) -> Result<HttpRecipeApi> {
    Ok(HttpRecipeApi::new(ApiConfig::from_env().with_base_url(server))?)
}

async fn list(api: &HttpRecipeApi) {
    let mut view = CollectionView::new();
    view.load(api).await;
    if view.recipes().is_empty() {
        println!("No recipes registered.");
        return;
    }
    for recipe in view.recipes() {
        println!("{}\t{}", recipe.id, recipe.titulo);
    }
}
