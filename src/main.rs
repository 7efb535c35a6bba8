use clap::Parser;
use recipe_query::server::routes::create_router;
use recipe_query::storage::loader::{load_recipes, load_recipes_from_path};
use recipe_query::storage::memory::RecipeStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "recipe-query")]
#[command(version, about = "Category + multi-ingredient fuzzy recipe search API")]
struct Cli {
    /// Address to serve on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Recipe dataset file overriding the embedded one
    #[arg(long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    // 1. Recipe store (loaded once, read-only for the process lifetime):
    let recipes = match &cli.data {
        Some(path) => {
            tracing::info!("Loading recipes from {}", path.display());
            load_recipes_from_path(path)?
        }
        None => {
            tracing::info!("Loading embedded recipe dataset");
            load_recipes()?
        }
    };

    let store = Arc::new(RecipeStore::new(recipes));
    tracing::info!("Recipe store ready with {} recipes", store.len());

    // 2. HTTP Router:
    let app = create_router(store);

    // 3. Start HTTP server:
    tracing::info!("Recipe API listening on {}", cli.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
