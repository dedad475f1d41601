/// Encore Server - now-playing host for the Encore archive player
use clap::{Parser, Subcommand};
use encore_core::Catalog;
use encore_server::{build_state, config::ServerConfig, create_router};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "encore-server")]
#[command(about = "Encore archive player playback host", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "ENCORE_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the catalog (optionally filtered by title)
    Catalog {
        /// Catalog JSON file (defaults to the configured path)
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Case-insensitive title filter
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "encore_server=info,encore_playback=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Catalog { path, search } => {
            print_catalog(path, search.as_deref())?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    let config = match path {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::load()?,
    };
    config.validate()?;
    Ok(config)
}

fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    if !path.exists() {
        tracing::warn!("Catalog {:?} not found, starting with an empty catalog", path);
        return Ok(Catalog::new());
    }

    let catalog = Catalog::load(path)?;
    tracing::info!("Loaded {} catalog items from {:?}", catalog.len(), path);
    Ok(catalog)
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Encore Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let catalog = load_catalog(&config.catalog.path)?;

    // Build application state (one playback host for the process)
    let app_state = build_state(&config, catalog)?;

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_catalog(path: Option<PathBuf>, search: Option<&str>) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => load_config(None)?.catalog.path,
    };
    let catalog = load_catalog(&path)?;

    println!("Catalog:");
    for item in catalog.search(search.unwrap_or_default()) {
        let locator = item.playback_locator().unwrap_or("<no media>");
        println!("  {} - {} ({})", item.id, item.title, locator);
    }

    Ok(())
}
