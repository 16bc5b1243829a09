//! REST server for the MTG catalog.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use mtg_catalog::{config, server, AsyncCatalog};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the catalog server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host address to bind to
    #[arg(long, env = "MTG_CATALOG_HOST", default_value = config::DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "MTG_CATALOG_PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// DuckDB database file (defaults to the platform data directory)
    #[arg(long, env = "MTG_CATALOG_DATABASE")]
    database: Option<PathBuf>,

    /// Keep the catalog in memory only
    #[arg(long, conflicts_with = "database")]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut builder = AsyncCatalog::builder();
    if !args.in_memory {
        builder = builder.database(args.database.unwrap_or_else(config::default_database_path));
    }
    let catalog = builder.build().await?;

    let app = server::router(catalog);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}
