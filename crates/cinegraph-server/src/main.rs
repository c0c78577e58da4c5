//! Cinegraph Server - GraphQL API for the movie catalog
//!
//! Provides HTTP endpoints for:
//! - POST /graphql - Execute GraphQL queries and mutations
//! - GET /graphql - GraphQL Playground (when enabled)
//! - GET /health - Service and store health

use cinegraph_core::{Catalog, store};
use cinegraph_server::{CinegraphServer, api, config};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Cinegraph Server CLI arguments
#[derive(Parser, Debug)]
#[command(name = "cinegraph-server")]
#[command(about = "Cinegraph movie catalog GraphQL server", long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Directory holding server.toml
    #[arg(long, env = "CINEGRAPH_CONFIG_DIR", default_value = "config")]
    config_dir: PathBuf,

    /// Bind address (overrides configuration)
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Store connection string, e.g. memory:// or lmdb://./data (overrides configuration)
    #[arg(long)]
    store_url: Option<String>,

    /// Print the GraphQL schema and exit
    #[arg(long)]
    print_schema: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_schema {
        println!("{}", api::graphql::schema_sdl());
        return Ok(());
    }

    let rt = tokio::runtime::Builder::new_multi_thread()
        .thread_name("cinegraph-worker")
        .enable_all()
        .build()?;

    // Initialize tracing early (before async_main) to capture runtime logs
    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "cinegraph_server=debug,cinegraph_core=debug,tower_http=debug".into()
        })
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "cinegraph_server=info,cinegraph_core=info,tower_http=info".into()
        })
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    rt.block_on(async_main(args))
}

async fn async_main(args: Args) -> anyhow::Result<()> {
    let mut config = config::Config::from_env(&args.config_dir)?;
    if let Some(addr) = args.addr {
        config = config.with_addr(addr);
    }
    if let Some(store_url) = args.store_url {
        config = config.with_store_url(store_url);
    }

    // The store handle is opened once here and shared by every request
    let store = store::open(&config.store_config()?)?;
    let catalog = Catalog::new(store);
    catalog.ping().await?;
    info!("Entity store ready ({} backend)", catalog.backend());

    let server = CinegraphServer::shared(catalog);
    let app = api::router(server.clone(), config.playground);

    let listener = TcpListener::bind(&config.addr).await?;
    info!("Cinegraph Server listening on {}", config.addr);
    if config.playground {
        info!("GraphQL Playground at http://{}/graphql", config.addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, flushing entity store");
    server.catalog.flush().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
