/// Vinyl Server - album catalog HTTP service
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vinyl_server::{api, config::ServerConfig, state::AppState};
use vinyl_storage::SqliteCatalog;

#[derive(Parser)]
#[command(name = "vinyl-server")]
#[command(about = "Vinyl album catalog HTTP service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run database migrations and exit
    Migrate {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vinyl_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Migrate { config } => {
            migrate(config.as_deref()).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;

    tracing::info!("Starting Vinyl Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = vinyl_storage::create_pool(&config.storage.database_url).await?;
    vinyl_storage::run_migrations(&pool).await?;

    let db = Arc::new(SqliteCatalog::new(pool));
    tracing::info!("Database connected");

    // Build application state and router
    let app_state = AppState::new(db);
    let app = api::router(app_state);

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

async fn migrate(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;

    let pool = vinyl_storage::create_pool(&config.storage.database_url).await?;
    vinyl_storage::run_migrations(&pool).await?;

    tracing::info!("Migrations applied to {}", config.storage.database_url);

    Ok(())
}
