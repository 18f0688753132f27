/// Starter Server - user CRUD API and landing page
use clap::{Parser, Subcommand};
use starter_server::{config::ServerConfig, routes, server, services::UserService, state::AppState};
use starter_storage::SqliteUserRepository;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "starter-server")]
#[command(about = "Starter web service: user CRUD API and landing page", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", env = "STARTER_CONFIG")]
    config: PathBuf,

    /// Show verbose debug information
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Apply database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "starter_server=debug,starter_storage=debug,tower_http=debug"
    } else {
        "starter_server=info,starter_storage=info,tower_http=info"
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load(&cli.config)?;
    config.validate()?;
    tracing::debug!(path = %cli.config.display(), "Configuration loaded");

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await?,
        Commands::Migrate => migrate(&config).await?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!(environment = ?config.app.environment, "Starting Starter Server");

    // Initialize database
    let pool =
        starter_storage::create_pool(&config.database.url, &config.database.pool_settings()).await?;
    starter_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Wire layers: storage -> service -> transport
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let users = Arc::new(UserService::new(repository));
    let app_state = AppState::new(users);

    let app = routes::create_router(app_state, &config.server);
    server::run(app, &config.server).await?;

    Ok(())
}

async fn migrate(config: &ServerConfig) -> anyhow::Result<()> {
    let pool =
        starter_storage::create_pool(&config.database.url, &config.database.pool_settings()).await?;
    starter_storage::run_migrations(&pool).await?;

    let users = starter_storage::users::count(&pool).await?;
    tracing::info!(users, "Migrations applied");

    Ok(())
}
