use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{Environment, Settings};
use database::{ArticleStore, DbRepository, MemoryRepository, PoolConfig};
use std::sync::Arc;
use std::time::Duration;

/// The main entry point for the Blogful API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = configuration::load_config().context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve(args) => {
            args.apply(&mut settings);
            let _log_guard =
                configuration::init_tracing(&settings.logging, settings.application.environment)
                    .context("Failed to initialize logging")?;
            handle_serve(&settings, args.in_memory).await
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small CRUD REST API for blog articles.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Interface to bind, overriding `server.host`.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding `server.port`.
    #[arg(long)]
    port: Option<u16>,

    /// Deployment environment, overriding `application.environment`.
    #[arg(long, value_enum)]
    environment: Option<Environment>,

    /// Keep articles in process memory instead of PostgreSQL.
    #[arg(long)]
    in_memory: bool,
}

impl ServeArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(host) = &self.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(environment) = self.environment {
            settings.application.environment = environment;
        }
    }
}

// ==============================================================================
// Serve Command Logic
// ==============================================================================

async fn handle_serve(settings: &Settings, in_memory: bool) -> anyhow::Result<()> {
    let store: Arc<dyn ArticleStore> = if in_memory {
        tracing::warn!("Using the in-memory article store; data is lost on exit.");
        Arc::new(MemoryRepository::new())
    } else {
        let pool_config = PoolConfig {
            url: settings.database.url.clone(),
            max_connections: settings.database.max_connections,
            acquire_timeout: Duration::from_secs(settings.database.acquire_timeout_secs),
        };
        let pool = database::connect(&pool_config)
            .await
            .context("Failed to connect to the database")?;
        Arc::new(DbRepository::new(pool))
    };

    web_server::run_server(settings, store).await
}
