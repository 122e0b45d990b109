mod config;
mod logging;


use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use clap::{Parser, Subcommand};
use frontend_settings::{FrontendSettingsModule, ModuleCtx, UpdateStateCell};
use frontend_settings_sdk::SessionContext;
use mimalloc::MiMalloc;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Frontend settings server - serves the client bootstrap document
#[derive(Parser)]
#[command(name = "frontend-settings-server")]
#[command(about = "Frontend settings server - serves the client bootstrap document")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose);

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    logging::init_logging(&config.logging)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.validate()?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn inject_session(
    State(session): State<Arc<SessionContext>>,
    mut req: Request,
    next: Next,
) -> Response {
    req.extensions_mut().insert(session.as_ref().clone());
    next.run(req).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

async fn run_server(config: AppConfig) -> Result<()> {
    config.validate()?;
    let addr = config.listen_addr()?;

    tracing::info!("Frontend settings server starting");

    let db = sea_orm::Database::connect(config.database.dsn.as_str())
        .await
        .context("failed to connect to database")?;

    let module = FrontendSettingsModule::default();
    module.migrate(&db).await?;

    let updates = Arc::new(UpdateStateCell::default());
    if !config.updates.latest_version.is_empty() {
        updates.publish(
            &config.updates.latest_version,
            &config.frontend.build.version,
        );
    }

    module
        .init(ModuleCtx {
            db,
            config: config.frontend.clone(),
            plugin_dirs: config.plugins.dirs.clone(),
            updates,
        })
        .await?;

    let session = Arc::new(config.session.to_context());
    let router = module
        .register_rest(Router::new())?
        .layer(middleware::from_fn_with_state(session, inject_session))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Frontend settings server stopped");
    Ok(())
}
