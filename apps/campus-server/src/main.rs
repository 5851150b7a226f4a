//! Campus server: hosts the room service over HTTP

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use config::AppConfig;
use room_service::RoomServiceModule;
use sea_orm::{ConnectOptions, Database};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

/// Campus facilities server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = AppConfig::load(args.config.as_deref())?;

    if args.print_config {
        println!("{:#?}", cfg);
        return Ok(());
    }

    logging::init(&cfg.logging)?;
    tracing::debug!(config = ?cfg, "configuration loaded");

    let mut options = ConnectOptions::new(cfg.database.url.clone());
    options
        .max_connections(cfg.database.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("could not connect to database")?;
    tracing::info!(max_connections = cfg.database.max_connections, "database connected");

    let module = RoomServiceModule::new(cfg.rooms.clone());
    module.init(Arc::new(db)).await?;

    let app = module
        .register_rest(axum::Router::new())?
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind_addr))?;
    tracing::info!(addr = %cfg.server.bind_addr, "campus server listening");

    let cancel = CancellationToken::new();
    tokio::spawn(watch_shutdown(cancel.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .context("server error")?;

    tracing::info!("campus server stopped");
    Ok(())
}

async fn watch_shutdown(cancel: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "failed to listen for shutdown signal"),
    }
    cancel.cancel();
}
