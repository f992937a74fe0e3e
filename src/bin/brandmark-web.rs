//! Brandmark Web Server Binary
//!
//! This binary starts the brandmark web server that provides a JSON API
//! for a browser-based brand asset editor.
//!
//! # Usage
//!
//! ```bash
//! # Start with the configured address (127.0.0.1:3001 by default)
//! brandmark-web
//!
//! # Override host and port
//! brandmark-web --host 0.0.0.0 --port 8080
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brandmark::config::Config;
use brandmark::web;

/// Brandmark Web Server - JSON API for brand asset generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to the configured port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to the configured host)
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {e:#}");
        Config::default()
    });

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if let Ok(path) = Config::config_file_path() {
        info!("Config file: {}", path.display());
    }

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .context(format!("Invalid bind address: {}", config.bind_address()))?;

    web::run_server(config, addr).await
}
