//! HTTP server command for the tagbook API
//!
//! Connects to MySQL, optionally bootstraps the schema, then serves the
//! API and static files until Ctrl+C / SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use tagbook_server::db::schema;
use tagbook_server::http::{run_server, ServerConfig};

use crate::config::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TAGBOOK_BIND", default_value = "0.0.0.0:1323")]
    pub bind: SocketAddr,

    /// Directory uploaded images are stored in and served from
    #[arg(long, env = "TAGBOOK_IMAGES_DIR", default_value = "public/images")]
    pub images_dir: PathBuf,

    /// Directory holding the frontend bundle (index.html, assets/)
    #[arg(long, env = "TAGBOOK_FRONTEND_DIR", default_value = "public")]
    pub frontend_dir: PathBuf,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Create missing tables before serving
    #[arg(long)]
    pub migrate: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting tagbook server on {}", args.bind);

    // Unreachable store is fatal at startup
    let pool = args.db.connect().await?;

    if args.migrate {
        schema::run(&pool)
            .await
            .context("Failed to bootstrap schema")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        images_dir: args.images_dir,
        frontend_dir: args.frontend_dir,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
