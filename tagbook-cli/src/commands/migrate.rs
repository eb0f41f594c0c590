//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use tagbook_server::db::schema;

use crate::config::DbArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Create any missing tables, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.db.connect().await?;

    schema::run(&pool)
        .await
        .context("Failed to bootstrap schema")?;

    for table in schema::table_names() {
        println!("{}", table);
    }

    pool.close().await;
    Ok(())
}
