//! Database settings shared by every command
//!
//! Each flag falls back to its `MYSQL_*` environment variable, then to the
//! development default.

use anyhow::{Context, Result};
use clap::Args;
use tagbook_server::db::pool::{
    DEFAULT_MYSQL_DBNAME, DEFAULT_MYSQL_HOST, DEFAULT_MYSQL_PASS, DEFAULT_MYSQL_PORT,
    DEFAULT_MYSQL_USER,
};
use tagbook_server::db::{create_pool, DbSettings, MySqlPool};

#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// MySQL host
    #[arg(long = "mysql-host", env = "MYSQL_HOST", default_value = DEFAULT_MYSQL_HOST)]
    pub host: String,

    /// MySQL port
    #[arg(long = "mysql-port", env = "MYSQL_PORT", default_value_t = DEFAULT_MYSQL_PORT)]
    pub port: u16,

    /// MySQL user
    #[arg(long = "mysql-user", env = "MYSQL_USER", default_value = DEFAULT_MYSQL_USER)]
    pub user: String,

    /// MySQL password
    #[arg(
        long = "mysql-pass",
        env = "MYSQL_PASS",
        default_value = DEFAULT_MYSQL_PASS,
        hide_env_values = true
    )]
    pub password: String,

    /// MySQL database name
    #[arg(long = "mysql-dbname", env = "MYSQL_DBNAME", default_value = DEFAULT_MYSQL_DBNAME)]
    pub database: String,
}

impl From<DbArgs> for DbSettings {
    fn from(args: DbArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            user: args.user,
            password: args.password,
            database: args.database,
        }
    }
}

impl DbArgs {
    /// Open the connection pool. Failure here is fatal for every command.
    pub async fn connect(self) -> Result<MySqlPool> {
        let settings = DbSettings::from(self);
        create_pool(&settings)
            .await
            .with_context(|| format!("Failed to connect to {}", settings.redacted_dsn()))
    }
}
