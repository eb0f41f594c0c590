//! Shared setup for store-backed tests
//!
//! Every test truncates the managed tables, so run them one at a time:
//!   MYSQL_HOST=... cargo test -p tagbook-server -- --ignored --test-threads=1

use tagbook_server::db::{create_pool, schema, DbSettings, MySqlPool};

/// Connect with the `MYSQL_*` settings and start from empty tables.
pub async fn fresh_pool() -> MySqlPool {
    // RUST_LOG=tagbook_server=debug shows the repository logs
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let settings = DbSettings::from_env().expect("bad MYSQL_* settings");
    let pool = create_pool(&settings)
        .await
        .expect("database unreachable");
    schema::run(&pool).await.expect("schema bootstrap failed");
    for table in schema::table_names().filter(|t| *t != "accounts") {
        sqlx::query(&format!("TRUNCATE TABLE {}", table))
            .execute(&pool)
            .await
            .expect("truncate failed");
    }
    pool
}
