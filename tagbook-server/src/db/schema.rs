//! Schema bootstrap
//!
//! Creates the tables the repositories expect when they are missing.
//! Existing tables are left untouched.

use sqlx::MySqlPool;

/// Tables in creation order.
const TABLES: &[(&str, &str)] = &[
    (
        "accounts",
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            account_id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            login_name VARCHAR(255) NOT NULL,
            shadow_password VARCHAR(255) NOT NULL,
            UNIQUE KEY uq_accounts_login_name (login_name)
        )
        "#,
    ),
    (
        "events",
        r#"
        CREATE TABLE IF NOT EXISTS events (
            event_id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            account_id BIGINT NOT NULL,
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            event_date DATETIME NOT NULL,
            UNIQUE KEY uq_events_account_title_date (account_id, title, event_date)
        )
        "#,
    ),
    (
        "persons",
        r#"
        CREATE TABLE IF NOT EXISTS persons (
            person_id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            UNIQUE KEY uq_persons_name (first_name, last_name)
        )
        "#,
    ),
    (
        "images",
        r#"
        CREATE TABLE IF NOT EXISTS images (
            image_id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            image_name VARCHAR(255) NOT NULL,
            mime_type VARCHAR(255) NOT NULL
        )
        "#,
    ),
    // Tagging tables carry no foreign keys: rows may outlive their entities
    (
        "event_person_tagging",
        r#"
        CREATE TABLE IF NOT EXISTS event_person_tagging (
            event_id BIGINT NOT NULL,
            person_id BIGINT NOT NULL,
            PRIMARY KEY (event_id, person_id)
        )
        "#,
    ),
    (
        "event_image_tagging",
        r#"
        CREATE TABLE IF NOT EXISTS event_image_tagging (
            event_id BIGINT NOT NULL,
            image_id BIGINT NOT NULL,
            PRIMARY KEY (event_id, image_id)
        )
        "#,
    ),
];

/// Create any missing tables and make sure the default account exists.
pub async fn run(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema bootstrap...");

    for (name, ddl) in TABLES {
        sqlx::query(*ddl).execute(pool).await?;
        tracing::debug!(table = *name, "table ready");
    }

    sqlx::query(
        r#"
        INSERT IGNORE INTO accounts (account_id, login_name, shadow_password)
        VALUES (?, 'default', '')
        "#,
    )
    .bind(crate::models::DEFAULT_ACCOUNT_ID)
    .execute(pool)
    .await?;

    tracing::info!(tables = TABLES.len(), "Schema bootstrap complete");
    Ok(())
}

/// Names of the managed tables, in creation order.
pub fn table_names() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|(name, _)| *name)
}
