//! Account repository (read-only)

use sqlx::{FromRow, MySqlPool};

use super::DbError;

/// Account record from database
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub account_id: i64,
    pub login_name: String,
    pub shadow_password: String,
}

/// Account repository
pub struct AccountRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AccountRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List every account ordered by id.
    pub async fn list(&self) -> Result<Vec<Account>, DbError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT account_id, login_name, shadow_password
            FROM accounts
            ORDER BY account_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(accounts)
    }
}
