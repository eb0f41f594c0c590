//! Account endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{Account, AccountRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Account response
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountResponse {
    #[serde(rename = "AccountID")]
    pub account_id: i64,
    pub login_name: String,
    pub shadow_password: String,
}

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        Self {
            account_id: a.account_id,
            login_name: a.login_name,
            shadow_password: a.shadow_password,
        }
    }
}

/// GET /api/accounts - list all accounts
async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let accounts = AccountRepo::new(&state.pool).list().await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Account routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/accounts", get(list_accounts))
}
