//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 10 connections), passed down explicitly
//! - limit/offset bound as parameters, never spliced into SQL
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Transactions for every write

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_lazy_pool, create_pool, DbSettings, SettingsError};
pub use repos::*;
pub use sqlx::MySqlPool;
