//! tagbook-server: HTTP backend for events, persons and images
//!
//! Events can be tagged with persons and images (many-to-many). The
//! detail view of an event composes the event with everything tagged to it.
//!
//! Layers, leaf-first:
//! - [`db`]: connection pool, schema bootstrap, repositories
//! - [`storage`]: on-disk image files
//! - [`http`]: axum router, extractors, error mapping

pub mod db;
pub mod http;
pub mod models;
pub mod storage;

pub use db::{create_pool, DbSettings};
pub use http::{run_server, ServerConfig};
