//! Static file serving
//!
//! - `/images/*` from the image store directory
//! - `/assets/*` from `<frontend_dir>/assets`
//! - `/` and `/home` serve `<frontend_dir>/index.html`

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::http::server::AppState;
use crate::models::image::IMAGES_URL_PREFIX;

/// Create router for static files
pub fn router(frontend_dir: &Path, images_dir: &Path) -> Router<Arc<AppState>> {
    tracing::info!(
        frontend = %frontend_dir.display(),
        images = %images_dir.display(),
        "Serving static files"
    );

    let index = ServeFile::new(frontend_dir.join("index.html"));

    Router::new()
        .nest_service(IMAGES_URL_PREFIX, ServeDir::new(images_dir))
        .nest_service("/assets", ServeDir::new(frontend_dir.join("assets")))
        .route_service("/", index.clone())
        .route_service("/home", index)
}
