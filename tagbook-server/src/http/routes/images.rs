//! Image endpoints
//!
//! Uploads arrive as multipart form data with the bytes in a `file` field.

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{ImageRepo, ImageWithPath};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiQuery, EntityId};
use crate::http::server::AppState;
use crate::models::{NewImage, Pagination, PaginationParams, ValidationError, MAX_IMAGE_BYTES};

/// Multipart field carrying the upload.
const FILE_FIELD: &str = "file";

/// MIME type recorded when the part has no Content-Type.
const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Request body cap for this router. Well above [`MAX_IMAGE_BYTES`] so
/// oversize files reach the handler and get a 400, not a 413.
const UPLOAD_BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Image response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageResponse {
    pub image_id: i64,
    pub image_name: String,
    pub content_type: String,
    #[serde(rename = "ImagePath")]
    pub image_path: String,
}

impl From<ImageWithPath> for ImageResponse {
    fn from(i: ImageWithPath) -> Self {
        Self {
            image_id: i.image.image_id,
            image_name: i.image.image_name,
            content_type: i.image.mime_type,
            image_path: i.image_path,
        }
    }
}

/// Body returned by POST /api/images
#[derive(Debug, Serialize, Deserialize)]
pub struct ImageCreated {
    #[serde(rename = "ImageID")]
    pub image_id: i64,
}

/// GET /api/images - list images
async fn list_images(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Vec<ImageResponse>>, ApiError> {
    let page = Pagination::from(params);
    let images = ImageRepo::new(&state.pool).list(page).await?;

    Ok(Json(images.into_iter().map(ImageResponse::from).collect()))
}

/// POST /api/images - upload an image
async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<ImageCreated>), ApiError> {
    let mut multipart = multipart.map_err(|_| ValidationError::Missing { field: FILE_FIELD })?;
    let image = read_file_field(&mut multipart).await?;

    let image_id = ImageRepo::new(&state.pool)
        .create(&image, &state.images)
        .await?;

    Ok((StatusCode::CREATED, Json(ImageCreated { image_id })))
}

/// GET /api/images/{id} - get a single image
async fn get_image(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<ImageResponse>, ApiError> {
    let image = ImageRepo::new(&state.pool).get(id).await?;
    Ok(Json(ImageResponse::from(image)))
}

/// DELETE /api/images/{id} - delete an image record (the file stays)
async fn delete_image(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    ImageRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Pull the `file` part out of the form, skipping any other fields.
async fn read_file_field(multipart: &mut Multipart) -> Result<NewImage, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let image_name = field.file_name().unwrap_or_default().to_owned();
        let mime_type = field.content_type().unwrap_or(DEFAULT_MIME_TYPE).to_owned();
        let data = field.bytes().await.map_err(multipart_error)?;

        return Ok(NewImage::new(image_name, mime_type, data.to_vec())?);
    }

    Err(ValidationError::Missing { field: FILE_FIELD }.into())
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ValidationError::TooLarge {
            field: FILE_FIELD,
            max_bytes: MAX_IMAGE_BYTES,
        }
        .into()
    } else {
        ValidationError::Malformed {
            what: "multipart body",
            detail: err.body_text(),
        }
        .into()
    }
}

/// Image routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/images", get(list_images).post(upload_image))
        .route("/api/images/{id}", get(get_image).delete(delete_image))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::Image;

    #[test]
    fn response_renames_mime_type() {
        let response = ImageResponse::from(ImageWithPath::from(Image {
            image_id: 5,
            image_name: "cat.gif".into(),
            mime_type: "image/gif".into(),
        }));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["content_type"], "image/gif");
        assert_eq!(json["ImagePath"], "/images/5.png");
        assert_eq!(json["image_id"], 5);
    }

    #[test]
    fn created_body_uses_legacy_key() {
        let body = serde_json::to_string(&ImageCreated { image_id: 2 }).unwrap();
        assert_eq!(body, r#"{"ImageID":2}"#);
    }
}
