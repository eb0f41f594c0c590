//! Image upload input and path derivation

use super::ValidationError;

/// Largest accepted upload, in bytes.
pub const MAX_IMAGE_BYTES: usize = 1_000_000;

/// Extension every stored image gets, whatever its MIME type.
pub const IMAGE_EXTENSION: &str = "png";

/// URL prefix the image directory is served under.
pub const IMAGES_URL_PREFIX: &str = "/images";

/// File name an image is stored under.
pub fn image_file_name(image_id: i64) -> String {
    format!("{}.{}", image_id, IMAGE_EXTENSION)
}

/// Public path of a stored image, e.g. `/images/7.png`.
pub fn image_path(image_id: i64) -> String {
    format!("{}/{}", IMAGES_URL_PREFIX, image_file_name(image_id))
}

/// A validated upload: name, MIME type and contents.
#[derive(Debug, Clone)]
pub struct NewImage {
    pub image_name: String,
    pub mime_type: String,
    data: Vec<u8>,
}

impl NewImage {
    /// Accept an upload of at most [`MAX_IMAGE_BYTES`].
    pub fn new(
        image_name: impl Into<String>,
        mime_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Result<Self, ValidationError> {
        if data.len() > MAX_IMAGE_BYTES {
            return Err(ValidationError::TooLarge {
                field: "file",
                max_bytes: MAX_IMAGE_BYTES,
            });
        }

        Ok(Self {
            image_name: image_name.into(),
            mime_type: mime_type.into(),
            data,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_always_uses_png() {
        assert_eq!(image_file_name(7), "7.png");
        assert_eq!(image_path(42), "/images/42.png");
    }

    #[test]
    fn accepts_exact_limit() {
        let image = NewImage::new("a.jpg", "image/jpeg", vec![0; MAX_IMAGE_BYTES]).unwrap();
        assert_eq!(image.data().len(), MAX_IMAGE_BYTES);
    }

    #[test]
    fn rejects_over_limit() {
        let err = NewImage::new("big.png", "image/png", vec![0; MAX_IMAGE_BYTES + 1]).unwrap_err();
        assert_eq!(err.to_string(), "file exceed 1MByte");
    }
}
