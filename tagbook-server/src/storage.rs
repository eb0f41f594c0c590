//! On-disk image store
//!
//! Uploaded images land in a single flat directory, one file per image id.
//! The same directory is served statically under `/images`.

use std::path::{Path, PathBuf};

use crate::models::image_file_name;

/// Image store error
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to prepare image directory {path}: {source}")]
    Prepare {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write image {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Directory of uploaded images
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the file for `image_id` lives.
    pub fn file_path(&self, image_id: i64) -> PathBuf {
        self.root.join(image_file_name(image_id))
    }

    /// Create the directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StorageError::Prepare {
                path: self.root.clone(),
                source,
            })
    }

    /// Write `data` as the file for `image_id`, replacing any previous file.
    ///
    /// A failed write may leave a partial file behind.
    pub async fn save(&self, image_id: i64, data: &[u8]) -> Result<PathBuf, StorageError> {
        let path = self.file_path(image_id);
        tokio::fs::write(&path, data)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "image stored");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_writes_png_named_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let path = store.save(12, b"jpeg bytes").await.unwrap();

        assert_eq!(path, dir.path().join("12.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"jpeg bytes");
    }

    #[tokio::test]
    async fn ensure_dir_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().join("public").join("images"));

        store.ensure_dir().await.unwrap();

        assert!(store.root().is_dir());
    }

    #[tokio::test]
    async fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().join("absent"));

        let err = store.save(1, b"x").await.unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
