//! Photo storage for proof-of-delivery uploads.
//!
//! Filenames are derived from a fresh UUIDv4 plus the sanitized extension of
//! the original upload, so concurrent uploads can never collide and a stored
//! file is never overwritten.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Longest extension accepted from client filenames.
const MAX_EXTENSION_LEN: usize = 8;

/// Errors from photo storage.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty upload")]
    EmptyUpload,
}

/// A stored photo: filename relative to the uploads root.
#[derive(Debug, Clone)]
pub struct StoredPhoto {
    pub filename: String,
}

/// Durable store for uploaded photos.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    /// Open a store rooted at `root`, creating the directory if missing.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, MediaError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory the photos are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write uploaded bytes under a collision-free name, returning the
    /// stored filename.
    pub async fn store(
        &self,
        bytes: &[u8],
        original_filename: &str,
    ) -> Result<StoredPhoto, MediaError> {
        if bytes.is_empty() {
            return Err(MediaError::EmptyUpload);
        }
        let filename = derive_filename(original_filename);
        let path = self.root.join(&filename);
        tokio::fs::write(&path, bytes).await?;
        debug!(filename, size = bytes.len(), "stored photo");
        Ok(StoredPhoto { filename })
    }
}

/// Derive a unique stored filename: `foto_<uuidv4><ext>`.
///
/// Only a short, purely alphanumeric extension is carried over from the
/// client-supplied name; anything else is dropped.
fn derive_filename(original: &str) -> String {
    let ext = sanitized_extension(original);
    match ext {
        Some(ext) => format!("foto_{}.{ext}", Uuid::new_v4()),
        None => format!("foto_{}", Uuid::new_v4()),
    }
}

fn sanitized_extension(original: &str) -> Option<String> {
    let ext = Path::new(original).extension()?.to_str()?;
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_kept_and_lowercased() {
        let name = derive_filename("IMG_0042.JPG");
        assert!(name.starts_with("foto_"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn suspicious_extension_is_dropped() {
        assert!(!derive_filename("foto.j p g").contains(' '));
        assert!(!derive_filename("foto").contains('.'));
        assert!(!derive_filename("foto.reallylongext").ends_with("reallylongext"));
    }

    #[tokio::test]
    async fn same_second_uploads_get_distinct_filenames() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = MediaStore::new(dir.path().join("uploads")).expect("store");

        let a = store.store(b"jpeg bytes", "file.jpg").await.expect("store a");
        let b = store.store(b"png bytes", "file.png").await.expect("store b");
        let c = store.store(b"more bytes", "file.jpg").await.expect("store c");

        assert_ne!(a.filename, b.filename);
        assert_ne!(a.filename, c.filename);
        assert!(store.root().join(&a.filename).exists());
        assert!(store.root().join(&b.filename).exists());
        assert!(store.root().join(&c.filename).exists());
    }

    #[tokio::test]
    async fn empty_upload_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = MediaStore::new(dir.path()).expect("store");
        assert!(matches!(
            store.store(b"", "file.jpg").await,
            Err(MediaError::EmptyUpload)
        ));
    }
}
