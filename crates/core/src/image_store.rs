//! On-disk image store keyed by person name.
//!
//! Owns a single directory of files named `<sanitized-name>.jpg`. Uploads
//! may arrive as `jpg`, `jpeg`, or `png`, but the stored filename is always
//! normalized to `.jpg`. Each person owns at most one file; renaming or
//! deleting a person row is paired with the matching file operation by the
//! resource manager.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

/// Upload extensions accepted by [`ImageStore::save`].
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// An image uploaded through a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Client-supplied filename, used only for extension validation.
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageStoreError {
    #[error("unsupported image type '{0}' (allowed: jpg, jpeg, png)")]
    InvalidFileKind(String),

    #[error("image file not found: {0}")]
    NotFound(PathBuf),

    #[error("image store I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether `filename` carries one of the allowed image extensions.
pub fn is_allowed_extension(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Strip anything that could escape the store directory from a person name.
///
/// Whitespace becomes `_`; every character outside `[A-Za-z0-9._-]` is
/// dropped, which removes path separators on all platforms.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect()
}

/// Manages the image directory. Cheap to clone behind an `Arc` in app state.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The store path for a person name: `<dir>/<sanitized-name>.jpg`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.jpg", sanitize_name(name)))
    }

    /// Write an uploaded image under `name`, normalized to `.jpg`.
    ///
    /// Fails with `InvalidFileKind` when the upload's extension is not
    /// allowed. Creates the store directory on demand. Writing over an
    /// existing file for the same name replaces it in place.
    pub async fn save(
        &self,
        name: &str,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, ImageStoreError> {
        if !is_allowed_extension(original_filename) {
            return Err(ImageStoreError::InvalidFileKind(
                original_filename.to_string(),
            ));
        }
        fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(name);
        fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Move the file at `old` to the filename for `new_name`.
    ///
    /// Fails with `NotFound` when `old` does not exist.
    pub async fn rename(&self, old: &Path, new_name: &str) -> Result<PathBuf, ImageStoreError> {
        let new_path = self.path_for(new_name);
        match fs::rename(old, &new_path).await {
            Ok(()) => Ok(new_path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ImageStoreError::NotFound(old.to_path_buf()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete the file at `path`. A missing file counts as success.
    pub async fn remove(&self, path: &Path) -> Result<(), ImageStoreError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
