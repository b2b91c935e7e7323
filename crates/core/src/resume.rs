//! Résumé (CV) file storage.
//!
//! The portfolio serves a single PDF under a fixed public filename.
//! Replacement writes the new bytes to a temporary sibling path and
//! renames it over the target; the rename is atomic on POSIX
//! filesystems, so readers observe either the old file or the new one,
//! never a partial write.

use std::path::PathBuf;

use crate::error::CoreError;

/// Fixed public filename of the résumé.
pub const CV_FILENAME: &str = "cv.pdf";

/// Suffix of the in-progress temporary file.
const TMP_SUFFIX: &str = ".tmp";

/// Replaces the résumé file under a fixed directory.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    dir: PathBuf,
}

impl ResumeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the storage directory if it does not exist. Idempotent;
    /// called once at startup.
    pub async fn ensure_dir(&self) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Path of the current résumé file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(CV_FILENAME)
    }

    /// Replace the résumé with `bytes`, returning the target path.
    ///
    /// A failed write leaves the previous file untouched; only a
    /// completed temporary file is renamed into place.
    pub async fn replace(&self, bytes: &[u8]) -> Result<PathBuf, CoreError> {
        let target = self.path();
        let tmp = self.dir.join(format!("{CV_FILENAME}{TMP_SUFFIX}"));
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &target).await?;
        Ok(target)
    }
}
