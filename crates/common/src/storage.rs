//! Local media storage for uploaded images.
//!
//! Images are written under `<media_dir>/user_post_images/<api_key>/` with a
//! random filename; the database stores the path relative to `<media_dir>`.

use std::path::PathBuf;

use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::{AppError, AppResult};

/// Length of the random part of a generated filename.
const FILENAME_LEN: usize = 15;

/// Directory under the storage base where all user images live.
const IMAGES_SUBDIR: &str = "user_post_images";

/// Local filesystem storage for media files.
#[derive(Debug, Clone)]
pub struct MediaStorage {
    base_path: PathBuf,
}

impl MediaStorage {
    /// Create a new media storage rooted at `base_path`.
    #[must_use]
    pub const fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Write `data` to a freshly named file in the uploader's directory.
    ///
    /// Returns the path relative to the storage base
    /// (`user_post_images/<api_key>/<random15>.jpg`), which is what the
    /// media row records.
    pub async fn save(&self, api_key: &str, data: &[u8]) -> AppResult<String> {
        let file_name = random_filename();
        let relative_path = format!("{IMAGES_SUBDIR}/{api_key}/{file_name}");
        let full_path = self.base_path.join(&relative_path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Storage(format!("Failed to create directory: {e}")))?;
        }

        tokio::fs::write(&full_path, data)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write file: {e}")))?;

        tracing::debug!(path = %relative_path, size = data.len(), "Stored media file");

        Ok(relative_path)
    }

    /// Delete stored files by their relative paths.
    ///
    /// A file that is already gone is tolerated; any other I/O error
    /// propagates.
    pub async fn remove(&self, relative_paths: &[String]) -> AppResult<()> {
        for relative_path in relative_paths {
            let full_path = self.base_path.join(relative_path);

            match tokio::fs::remove_file(&full_path).await {
                Ok(()) => {
                    tracing::debug!(path = %relative_path, "Removed media file");
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(AppError::Storage(format!(
                        "Failed to remove {relative_path}: {e}"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Generate a random 15-character alphanumeric filename with a `.jpg`
/// extension. Uniqueness is probabilistic; there is no collision check.
#[must_use]
pub fn random_filename() -> String {
    let name: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(FILENAME_LEN)
        .map(char::from)
        .collect();

    format!("{name}.jpg")
}
