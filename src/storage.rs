use async_trait::async_trait;
use sanitize_filename::sanitize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Used when sanitizing leaves nothing of the original name.
const FALLBACK_FILENAME: &str = "resume";

/// How stored upload names are prefixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStrategy {
    /// `<millisecond-timestamp>-<name>`. Same name within one millisecond collides.
    Timestamp,
    /// `<uuid>-<name>`.
    Random,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to create upload directory {0}: {1}")]
    CreateDir(PathBuf, #[source] std::io::Error),
    #[error("failed to write upload {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),
}

#[async_trait]
pub trait UploadStorage: Send + Sync {
    /// Store the bytes and return the generated filename.
    async fn store(&self, original_filename: &str, data: &[u8]) -> Result<String, StorageError>;
}

/// Strip path separators, control and reserved characters from a client filename.
pub fn sanitize_original_name(original_filename: &str) -> String {
    let sanitized = sanitize(original_filename);
    let trimmed = sanitized.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Stored name for an upload received at `timestamp_ms`.
pub fn timestamped_filename(timestamp_ms: i64, original_filename: &str) -> String {
    format!("{}-{}", timestamp_ms, sanitize_original_name(original_filename))
}

/// Uploads written to a local directory, created on first use.
pub struct LocalDiskStorage {
    dir: PathBuf,
    naming: NamingStrategy,
}

impl LocalDiskStorage {
    pub fn new(dir: impl Into<PathBuf>, naming: NamingStrategy) -> Self {
        Self {
            dir: dir.into(),
            naming,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    fn generate_filename(&self, original_filename: &str) -> String {
        match self.naming {
            NamingStrategy::Timestamp => {
                timestamped_filename(chrono::Utc::now().timestamp_millis(), original_filename)
            }
            NamingStrategy::Random => format!(
                "{}-{}",
                Uuid::new_v4(),
                sanitize_original_name(original_filename)
            ),
        }
    }
}

#[async_trait]
impl UploadStorage for LocalDiskStorage {
    async fn store(&self, original_filename: &str, data: &[u8]) -> Result<String, StorageError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::CreateDir(self.dir.clone(), e))?;

        let filename = self.generate_filename(original_filename);
        let path = self.path_of(&filename);

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| StorageError::Write(path.clone(), e))?;

        log::debug!("Stored upload {} ({} bytes)", path.display(), data.len());
        Ok(filename)
    }
}
