//! On-disk store for generated audio.
//!
//! Files are named `<uuid>.mp3` and written through a temporary name, so a
//! reader never sees a partially written file. Deletion by [`AudioStore::cleanup`]
//! is not coordinated with reads: a file opened before it is removed stays
//! readable to that reader, a file removed first is simply not found.

use std::path::{Component, Path, PathBuf};
use std::time::{Duration, SystemTime};

use tokio::fs;
use uuid::Uuid;

use crate::error::AppError;

pub const AUDIO_EXTENSION: &str = "mp3";
pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// Age after which [`AudioStore::cleanup`] removes a file.
pub const MAX_AUDIO_AGE: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the storage directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    pub fn new_filename() -> String {
        format!("{}.{}", Uuid::new_v4(), AUDIO_EXTENSION)
    }

    /// Write `audio` under a fresh unique name and return that name.
    pub async fn save(&self, audio: &[u8]) -> Result<String, AppError> {
        let filename = Self::new_filename();
        let path = self.dir.join(&filename);
        let tmp = self.dir.join(format!(".{}.part", filename));

        fs::write(&tmp, audio).await?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        Ok(filename)
    }

    /// Path for `filename` if it names a plain file directly inside the store.
    ///
    /// Anything with separators, `.`/`..` or a leading dot is refused.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        if filename.is_empty()
            || filename.starts_with('.')
            || filename.contains(|c: char| matches!(c, '/' | '\\' | '\0'))
        {
            return None;
        }

        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.dir.join(filename)),
            _ => None,
        }
    }

    /// Open a stored file for reading.
    pub async fn open(&self, filename: &str) -> Result<fs::File, AppError> {
        let not_found = || AppError::AudioNotFound(filename.to_string());

        let path = self.resolve(filename).ok_or_else(not_found)?;
        let metadata = fs::metadata(&path).await.map_err(|_| not_found())?;
        if !metadata.is_file() {
            return Err(not_found());
        }

        fs::File::open(&path).await.map_err(|_| not_found())
    }

    /// Delete regular files older than `max_age`; returns how many went.
    ///
    /// Entries that disappear mid-scan are skipped, so a concurrent
    /// [`AudioStore::save`] never makes the sweep fail.
    pub async fn cleanup(&self, max_age: Duration) -> Result<usize, AppError> {
        self.cleanup_at(SystemTime::now(), max_age).await
    }

    async fn cleanup_at(&self, now: SystemTime, max_age: Duration) -> Result<usize, AppError> {
        let mut removed = 0;
        let mut entries = fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            // In-flight saves use dot-prefixed temporary names
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            let metadata = match entry.metadata().await {
                Ok(metadata) => metadata,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            if !metadata.is_file() {
                continue;
            }

            // Files with an mtime in the future have age zero
            let age = now
                .duration_since(metadata.modified()?)
                .unwrap_or(Duration::ZERO);

            if age > max_age {
                match fs::remove_file(entry.path()).await {
                    Ok(()) => removed += 1,
                    // Someone else got there first
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }

        Ok(removed)
    }
}
