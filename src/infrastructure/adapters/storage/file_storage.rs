//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioStorageError, AudioStoragePort};

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn audio_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    async fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AudioStorageError> {
        let path = self.audio_path(filename);

        // fs::write 整体覆盖同名文件
        fs::write(&path, data)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            filename = %filename,
            size = data.len(),
            "Saved audio file"
        );

        Ok(path)
    }

    async fn exists(&self, filename: &str) -> bool {
        self.audio_path(filename).exists()
    }

    async fn sweep_older_than(&self, max_age: Duration) -> Result<u64, AudioStorageError> {
        let now = Utc::now();
        let mut removed = 0u64;

        let mut entries = fs::read_dir(&self.base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let metadata = match entry.metadata().await {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                    continue;
                }
            };

            // 创建时间并非所有文件系统都有，以修改时间计龄
            let modified = match metadata.modified() {
                Ok(modified) => DateTime::<Utc>::from(modified),
                Err(_) => continue,
            };

            if now - modified > max_age {
                match fs::remove_file(&path).await {
                    Ok(()) => {
                        removed += 1;
                        tracing::info!(path = %path.display(), "Cleaned up old audio file");
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to remove old audio file");
                    }
                }
            }
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn storage() -> (FileAudioStorage, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = FileAudioStorage::new(dir.path()).await.unwrap();
        (storage, dir)
    }

    #[tokio::test]
    async fn test_save_and_exists() {
        let (storage, _dir) = storage().await;
        assert!(!storage.exists("story_aa11bb22.mp3").await);

        let path = storage
            .save("story_aa11bb22.mp3", b"fake audio bytes")
            .await
            .unwrap();
        assert!(path.ends_with("story_aa11bb22.mp3"));
        assert!(storage.exists("story_aa11bb22.mp3").await);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_file() {
        let (storage, _dir) = storage().await;
        storage.save("story_x.mp3", b"first").await.unwrap();
        let path = storage.save("story_x.mp3", b"second, longer body").await.unwrap();
        let content = tokio::fs::read(&path).await.unwrap();
        assert_eq!(content, b"second, longer body");
    }

    #[tokio::test]
    async fn test_sweep_keeps_fresh_files() {
        let (storage, _dir) = storage().await;
        storage.save("story_fresh.mp3", b"audio").await.unwrap();

        let removed = storage.sweep_older_than(Duration::hours(24)).await.unwrap();
        assert_eq!(removed, 0);
        assert!(storage.exists("story_fresh.mp3").await);
    }

    #[tokio::test]
    async fn test_sweep_removes_old_files() {
        let (storage, _dir) = storage().await;
        storage.save("story_old.mp3", b"audio").await.unwrap();

        // 负阈值下任何文件都过期
        let removed = storage.sweep_older_than(Duration::seconds(-1)).await.unwrap();
        assert_eq!(removed, 1);
        assert!(!storage.exists("story_old.mp3").await);
    }

    #[tokio::test]
    async fn test_creates_missing_base_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        let storage = FileAudioStorage::new(&nested).await.unwrap();
        assert_eq!(storage.base_dir(), nested.as_path());
        assert!(nested.exists());
    }
}
