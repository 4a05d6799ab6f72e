//! Audio Storage Port - 音频输出存储抽象
//!
//! 生成的音频文件写入配置目录，文件名为每请求生成的随机标识；
//! 不做索引，只靠定期的按龄清理回收。

use async_trait::async_trait;
use chrono::Duration;
use std::path::PathBuf;
use thiserror::Error;

/// 存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Audio Storage Port
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 文件的存储路径
    fn audio_path(&self, filename: &str) -> PathBuf;

    /// 写入音频字节，覆盖同名文件
    async fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AudioStorageError>;

    /// 文件是否存在
    async fn exists(&self, filename: &str) -> bool;

    /// 删除早于给定时长的文件，返回删除数量
    async fn sweep_older_than(&self, max_age: Duration) -> Result<u64, AudioStorageError>;
}

/// 清洗下载文件名
///
/// 只保留字母 / 数字 / `.` `_` `-`，截断到 100 字符。
/// 路径分隔符一并被剔除，杜绝目录穿越。
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .take(100)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_filename("story_ab12cd34.mp3"), "story_ab12cd34.mp3");
    }

    #[test]
    fn test_sanitize_strips_path_separators() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "....etcpasswd");
        assert_eq!(sanitize_filename("a/b\\c.mp3"), "abc.mp3");
    }

    #[test]
    fn test_sanitize_truncates_long_names() {
        let long = "x".repeat(300);
        assert_eq!(sanitize_filename(&long).len(), 100);
    }
}
