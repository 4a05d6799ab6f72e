//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 故事生成失败（中止整个请求）
    #[error("Story generation failed: {0}")]
    GenerationFailed(String),

    /// 语音合成失败（未开启降级时中止请求）
    #[error("Audio synthesis failed: {0}")]
    SynthesisFailed(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<crate::application::ports::AudioStorageError> for ApplicationError {
    fn from(err: crate::application::ports::AudioStorageError) -> Self {
        Self::StorageError(err.to_string())
    }
}
