//! Story Model Port - 生成模型抽象
//!
//! 定义外部生成式语言模型的抽象接口，具体实现在 infrastructure/adapters 层。
//! 失败通过显式错误类型返回，不在文本里夹带错误哨兵。

use async_trait::async_trait;
use thiserror::Error;

/// 生成模型错误
#[derive(Debug, Error)]
pub enum StoryModelError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Model returned no story content")]
    EmptyResponse,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Story Model Port
///
/// 外部生成式语言模型的抽象接口
#[async_trait]
pub trait StoryModelPort: Send + Sync {
    /// 提交提示词，返回裁剪后的故事文本
    ///
    /// 每请求只尝试一次，无重试
    async fn generate(&self, prompt: &str) -> Result<String, StoryModelError>;
}
