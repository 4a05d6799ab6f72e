//! Fake Story Model - 用于测试的生成模型
//!
//! 始终返回固定的故事文本，不实际调用外部服务

use async_trait::async_trait;

use crate::application::ports::{StoryModelError, StoryModelPort};

/// 默认测试故事（覆盖括号标注、结巴、缩写、省略号等清洗路径）
pub const SAMPLE_STORY: &str = "The old lighthouse stood alone on the cliff. \
(mysterious) Dr. Hale climbed the spiral stairs in darkness... \
A voice called out from below! W-who could be there at this hour? \
The keeper smiled and lit the great lamp at last.";

/// Fake Story Model
///
/// 用于测试，返回构造时注入的文本；也可配置为固定失败
pub struct FakeStoryModel {
    story: Result<String, String>,
}

impl FakeStoryModel {
    /// 返回给定文本
    pub fn returning(story: impl Into<String>) -> Self {
        Self {
            story: Ok(story.into()),
        }
    }

    /// 返回内置样例故事
    pub fn with_sample_story() -> Self {
        Self::returning(SAMPLE_STORY)
    }

    /// 始终失败
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            story: Err(reason.into()),
        }
    }
}

#[async_trait]
impl StoryModelPort for FakeStoryModel {
    async fn generate(&self, prompt: &str) -> Result<String, StoryModelError> {
        tracing::debug!(prompt_len = prompt.len(), "FakeStoryModel: returning fixed story");

        match &self.story {
            Ok(text) => Ok(text.clone()),
            Err(reason) => Err(StoryModelError::ServiceError(reason.clone())),
        }
    }
}
