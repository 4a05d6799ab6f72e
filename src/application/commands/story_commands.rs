//! Story Commands

use crate::domain::StoryRequest;

/// 生成一则情感化有声故事
///
/// 请求在 HTTP 边界完成校验后进入应用层
#[derive(Debug, Clone)]
pub struct GenerateStory {
    pub request: StoryRequest,
}
