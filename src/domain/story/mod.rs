//! Story Context - 故事请求限界上下文
//!
//! 职责:
//! - 请求参数的边界校验（关键词 / 主题 / 时长 / 情绪）
//! - 提示词构造

mod errors;
mod prompt;
mod request;
mod value_objects;

pub use errors::RequestError;
pub use prompt::build_story_prompt;
pub use request::{StoryRequest, MAX_KEYWORDS};
pub use value_objects::{DurationMinutes, Mood, Theme};
