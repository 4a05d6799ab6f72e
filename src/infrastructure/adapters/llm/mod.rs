//! LLM Adapters - 生成模型客户端

mod fake_story_model;
mod gemini_client;

pub use fake_story_model::{FakeStoryModel, SAMPLE_STORY};
pub use gemini_client::{GeminiClient, GeminiClientConfig};
