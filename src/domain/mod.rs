//! Domain Layer - 领域层
//!
//! 故事生成管线的纯逻辑，不依赖任何外部服务:
//! - Story Context: 请求校验与提示词构造
//! - 情感模型与分句
//! - TTS 文本清洗与朗读参数
//! - 音色选择

pub mod delivery;
pub mod emotion;
pub mod normalizer;
pub mod segmenter;
pub mod story;
pub mod voice;

pub use delivery::{plan_merged, plan_segment, MergedDelivery, SegmentDelivery};
pub use emotion::{Emotion, EmotionFamily, VoiceStyle};
pub use normalizer::normalize;
pub use segmenter::{EmotionLexicon, EmotionSegmenter, StorySegment};
pub use story::{build_story_prompt, DurationMinutes, Mood, RequestError, StoryRequest, Theme};
pub use voice::{select_voice, FALLBACK_VOICES};
