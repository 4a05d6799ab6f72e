//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_storage;
mod story_model;
mod tts_engine;

pub use audio_storage::{sanitize_filename, AudioStorageError, AudioStoragePort};
pub use story_model::{StoryModelError, StoryModelPort};
pub use tts_engine::{SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError};
