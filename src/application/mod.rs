//! Application Layer - 应用层
//!
//! - Ports: 出站端口（StoryModel, TtsEngine, AudioStorage）
//! - Commands: 生成管线的命令与编排处理器

pub mod commands;
pub mod error;
pub mod ports;

pub use commands::handlers::{GenerateStoryHandler, StoryGenerated};
pub use commands::GenerateStory;
pub use error::ApplicationError;
pub use ports::{
    sanitize_filename, AudioStorageError, AudioStoragePort, StoryModelError, StoryModelPort,
    SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError,
};
