//! Fabula - 情感化有声故事生成后端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 请求校验与提示词构造
//! - 情感模型、分句、文本清洗、朗读参数、音色选择
//!
//! 应用层 (application/):
//! - Ports: 端口定义（StoryModel, TtsEngine, AudioStorage）
//! - Commands: GenerateStory 管线编排
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: Gemini / Murf / 文件存储（各带测试用 Fake 实现）
//! - Worker: 过期音频清理

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
