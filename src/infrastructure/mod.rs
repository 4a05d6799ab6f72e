//! Infrastructure Layer - 基础设施层
//!
//! - HTTP: RESTful API
//! - Adapters: 生成模型 / TTS / 文件存储
//! - Worker: 过期音频清理

pub mod adapters;
pub mod http;
pub mod worker;
