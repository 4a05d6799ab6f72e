//! Configuration - 配置模块
//!
//! 多源配置：默认值 < 配置文件 < 环境变量

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{
    AppConfig, GcConfig, LlmConfig, LogConfig, SegmenterConfig, ServerConfig, StorageConfig,
    TtsConfig,
};
