//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 生成模型配置
    #[serde(default)]
    pub llm: LlmConfig,

    /// TTS 服务配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 分句配置
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// GC 配置
    #[serde(default)]
    pub gc: GcConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 公开访问的 Base URL
    /// 如果未设置，则使用 http://{host}:{port}
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            let host = if self.host == "0.0.0.0" {
                "localhost"
            } else {
                &self.host
            };
            format!("http://{}:{}", host, self.port)
        })
    }
}

/// 生成模型配置
///
/// api_key 缺失时服务降级为 Disabled，不影响进程启动
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// API Key（必需密钥，仅从环境注入）
    #[serde(default)]
    pub api_key: Option<String>,

    /// 服务基础 URL
    #[serde(default = "default_llm_url")]
    pub base_url: String,

    /// 模型标识
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

fn default_llm_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_llm_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_llm_timeout() -> u64 {
    60
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_llm_url(),
            model: default_llm_model(),
            timeout_secs: default_llm_timeout(),
        }
    }
}

/// TTS 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// API Key（必需密钥，仅从环境注入）
    #[serde(default)]
    pub api_key: Option<String>,

    /// TTS 服务基础 URL
    #[serde(default = "default_tts_url")]
    pub base_url: String,

    /// 合成请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    /// 音频下载超时时间（秒，响应给出 URL 时的二次请求）
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,

    /// 音色目录查询超时时间（秒）
    #[serde(default = "default_voices_timeout")]
    pub voices_timeout_secs: u64,

    /// 输出采样率（Hz）
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// 输出格式
    #[serde(default = "default_format")]
    pub format: String,

    /// 合成失败时是否降级为"有故事、无音频"
    #[serde(default = "default_degrade")]
    pub degrade_on_failure: bool,
}

fn default_tts_url() -> String {
    "https://api.murf.ai/v1".to_string()
}

fn default_tts_timeout() -> u64 {
    120
}

fn default_download_timeout() -> u64 {
    60
}

fn default_voices_timeout() -> u64 {
    10
}

fn default_sample_rate() -> u32 {
    24000
}

fn default_format() -> String {
    "MP3".to_string()
}

fn default_degrade() -> bool {
    true
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_tts_url(),
            timeout_secs: default_tts_timeout(),
            download_timeout_secs: default_download_timeout(),
            voices_timeout_secs: default_voices_timeout(),
            sample_rate: default_sample_rate(),
            format: default_format(),
            degrade_on_failure: default_degrade(),
        }
    }
}

/// 分句配置
#[derive(Debug, Clone, Deserialize)]
pub struct SegmenterConfig {
    /// 是否启用词典分类器（关闭则按偏好情绪轮换指派）
    #[serde(default = "default_use_lexicon")]
    pub use_lexicon: bool,
}

fn default_use_lexicon() -> bool {
    true
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            use_lexicon: default_use_lexicon(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 音频输出目录
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,

    /// 请求体最大大小（字节）
    #[serde(default = "default_max_request_size")]
    pub max_request_size: u64,
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("data/audio")
}

fn default_max_request_size() -> u64 {
    16 * 1024 * 1024 // 16 MB
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
            max_request_size: default_max_request_size(),
        }
    }
}

/// GC（过期音频清理）配置
#[derive(Debug, Clone, Deserialize)]
pub struct GcConfig {
    /// 是否启用自动清理
    #[serde(default = "default_gc_enabled")]
    pub enabled: bool,

    /// 清理间隔时间（秒）
    #[serde(default = "default_gc_interval")]
    pub interval_secs: u64,

    /// 音频文件保留时长（小时）
    #[serde(default = "default_max_age_hours")]
    pub max_age_hours: u64,
}

fn default_gc_enabled() -> bool {
    true
}

fn default_gc_interval() -> u64 {
    3600 // 1 小时
}

fn default_max_age_hours() -> u64 {
    24
}

impl Default for GcConfig {
    fn default() -> Self {
        Self {
            enabled: default_gc_enabled(),
            interval_secs: default_gc_interval(),
            max_age_hours: default_max_age_hours(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
