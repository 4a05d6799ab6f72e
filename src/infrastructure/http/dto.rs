//! Data Transfer Objects

use serde::{Deserialize, Serialize};

// ============================================================================
// Story DTOs
// ============================================================================

/// 生成请求体
///
/// 缺省值与边界校验对齐：theme=adventure, duration=3, moods=["neutral"]
#[derive(Debug, Deserialize)]
pub struct GenerateStoryRequest {
    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_duration")]
    pub duration: u32,

    #[serde(default = "default_moods")]
    pub moods: Vec<String>,
}

fn default_theme() -> String {
    "adventure".to_string()
}

fn default_duration() -> u32 {
    3
}

fn default_moods() -> Vec<String> {
    vec!["neutral".to_string()]
}

/// 生成响应体
#[derive(Debug, Serialize)]
pub struct GenerateStoryResponse {
    pub success: bool,
    pub story: String,
    /// 下载地址；音频降级失败时为 null
    pub audio_url: Option<String>,
    pub duration_estimate: String,
    pub emotions_used: Vec<String>,
    pub segments_count: usize,
    pub word_count: usize,
    pub message: String,
}

// ============================================================================
// Health DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub environment: EnvironmentStatus,
}

/// 必需密钥的配置状态
#[derive(Debug, Serialize)]
pub struct EnvironmentStatus {
    pub llm_api_key: bool,
    pub tts_api_key: bool,
}
