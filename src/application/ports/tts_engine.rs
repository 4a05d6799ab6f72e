//! TTS Engine Port - 语音合成引擎抽象
//!
//! 定义外部 TTS 服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::VoiceStyle;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No audio data in response")]
    NoAudio,
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 已清洗的合成文本
    pub text: String,
    /// 供应商音色 ID
    pub voice_id: String,
    /// 朗读风格
    pub style: VoiceStyle,
    /// 语速（1.0 为基准）
    pub rate: f32,
    /// 音高（1.0 为基准）
    pub pitch: f32,
}

/// 合成响应
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// 音频字节（供应商返回内联数据或 URL，适配器负责取回字节）
    pub audio_data: Vec<u8>,
}

/// TTS Engine Port
///
/// 外部 TTS 服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行一次语音合成
    ///
    /// 每请求只尝试一次，失败直接上抛
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError>;

    /// 查询供应商音色目录（音色 ID 列表）
    async fn list_voices(&self) -> Result<Vec<String>, TtsError>;
}
