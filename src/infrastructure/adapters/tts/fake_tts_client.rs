//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 始终返回固定的音频字节，不实际调用 TTS 服务

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError};

/// Fake TTS Client
///
/// 用于测试：返回构造时注入的音频字节与音色目录，
/// 并记录最后一次合成请求供断言
pub struct FakeTtsClient {
    audio_data: Vec<u8>,
    voices: Vec<String>,
    fail_synthesis: bool,
    /// 最后一次收到的合成请求
    pub last_request: Mutex<Option<SynthesisRequest>>,
}

impl FakeTtsClient {
    /// 返回给定音频与目录
    pub fn new(audio_data: Vec<u8>, voices: Vec<String>) -> Self {
        Self {
            audio_data,
            voices,
            fail_synthesis: false,
            last_request: Mutex::new(None),
        }
    }

    /// 固定 2KB 伪音频、空目录
    pub fn with_defaults() -> Self {
        Self::new(vec![0x4d; 2048], Vec::new())
    }

    /// 合成始终失败
    pub fn failing() -> Self {
        Self {
            audio_data: Vec::new(),
            voices: Vec::new(),
            fail_synthesis: true,
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        tracing::debug!(
            voice_id = %request.voice_id,
            text_len = request.text.len(),
            "FakeTtsClient: returning fixed audio"
        );

        *self.last_request.lock().unwrap() = Some(request);

        if self.fail_synthesis {
            return Err(TtsError::ServiceError("synthetic failure".to_string()));
        }

        Ok(SynthesisResponse {
            audio_data: self.audio_data.clone(),
        })
    }

    async fn list_voices(&self) -> Result<Vec<String>, TtsError> {
        Ok(self.voices.clone())
    }
}
