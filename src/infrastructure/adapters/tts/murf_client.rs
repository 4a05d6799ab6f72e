//! Murf TTS Client - 调用外部 TTS HTTP 服务
//!
//! 实现 TtsEnginePort trait，通过 HTTP 调用 Murf 语音合成服务
//!
//! 外部 TTS API:
//! POST {base_url}/speech/generate
//! Request: {"text": "...", "voiceId": "...", "format": "MP3", "sampleRate": 24000,
//!           "style"/"rate"/"pitch" 可选}  (JSON, header: api-key)
//! Response: JSON，音频以 URL（audioFile / audio_url / url / downloadUrl 任一键）
//!           或内联字节返回，两种形态都要支持
//!
//! GET {base_url}/speech/voices
//! Response: 音色数组，或包在 voices / data 键下的对象

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError};
use crate::domain::VoiceStyle;

/// 响应里可能承载音频 URL 的键（按检查顺序）
const AUDIO_URL_KEYS: [&str; 4] = ["audioFile", "audio_url", "url", "downloadUrl"];

/// 小于该字节数的裸响应不可能是音频，按无音频处理
const MIN_INLINE_AUDIO_BYTES: usize = 1000;

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct MurfSpeechRequest<'a> {
    text: &'a str,
    #[serde(rename = "voiceId")]
    voice_id: &'a str,
    format: &'a str,
    #[serde(rename = "sampleRate")]
    sample_rate: u32,
    /// conversational 是供应商默认，不必下发
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rate: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pitch: Option<f32>,
}

/// Murf 客户端配置
#[derive(Debug, Clone)]
pub struct MurfTtsClientConfig {
    /// API Key
    pub api_key: String,
    /// TTS 服务基础 URL
    pub base_url: String,
    /// 合成请求超时时间（秒）
    pub timeout_secs: u64,
    /// 音频下载超时时间（秒）
    pub download_timeout_secs: u64,
    /// 音色目录查询超时时间（秒）
    pub voices_timeout_secs: u64,
    /// 输出采样率
    pub sample_rate: u32,
    /// 输出格式
    pub format: String,
}

impl MurfTtsClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.murf.ai/v1".to_string(),
            timeout_secs: 120,
            download_timeout_secs: 60,
            voices_timeout_secs: 10,
            sample_rate: 24000,
            format: "MP3".to_string(),
        }
    }
}

/// Murf TTS 客户端
pub struct MurfTtsClient {
    client: Client,
    config: MurfTtsClientConfig,
}

impl MurfTtsClient {
    /// 创建新的 Murf 客户端
    pub fn new(config: MurfTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!("{}/speech/generate", self.config.base_url)
    }

    fn voices_url(&self) -> String {
        format!("{}/speech/voices", self.config.base_url)
    }

    /// 从合成响应 JSON 中找音频 URL
    fn find_audio_url(body: &Value) -> Option<&str> {
        let object = body.as_object()?;
        AUDIO_URL_KEYS
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str))
            .filter(|url| !url.is_empty())
    }

    /// 下载 URL 形态的音频
    async fn download_audio(&self, url: &str) -> Result<Vec<u8>, TtsError> {
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.download_timeout_secs))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else {
                    TtsError::NetworkError(format!("Failed to download audio: {}", e))
                }
            })?;

        if !response.status().is_success() {
            return Err(TtsError::ServiceError(format!(
                "Failed to download audio: HTTP {}",
                response.status()
            )));
        }

        Ok(response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec())
    }

    /// 解析音色目录响应
    ///
    /// 兼容三种形态：裸数组、{"voices": [...]}、{"data": [...]}；
    /// 每项取 voiceId / id / name 中首个存在的字符串，或元素本身是字符串
    fn parse_voice_catalog(body: &Value) -> Vec<String> {
        let items = match body {
            Value::Array(items) => items.as_slice(),
            Value::Object(object) => object
                .get("voices")
                .or_else(|| object.get("data"))
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            _ => &[],
        };

        items
            .iter()
            .filter_map(|item| match item {
                Value::String(id) => Some(id.clone()),
                Value::Object(voice) => ["voiceId", "id", "name"]
                    .iter()
                    .find_map(|key| voice.get(*key).and_then(Value::as_str))
                    .map(str::to_string),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl TtsEnginePort for MurfTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        let style = match request.style {
            VoiceStyle::Conversational => None,
            other => Some(other.as_str()),
        };
        let rate = Some(request.rate).filter(|r| *r != 1.0);
        let pitch = Some(request.pitch).filter(|p| *p != 1.0);

        let http_request = MurfSpeechRequest {
            text: &request.text,
            voice_id: &request.voice_id,
            format: &self.config.format,
            sample_rate: self.config.sample_rate,
            style,
            rate,
            pitch,
        };

        tracing::debug!(
            voice_id = %request.voice_id,
            style = ?style,
            text_len = request.text.len(),
            "Sending TTS synthesis request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .header("api-key", &self.config.api_key)
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        // 优先走 JSON + URL 形态
        if let Ok(json) = serde_json::from_slice::<Value>(&body) {
            if let Some(url) = Self::find_audio_url(&json) {
                let audio_data = self.download_audio(url).await?;
                tracing::info!(audio_size = audio_data.len(), "TTS synthesis completed (url)");
                return Ok(SynthesisResponse { audio_data });
            }
        }

        // 其次接受内联字节
        if body.len() > MIN_INLINE_AUDIO_BYTES {
            tracing::info!(audio_size = body.len(), "TTS synthesis completed (inline)");
            return Ok(SynthesisResponse {
                audio_data: body.to_vec(),
            });
        }

        Err(TtsError::NoAudio)
    }

    async fn list_voices(&self) -> Result<Vec<String>, TtsError> {
        let response = self
            .client
            .get(self.voices_url())
            .header("api-key", &self.config.api_key)
            .timeout(Duration::from_secs(self.config.voices_timeout_secs))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TtsError::InvalidResponse(e.to_string()))?;

        let voices = Self::parse_voice_catalog(&body);
        tracing::info!(count = voices.len(), "Retrieved voice catalog");

        Ok(voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_defaults() {
        let request = MurfSpeechRequest {
            text: "Hello there.",
            voice_id: "en-US-cooper",
            format: "MP3",
            sample_rate: 24000,
            style: None,
            rate: None,
            pitch: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["voiceId"], "en-US-cooper");
        assert_eq!(body["sampleRate"], 24000);
        assert!(body.get("style").is_none());
        assert!(body.get("rate").is_none());
        assert!(body.get("pitch").is_none());
    }

    #[test]
    fn test_request_carries_non_default_delivery() {
        let request = MurfSpeechRequest {
            text: "Hello there.",
            voice_id: "en-US-cooper",
            format: "MP3",
            sample_rate: 24000,
            style: Some("terrified"),
            rate: Some(0.9),
            pitch: Some(1.2),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["style"], "terrified");
        assert!(body.get("rate").is_some());
        assert!(body.get("pitch").is_some());
    }

    #[test]
    fn test_find_audio_url_checks_all_keys() {
        for key in AUDIO_URL_KEYS {
            let body = json!({ key: "https://cdn.example/audio.mp3" });
            assert_eq!(
                MurfTtsClient::find_audio_url(&body),
                Some("https://cdn.example/audio.mp3")
            );
        }
        assert!(MurfTtsClient::find_audio_url(&json!({"other": "x"})).is_none());
        assert!(MurfTtsClient::find_audio_url(&json!({"url": ""})).is_none());
        assert!(MurfTtsClient::find_audio_url(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_parse_voice_catalog_bare_array() {
        let body = json!([
            {"voiceId": "en-US-cooper"},
            {"id": "en-US-hazel"},
            {"name": "en-US-ruby"},
            "en-US-davis"
        ]);
        assert_eq!(
            MurfTtsClient::parse_voice_catalog(&body),
            vec!["en-US-cooper", "en-US-hazel", "en-US-ruby", "en-US-davis"]
        );
    }

    #[test]
    fn test_parse_voice_catalog_wrapped_object() {
        let body = json!({"voices": [{"voiceId": "en-US-cooper"}]});
        assert_eq!(
            MurfTtsClient::parse_voice_catalog(&body),
            vec!["en-US-cooper"]
        );

        let body = json!({"data": [{"voiceId": "en-US-hazel"}]});
        assert_eq!(
            MurfTtsClient::parse_voice_catalog(&body),
            vec!["en-US-hazel"]
        );
    }

    #[test]
    fn test_parse_voice_catalog_unexpected_shape() {
        assert!(MurfTtsClient::parse_voice_catalog(&json!("nope")).is_empty());
        assert!(MurfTtsClient::parse_voice_catalog(&json!({"total": 3})).is_empty());
    }
}
