//! Gemini Client - 调用外部生成模型 HTTP 服务
//!
//! 实现 StoryModelPort trait，通过 HTTP 调用 Gemini generateContent 接口
//!
//! 外部 API:
//! POST {base_url}/models/{model}:generateContent?key={api_key}
//! Request: {"contents": [{"parts": [{"text": "..."}]}]}  (JSON)
//! Response: {"candidates": [{"content": {"parts": [{"text": "..."}]}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{StoryModelError, StoryModelPort};

/// 生成请求体 (JSON)
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// 生成响应体（只取需要的字段）
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Gemini 客户端配置
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    /// API Key
    pub api_key: String,
    /// 服务基础 URL
    pub base_url: String,
    /// 模型标识
    pub model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl GeminiClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout_secs: 60,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Gemini 客户端
pub struct GeminiClient {
    client: Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    pub fn new(config: GeminiClientConfig) -> Result<Self, StoryModelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoryModelError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 生成接口 URL（key 在 query 上，日志里绝不能打印完整 URL）
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        )
    }

    /// 从响应中提取首个候选文本
    fn extract_text(response: GenerateContentResponse) -> Option<String> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
    }
}

#[async_trait]
impl StoryModelPort for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, StoryModelError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending story generation request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StoryModelError::Timeout
                } else if e.is_connect() {
                    StoryModelError::NetworkError(format!(
                        "Cannot connect to language model service: {}",
                        e
                    ))
                } else {
                    StoryModelError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StoryModelError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| StoryModelError::InvalidResponse(e.to_string()))?;

        let text = Self::extract_text(body)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(StoryModelError::EmptyResponse)?;

        tracing::info!(story_chars = text.chars().count(), "Story generation completed");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = GeminiClientConfig::new("secret")
            .with_model("gemini-2.0-flash")
            .with_timeout(30);
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_generate_url_embeds_model_and_key() {
        let client = GeminiClient::new(GeminiClientConfig::new("secret")).unwrap();
        let url = client.generate_url();
        assert!(url.contains("/models/gemini-1.5-flash:generateContent"));
        assert!(url.ends_with("key=secret"));
    }

    #[test]
    fn test_extract_text_from_candidates() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Once upon a time."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            GeminiClient::extract_text(response).as_deref(),
            Some("Once upon a time.")
        );
    }

    #[test]
    fn test_extract_text_handles_missing_candidates() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(GeminiClient::extract_text(response).is_none());

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(GeminiClient::extract_text(response).is_none());
    }
}
