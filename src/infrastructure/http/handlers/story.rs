//! Story HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GenerateStory;
use crate::domain::StoryRequest;
use crate::infrastructure::http::dto::{GenerateStoryRequest, GenerateStoryResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::{AppState, ServiceState};

/// 生成情感化有声故事
///
/// 校验在任何外部调用之前完成；服务 Disabled 时直接 500
pub async fn generate_story(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateStoryRequest>,
) -> Result<Json<GenerateStoryResponse>, ApiError> {
    let handler = match &state.services {
        ServiceState::Ready(handler) => handler,
        ServiceState::Disabled { reason } => {
            return Err(ApiError::Internal(format!(
                "AI services not properly initialized: {}",
                reason
            )));
        }
    };

    let request = StoryRequest::new(body.keywords, &body.theme, body.duration, &body.moods)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    tracing::info!(
        keywords = ?request.keywords(),
        theme = %request.theme(),
        duration_min = request.duration().minutes(),
        moods = ?request.moods(),
        "Generating story"
    );

    let result = handler.handle(GenerateStory { request }).await?;

    let audio_url = result
        .audio_filename
        .as_ref()
        .map(|filename| format!("/api/download-audio/{}", filename));

    let message = if audio_url.is_some() {
        "Story and audio generated successfully!".to_string()
    } else {
        "Story generated successfully! Audio generation failed.".to_string()
    };

    Ok(Json(GenerateStoryResponse {
        success: true,
        story: result.story,
        audio_url,
        duration_estimate: format!("{} minutes", result.duration_minutes),
        emotions_used: result.emotions_used,
        segments_count: result.segments_count,
        word_count: result.word_count,
        message,
    }))
}
