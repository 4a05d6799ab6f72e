//! Health Handler
//!
//! 报告服务状态与必需密钥的配置情况，供监控探活

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{EnvironmentStatus, HealthResponse};
use crate::infrastructure::http::state::AppState;

/// Health endpoint - 健康检查
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "fabula",
        environment: EnvironmentStatus {
            llm_api_key: state.llm_configured,
            tts_api_key: state.tts_configured,
        },
    })
}
