//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/generate-story            POST  生成故事与音频
//! - /api/download-audio/:filename  GET   下载生成的音频
//! - /health                        GET   健康检查（报告密钥配置状态）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-story", post(handlers::generate_story))
        .route("/download-audio/:filename", get(handlers::download_audio))
}
