//! Application State
//!
//! 服务实例在启动时从配置构建一次。密钥缺失不是启动失败：
//! 生成服务显式降级为 Disabled，请求分发前只检查这一处，
//! 下载与健康检查不受影响。

use std::sync::Arc;

use crate::application::{AudioStoragePort, GenerateStoryHandler};

/// 生成服务状态
///
/// Ready / Disabled 二选一，取代散落在各 handler 里的空值检查
pub enum ServiceState {
    /// 服务可用
    Ready(GenerateStoryHandler),
    /// 服务不可用（密钥缺失等），携带原因
    Disabled { reason: String },
}

impl ServiceState {
    pub fn disabled(reason: impl Into<String>) -> Self {
        Self::Disabled {
            reason: reason.into(),
        }
    }
}

/// 应用状态
pub struct AppState {
    /// 生成管线（Ready / Disabled）
    pub services: ServiceState,
    /// 音频输出存储（始终可用）
    pub storage: Arc<dyn AudioStoragePort>,
    /// 健康检查用：生成模型密钥是否配置
    pub llm_configured: bool,
    /// 健康检查用：TTS 密钥是否配置
    pub tts_configured: bool,
}

impl AppState {
    pub fn new(
        services: ServiceState,
        storage: Arc<dyn AudioStoragePort>,
        llm_configured: bool,
        tts_configured: bool,
    ) -> Self {
        Self {
            services,
            storage,
            llm_configured,
            tts_configured,
        }
    }
}
