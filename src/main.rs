//! Fabula - 情感化有声故事生成后端
//!
//! 管线: 故事生成 (Gemini) -> 情感分句 -> 语音合成 (Murf) -> 音频落盘

use std::sync::Arc;

use fabula::application::GenerateStoryHandler;
use fabula::config::{load_config, print_config, AppConfig};
use fabula::domain::{EmotionLexicon, EmotionSegmenter};
use fabula::infrastructure::adapters::{
    FileAudioStorage, GeminiClient, GeminiClientConfig, MurfTtsClient, MurfTtsClientConfig,
};
use fabula::infrastructure::http::{AppState, HttpServer, ServerConfig, ServiceState};
use fabula::infrastructure::worker::{AudioGcWorker, AudioGcWorkerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},fabula={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Fabula - 情感化有声故事生成后端");
    print_config(&config);

    // 音频输出目录
    let storage = Arc::new(FileAudioStorage::new(&config.storage.audio_dir).await?);

    // 生成服务：密钥齐全则 Ready，否则显式 Disabled（进程照常服务下载与健康检查）
    let services = build_services(&config, storage.clone())?;
    match &services {
        ServiceState::Ready(_) => tracing::info!("Story generation services ready"),
        ServiceState::Disabled { reason } => {
            tracing::error!(reason = %reason, "Story generation disabled");
        }
    }

    // 启动过期音频清理
    if config.gc.enabled {
        let worker = AudioGcWorker::new(
            AudioGcWorkerConfig {
                interval_secs: config.gc.interval_secs,
                max_age_hours: config.gc.max_age_hours,
            },
            storage.clone(),
        );
        tokio::spawn(worker.run());
    }

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        config.storage.max_request_size as usize,
    );
    let state = AppState::new(
        services,
        storage,
        config.llm.api_key.is_some(),
        config.tts.api_key.is_some(),
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 从配置构建生成服务
///
/// 任一必需密钥缺失即返回 Disabled，不在请求路径上做隐式空值检查
fn build_services(
    config: &AppConfig,
    storage: Arc<FileAudioStorage>,
) -> anyhow::Result<ServiceState> {
    let llm_key = match &config.llm.api_key {
        Some(key) if !key.is_empty() => key.clone(),
        _ => {
            return Ok(ServiceState::disabled(
                "LLM API key not configured (set FABULA_LLM__API_KEY)",
            ))
        }
    };
    let tts_key = match &config.tts.api_key {
        Some(key) if !key.is_empty() => key.clone(),
        _ => {
            return Ok(ServiceState::disabled(
                "TTS API key not configured (set FABULA_TTS__API_KEY)",
            ))
        }
    };

    let story_model = GeminiClient::new(GeminiClientConfig {
        api_key: llm_key,
        base_url: config.llm.base_url.clone(),
        model: config.llm.model.clone(),
        timeout_secs: config.llm.timeout_secs,
    })
    .map_err(|e| anyhow::anyhow!("Failed to build LLM client: {}", e))?;

    let tts_engine = MurfTtsClient::new(MurfTtsClientConfig {
        api_key: tts_key,
        base_url: config.tts.base_url.clone(),
        timeout_secs: config.tts.timeout_secs,
        download_timeout_secs: config.tts.download_timeout_secs,
        voices_timeout_secs: config.tts.voices_timeout_secs,
        sample_rate: config.tts.sample_rate,
        format: config.tts.format.clone(),
    })
    .map_err(|e| anyhow::anyhow!("Failed to build TTS client: {}", e))?;

    let segmenter = if config.segmenter.use_lexicon {
        EmotionSegmenter::with_lexicon(EmotionLexicon::new())
    } else {
        EmotionSegmenter::new()
    };

    let handler = GenerateStoryHandler::new(
        Arc::new(story_model),
        Arc::new(tts_engine),
        storage,
        segmenter,
        config.tts.degrade_on_failure,
    );

    Ok(ServiceState::Ready(handler))
}
