//! Audio GC Worker - 过期音频清理
//!
//! 后台定时任务：按固定间隔扫描输出目录，删除超过保留时长的音频文件。
//! 输出文件不做索引，按龄清理是唯一的回收手段。

use chrono::Duration;
use std::sync::Arc;
use tokio::time;

use crate::application::ports::AudioStoragePort;

/// GC Worker 配置
#[derive(Debug, Clone)]
pub struct AudioGcWorkerConfig {
    /// 清理间隔（秒）
    pub interval_secs: u64,
    /// 保留时长（小时）
    pub max_age_hours: u64,
}

/// Audio GC Worker
pub struct AudioGcWorker {
    config: AudioGcWorkerConfig,
    storage: Arc<dyn AudioStoragePort>,
}

impl AudioGcWorker {
    pub fn new(config: AudioGcWorkerConfig, storage: Arc<dyn AudioStoragePort>) -> Self {
        Self { config, storage }
    }

    /// 运行清理循环（常驻任务，用 tokio::spawn 启动）
    pub async fn run(self) {
        let mut ticker = time::interval(time::Duration::from_secs(self.config.interval_secs));
        // 第一次 tick 立即触发，先跳过，避免启动即清扫
        ticker.tick().await;

        let max_age = Duration::hours(self.config.max_age_hours as i64);

        tracing::info!(
            interval_secs = self.config.interval_secs,
            max_age_hours = self.config.max_age_hours,
            "Audio GC worker started"
        );

        loop {
            ticker.tick().await;

            match self.storage.sweep_older_than(max_age).await {
                Ok(0) => {
                    tracing::debug!("Audio GC sweep: nothing to remove");
                }
                Ok(removed) => {
                    tracing::info!(removed, "Audio GC sweep completed");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Audio GC sweep failed");
                }
            }
        }
    }
}
