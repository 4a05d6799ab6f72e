//! Story Command Handlers
//!
//! 管线编排：提示词 -> 生成模型 -> 情感分句 -> 音色选择 -> 合成 -> 落盘。
//! 三次外部调用全部同步串行，每次只尝试一次，无重试。

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::GenerateStory;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioStoragePort, StoryModelPort, SynthesisRequest, TtsEnginePort,
};
use crate::domain::{
    build_story_prompt, plan_merged, select_voice, EmotionSegmenter, StorySegment,
};

/// 生成结果
#[derive(Debug, Clone)]
pub struct StoryGenerated {
    /// 原始故事文本
    pub story: String,
    /// 成功写盘的音频文件名；合成降级失败时为 None
    pub audio_filename: Option<String>,
    /// 降级时的合成错误描述
    pub audio_error: Option<String>,
    /// 使用到的情感标签（去重，按首次出现排序）
    pub emotions_used: Vec<String>,
    pub segments_count: usize,
    /// 故事的空白分词计数
    pub word_count: usize,
    pub duration_minutes: u32,
}

/// GenerateStory Handler
///
/// 每请求一条线性调用链，请求之间不共享可变状态；
/// 输出文件名取每请求新生成的随机标识，靠随机性而非加锁避免冲突。
pub struct GenerateStoryHandler {
    story_model: Arc<dyn StoryModelPort>,
    tts_engine: Arc<dyn TtsEnginePort>,
    storage: Arc<dyn AudioStoragePort>,
    segmenter: EmotionSegmenter,
    /// 合成失败时是否降级为"有故事、无音频"
    degrade_on_failure: bool,
}

impl GenerateStoryHandler {
    pub fn new(
        story_model: Arc<dyn StoryModelPort>,
        tts_engine: Arc<dyn TtsEnginePort>,
        storage: Arc<dyn AudioStoragePort>,
        segmenter: EmotionSegmenter,
        degrade_on_failure: bool,
    ) -> Self {
        Self {
            story_model,
            tts_engine,
            storage,
            segmenter,
            degrade_on_failure,
        }
    }

    pub async fn handle(&self, command: GenerateStory) -> Result<StoryGenerated, ApplicationError> {
        let request = command.request;

        // 1. 生成故事
        let prompt = build_story_prompt(&request);
        let story = self
            .story_model
            .generate(&prompt)
            .await
            .map_err(|e| ApplicationError::GenerationFailed(e.to_string()))?;

        tracing::info!(
            theme = %request.theme(),
            duration_min = request.duration().minutes(),
            story_chars = story.chars().count(),
            "Story generated"
        );

        // 2. 情感分句
        let segments = self.segmenter.segment(&story, request.moods());
        if segments.is_empty() {
            return Err(ApplicationError::GenerationFailed(
                "generated story produced no narratable segments".to_string(),
            ));
        }

        tracing::info!(segments = segments.len(), "Emotions analyzed");

        // 3. 音色选择（目录查询失败按空目录处理，走兜底列表）
        let catalog = match self.tts_engine.list_voices().await {
            Ok(voices) => voices,
            Err(e) => {
                tracing::warn!(error = %e, "Voice catalog unavailable, using fallback voices");
                Vec::new()
            }
        };
        let voice_id = select_voice(request.theme(), &catalog);

        tracing::info!(voice_id = %voice_id, theme = %request.theme(), "Voice selected");

        // 4. 合并朗读计划
        let merged = plan_merged(&segments)
            .ok_or_else(|| ApplicationError::internal("segment sequence vanished"))?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            for (index, segment) in segments.iter().enumerate() {
                let plan = crate::domain::plan_segment(segment);
                tracing::debug!(
                    index,
                    emotion = %segment.emotion,
                    style = %plan.style,
                    speed = plan.speed,
                    pitch = plan.pitch,
                    emphasis = plan.emphasis.as_str(),
                    pause_after = plan.pause_after,
                    "Segment delivery plan"
                );
            }
        }

        let word_count = story.split_whitespace().count();
        let emotions_used = collect_emotions(&segments);
        let segments_count = segments.len();

        // 5. 合成并落盘
        let synthesis = SynthesisRequest {
            text: merged.text,
            voice_id,
            style: merged.style,
            rate: merged.rate,
            pitch: merged.pitch,
        };

        let (audio_filename, audio_error) = match self.tts_engine.synthesize(synthesis).await {
            Ok(response) => {
                let filename = fresh_audio_filename();
                self.storage.save(&filename, &response.audio_data).await?;
                tracing::info!(filename = %filename, "Audio generated");
                (Some(filename), None)
            }
            Err(e) if self.degrade_on_failure => {
                tracing::error!(error = %e, "Audio generation failed, returning story only");
                (None, Some(e.to_string()))
            }
            Err(e) => return Err(ApplicationError::SynthesisFailed(e.to_string())),
        };

        Ok(StoryGenerated {
            story,
            audio_filename,
            audio_error,
            emotions_used,
            segments_count,
            word_count,
            duration_minutes: request.duration().minutes(),
        })
    }
}

/// 随机输出文件名：story_ + uuid 前 8 个十六进制字符
fn fresh_audio_filename() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("story_{}.mp3", &id[..8])
}

/// 去重收集情感标签，保持首次出现顺序
fn collect_emotions(segments: &[StorySegment]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for segment in segments {
        let label = segment.emotion.as_label().to_string();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}
