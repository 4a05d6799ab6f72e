//! 朗读参数规划
//!
//! 从片段情感查固定表得出语速、音高、重音与停顿；
//! 合并为单次合成请求时，整体风格取众数情感，语速音高取算术平均。

use crate::domain::emotion::{Emotion, VoiceStyle};
use crate::domain::normalizer::normalize;
use crate::domain::segmenter::StorySegment;

/// 重音强度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisLevel {
    Strong,
    Moderate,
    Reduced,
    None,
}

impl EmphasisLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmphasisLevel::Strong => "strong",
            EmphasisLevel::Moderate => "moderate",
            EmphasisLevel::Reduced => "reduced",
            EmphasisLevel::None => "none",
        }
    }
}

/// 语速表
pub fn speed_for(emotion: &Emotion) -> f32 {
    match emotion {
        Emotion::Excitement | Emotion::Joy => 1.1,
        Emotion::Surprise => 1.2,
        Emotion::Anger | Emotion::Neutral => 1.0,
        Emotion::Calm => 0.95,
        Emotion::Fear | Emotion::Mysterious => 0.9,
        Emotion::Sadness => 0.8,
        _ => 1.0,
    }
}

/// 音高表
pub fn pitch_for(emotion: &Emotion) -> f32 {
    match emotion {
        Emotion::Surprise => 1.3,
        Emotion::Fear => 1.2,
        Emotion::Excitement => 1.1,
        Emotion::Joy => 1.05,
        Emotion::Anger => 1.05,
        Emotion::Sadness | Emotion::Mysterious => 0.95,
        Emotion::Calm | Emotion::Neutral => 1.0,
        _ => 1.0,
    }
}

/// 重音表
pub fn emphasis_for(emotion: &Emotion) -> EmphasisLevel {
    match emotion {
        Emotion::Excitement | Emotion::Anger | Emotion::Surprise => EmphasisLevel::Strong,
        Emotion::Fear | Emotion::Joy | Emotion::Mysterious => EmphasisLevel::Moderate,
        Emotion::Sadness => EmphasisLevel::Reduced,
        Emotion::Calm | Emotion::Neutral => EmphasisLevel::None,
        _ => EmphasisLevel::None,
    }
}

/// 片段后停顿表（秒）
pub fn pause_after_for(emotion: &Emotion) -> f32 {
    match emotion {
        Emotion::Sadness => 1.2,
        Emotion::Mysterious => 1.0,
        Emotion::Fear => 0.8,
        Emotion::Calm => 0.6,
        Emotion::Surprise | Emotion::Neutral => 0.5,
        Emotion::Joy => 0.4,
        Emotion::Excitement | Emotion::Anger => 0.3,
        _ => 0.5,
    }
}

/// 单片段朗读参数
#[derive(Debug, Clone)]
pub struct SegmentDelivery {
    pub style: VoiceStyle,
    pub speed: f32,
    pub pitch: f32,
    pub emphasis: EmphasisLevel,
    pub pause_after: f32,
}

/// 按情感查表得出片段参数
pub fn plan_segment(segment: &StorySegment) -> SegmentDelivery {
    SegmentDelivery {
        style: segment.emotion.voice_style(),
        speed: speed_for(&segment.emotion),
        pitch: pitch_for(&segment.emotion),
        emphasis: emphasis_for(&segment.emotion),
        pause_after: pause_after_for(&segment.emotion),
    }
}

/// 合并合成计划
#[derive(Debug, Clone)]
pub struct MergedDelivery {
    /// 全文（片段以空格连接后整体清洗）
    pub text: String,
    /// 整体风格（众数情感）
    pub style: VoiceStyle,
    /// 整体语速（片段均值）
    pub rate: f32,
    /// 整体音高（片段均值）
    pub pitch: f32,
}

/// 将片段序列合并为一次合成请求的参数
///
/// 众数情感取首次出现者优先的最高频标签；空输入返回 None
pub fn plan_merged(segments: &[StorySegment]) -> Option<MergedDelivery> {
    if segments.is_empty() {
        return None;
    }

    let joined = segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let text = normalize(&joined);

    let dominant = dominant_emotion(segments);
    let count = segments.len() as f32;
    let rate = segments.iter().map(|s| speed_for(&s.emotion)).sum::<f32>() / count;
    let pitch = segments.iter().map(|s| pitch_for(&s.emotion)).sum::<f32>() / count;

    Some(MergedDelivery {
        text,
        style: dominant.voice_style(),
        rate,
        pitch,
    })
}

/// 众数情感（平局时取先出现者）
fn dominant_emotion(segments: &[StorySegment]) -> Emotion {
    let mut counts: Vec<(Emotion, usize)> = Vec::new();
    for segment in segments {
        match counts.iter_mut().find(|(e, _)| *e == segment.emotion) {
            Some((_, n)) => *n += 1,
            None => counts.push((segment.emotion.clone(), 1)),
        }
    }

    let mut best = counts[0].clone();
    for (emotion, n) in counts.into_iter().skip(1) {
        if n > best.1 {
            best = (emotion, n);
        }
    }
    best.0
}
