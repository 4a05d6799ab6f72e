//! 情感模型
//!
//! 分句阶段产出的情感标签来自文本中的自由标注，无法约束取值，
//! 因此对外保持开放字符串，内部建模为封闭枚举加 Other 变体，
//! 保证所有下游查表（音色风格、语速、音高等）对任意标签全覆盖。

use serde::{Deserialize, Serialize};

/// 情感标签
///
/// 解析永不失败：未知标签落入 [`Emotion::Other`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Joy,
    Happiness,
    Excitement,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Calm,
    Peaceful,
    Mysterious,
    Dramatic,
    Neutral,
    /// 来自文本标注的任意其他标签（保留原文，已小写）
    Other(String),
}

impl Emotion {
    /// 从自由标签解析（小写、去空白）
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "joy" => Emotion::Joy,
            "happiness" | "happy" => Emotion::Happiness,
            "excitement" | "excited" => Emotion::Excitement,
            "sadness" | "sad" => Emotion::Sadness,
            "anger" | "angry" => Emotion::Anger,
            "fear" | "scared" | "terrified" => Emotion::Fear,
            "surprise" | "surprised" => Emotion::Surprise,
            "calm" => Emotion::Calm,
            "peaceful" => Emotion::Peaceful,
            "mysterious" => Emotion::Mysterious,
            "dramatic" => Emotion::Dramatic,
            "neutral" => Emotion::Neutral,
            other => Emotion::Other(other.to_string()),
        }
    }

    pub fn as_label(&self) -> &str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Happiness => "happiness",
            Emotion::Excitement => "excitement",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Calm => "calm",
            Emotion::Peaceful => "peaceful",
            Emotion::Mysterious => "mysterious",
            Emotion::Dramatic => "dramatic",
            Emotion::Neutral => "neutral",
            Emotion::Other(label) => label,
        }
    }

    /// 情感到音色风格的固定映射
    ///
    /// 全函数：未知情感一律落到 conversational
    pub fn voice_style(&self) -> VoiceStyle {
        match self {
            Emotion::Excitement | Emotion::Surprise => VoiceStyle::Excited,
            Emotion::Joy | Emotion::Happiness => VoiceStyle::Cheerful,
            Emotion::Sadness => VoiceStyle::Sad,
            Emotion::Anger => VoiceStyle::Angry,
            Emotion::Fear => VoiceStyle::Terrified,
            Emotion::Calm | Emotion::Peaceful => VoiceStyle::Calm,
            Emotion::Mysterious | Emotion::Dramatic | Emotion::Neutral => {
                VoiceStyle::Conversational
            }
            Emotion::Other(_) => VoiceStyle::Conversational,
        }
    }

    /// 情感家族（用于偏好情绪的改写）
    pub fn family(&self) -> EmotionFamily {
        match self {
            Emotion::Joy
            | Emotion::Happiness
            | Emotion::Excitement
            | Emotion::Calm
            | Emotion::Peaceful => EmotionFamily::Positive,
            Emotion::Sadness | Emotion::Anger | Emotion::Fear => EmotionFamily::Negative,
            Emotion::Neutral | Emotion::Surprise => EmotionFamily::Neutral,
            Emotion::Mysterious | Emotion::Dramatic | Emotion::Other(_) => EmotionFamily::Unknown,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// 情感家族分组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionFamily {
    Positive,
    Negative,
    Neutral,
    /// 不参与家族匹配
    Unknown,
}

/// 音色风格标签
///
/// TTS 供应商的朗读预设
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceStyle {
    Excited,
    Cheerful,
    Sad,
    Angry,
    Terrified,
    Calm,
    Conversational,
}

impl VoiceStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceStyle::Excited => "excited",
            VoiceStyle::Cheerful => "cheerful",
            VoiceStyle::Sad => "sad",
            VoiceStyle::Angry => "angry",
            VoiceStyle::Terrified => "terrified",
            VoiceStyle::Calm => "calm",
            VoiceStyle::Conversational => "conversational",
        }
    }
}

impl std::fmt::Display for VoiceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_parse_to_closed_variants() {
        assert_eq!(Emotion::from_label("joy"), Emotion::Joy);
        assert_eq!(Emotion::from_label("Excited"), Emotion::Excitement);
        assert_eq!(Emotion::from_label(" scared "), Emotion::Fear);
    }

    #[test]
    fn test_unknown_label_becomes_other() {
        let emotion = Emotion::from_label("Whispered Softly");
        assert_eq!(emotion, Emotion::Other("whispered softly".to_string()));
        assert_eq!(emotion.as_label(), "whispered softly");
    }

    #[test]
    fn test_every_emotion_resolves_to_a_style() {
        // 任意字符串都必须有风格，未知的落到 conversational
        for label in ["joy", "sadness", "fear", "whispered", "", "!!!"] {
            let style = Emotion::from_label(label).voice_style();
            assert!(!style.as_str().is_empty());
        }
        assert_eq!(
            Emotion::from_label("whispered").voice_style(),
            VoiceStyle::Conversational
        );
    }

    #[test]
    fn test_style_table() {
        assert_eq!(Emotion::Excitement.voice_style(), VoiceStyle::Excited);
        assert_eq!(Emotion::Joy.voice_style(), VoiceStyle::Cheerful);
        assert_eq!(Emotion::Sadness.voice_style(), VoiceStyle::Sad);
        assert_eq!(Emotion::Anger.voice_style(), VoiceStyle::Angry);
        assert_eq!(Emotion::Fear.voice_style(), VoiceStyle::Terrified);
        assert_eq!(Emotion::Peaceful.voice_style(), VoiceStyle::Calm);
        assert_eq!(Emotion::Neutral.voice_style(), VoiceStyle::Conversational);
    }

    #[test]
    fn test_families() {
        assert_eq!(Emotion::Joy.family(), EmotionFamily::Positive);
        assert_eq!(Emotion::Fear.family(), EmotionFamily::Negative);
        assert_eq!(Emotion::Surprise.family(), EmotionFamily::Neutral);
        assert_eq!(
            Emotion::Other("whispered".to_string()).family(),
            EmotionFamily::Unknown
        );
    }
}
