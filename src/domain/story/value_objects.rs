//! Story Context - Value Objects

use serde::{Deserialize, Serialize};

use crate::domain::emotion::Emotion;

/// 故事主题
///
/// 影响提示词内容与音色选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Adventure,
    Mystery,
    Romance,
    Fantasy,
    Comedy,
    Horror,
    Children,
}

impl Theme {
    /// 所有合法主题
    pub const ALL: [Theme; 7] = [
        Theme::Adventure,
        Theme::Mystery,
        Theme::Romance,
        Theme::Fantasy,
        Theme::Comedy,
        Theme::Horror,
        Theme::Children,
    ];

    /// 从字符串解析（小写匹配）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "adventure" => Some(Theme::Adventure),
            "mystery" => Some(Theme::Mystery),
            "romance" => Some(Theme::Romance),
            "fantasy" => Some(Theme::Fantasy),
            "comedy" => Some(Theme::Comedy),
            "horror" => Some(Theme::Horror),
            "children" => Some(Theme::Children),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Adventure => "adventure",
            Theme::Mystery => "mystery",
            Theme::Romance => "romance",
            Theme::Fantasy => "fantasy",
            Theme::Comedy => "comedy",
            Theme::Horror => "horror",
            Theme::Children => "children",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 用户偏好情绪
///
/// 请求边界上的封闭枚举；分句阶段产出的自由情感标签见 [`Emotion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excitement,
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Calm,
    Mysterious,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 9] = [
        Mood::Excitement,
        Mood::Joy,
        Mood::Sadness,
        Mood::Anger,
        Mood::Fear,
        Mood::Surprise,
        Mood::Calm,
        Mood::Mysterious,
        Mood::Neutral,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "excitement" => Some(Mood::Excitement),
            "joy" => Some(Mood::Joy),
            "sadness" => Some(Mood::Sadness),
            "anger" => Some(Mood::Anger),
            "fear" => Some(Mood::Fear),
            "surprise" => Some(Mood::Surprise),
            "calm" => Some(Mood::Calm),
            "mysterious" => Some(Mood::Mysterious),
            "neutral" => Some(Mood::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Excitement => "excitement",
            Mood::Joy => "joy",
            Mood::Sadness => "sadness",
            Mood::Anger => "anger",
            Mood::Fear => "fear",
            Mood::Surprise => "surprise",
            Mood::Calm => "calm",
            Mood::Mysterious => "mysterious",
            Mood::Neutral => "neutral",
        }
    }

    /// 转换为开放情感标签
    pub fn to_emotion(self) -> Emotion {
        match self {
            Mood::Excitement => Emotion::Excitement,
            Mood::Joy => Emotion::Joy,
            Mood::Sadness => Emotion::Sadness,
            Mood::Anger => Emotion::Anger,
            Mood::Fear => Emotion::Fear,
            Mood::Surprise => Emotion::Surprise,
            Mood::Calm => Emotion::Calm,
            Mood::Mysterious => Emotion::Mysterious,
            Mood::Neutral => Emotion::Neutral,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 目标时长（分钟）
///
/// 仅允许 1 / 3 / 5 / 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    pub const VALID: [u32; 4] = [1, 3, 5, 10];

    pub fn try_new(minutes: u32) -> Option<Self> {
        if Self::VALID.contains(&minutes) {
            Some(Self(minutes))
        } else {
            None
        }
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// 目标字数估计
    pub fn word_target(&self) -> u32 {
        match self.0 {
            1 => 150,
            3 => 450,
            5 => 750,
            10 => 1500,
            _ => 450,
        }
    }
}

impl std::fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
