//! Story Context - Errors

use thiserror::Error;

/// 请求校验错误
///
/// 错误信息直接面向 API 调用方，必须具体到单条约束
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("At least one keyword is required")]
    NoKeywords,

    #[error("Maximum 10 keywords allowed")]
    TooManyKeywords,

    #[error("Keywords must not be blank")]
    BlankKeyword,

    #[error("Theme must be one of: adventure, mystery, romance, fantasy, comedy, horror, children")]
    InvalidTheme,

    #[error("Duration must be one of: 1, 3, 5, 10 minutes")]
    InvalidDuration,

    #[error("At least one mood is required")]
    NoMoods,

    #[error("Invalid mood '{0}'. Valid moods: excitement, joy, sadness, anger, fear, surprise, calm, mysterious, neutral")]
    InvalidMood(String),
}
