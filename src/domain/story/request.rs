//! Story Context - 故事请求聚合
//!
//! 在边界上一次性校验，之后不可变

use super::errors::RequestError;
use super::value_objects::{DurationMinutes, Mood, Theme};

/// 最大关键词数量
pub const MAX_KEYWORDS: usize = 10;

/// 已校验的故事请求
///
/// 只能通过 [`StoryRequest::new`] 构造，构造成功即满足所有约束
#[derive(Debug, Clone)]
pub struct StoryRequest {
    keywords: Vec<String>,
    theme: Theme,
    duration: DurationMinutes,
    moods: Vec<Mood>,
}

impl StoryRequest {
    /// 从未校验的原始输入构造请求
    ///
    /// 逐条检查约束，返回第一条被违反约束的具体错误
    pub fn new(
        keywords: Vec<String>,
        theme: &str,
        duration: u32,
        moods: &[String],
    ) -> Result<Self, RequestError> {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .collect();

        if keywords.is_empty() {
            return Err(RequestError::NoKeywords);
        }
        if keywords.len() > MAX_KEYWORDS {
            return Err(RequestError::TooManyKeywords);
        }
        if keywords.iter().any(|k| k.is_empty()) {
            return Err(RequestError::BlankKeyword);
        }

        let theme = Theme::parse(theme).ok_or(RequestError::InvalidTheme)?;

        let duration =
            DurationMinutes::try_new(duration).ok_or(RequestError::InvalidDuration)?;

        if moods.is_empty() {
            return Err(RequestError::NoMoods);
        }
        let moods = moods
            .iter()
            .map(|m| Mood::parse(m).ok_or_else(|| RequestError::InvalidMood(m.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            keywords,
            theme,
            duration,
            moods,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn duration(&self) -> DurationMinutes {
        self.duration
    }

    pub fn moods(&self) -> &[Mood] {
        &self.moods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> Result<StoryRequest, RequestError> {
        StoryRequest::new(
            vec!["lighthouse".to_string()],
            "mystery",
            1,
            &["mysterious".to_string()],
        )
    }

    #[test]
    fn test_valid_request_passes() {
        let req = valid_request().unwrap();
        assert_eq!(req.keywords(), ["lighthouse"]);
        assert_eq!(req.theme(), Theme::Mystery);
        assert_eq!(req.duration().minutes(), 1);
        assert_eq!(req.moods(), [Mood::Mysterious]);
    }

    #[test]
    fn test_zero_keywords_rejected() {
        let err = StoryRequest::new(vec![], "mystery", 1, &["neutral".to_string()]).unwrap_err();
        assert_eq!(err, RequestError::NoKeywords);
    }

    #[test]
    fn test_eleven_keywords_rejected() {
        let keywords: Vec<String> = (0..11).map(|i| format!("kw{}", i)).collect();
        let err = StoryRequest::new(keywords, "mystery", 1, &["neutral".to_string()]).unwrap_err();
        assert_eq!(err, RequestError::TooManyKeywords);
    }

    #[test]
    fn test_ten_keywords_accepted() {
        let keywords: Vec<String> = (0..10).map(|i| format!("kw{}", i)).collect();
        assert!(StoryRequest::new(keywords, "mystery", 1, &["neutral".to_string()]).is_ok());
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let err = StoryRequest::new(
            vec!["ok".to_string(), "   ".to_string()],
            "mystery",
            1,
            &["neutral".to_string()],
        )
        .unwrap_err();
        assert_eq!(err, RequestError::BlankKeyword);
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let err = StoryRequest::new(
            vec!["kw".to_string()],
            "noir",
            1,
            &["neutral".to_string()],
        )
        .unwrap_err();
        assert_eq!(err, RequestError::InvalidTheme);
    }

    #[test]
    fn test_invalid_duration_rejected() {
        for bad in [0, 2, 4, 7, 60] {
            let err = StoryRequest::new(
                vec!["kw".to_string()],
                "mystery",
                bad,
                &["neutral".to_string()],
            )
            .unwrap_err();
            assert_eq!(err, RequestError::InvalidDuration);
        }
    }

    #[test]
    fn test_empty_moods_rejected() {
        let err = StoryRequest::new(vec!["kw".to_string()], "mystery", 1, &[]).unwrap_err();
        assert_eq!(err, RequestError::NoMoods);
    }

    #[test]
    fn test_unknown_mood_rejected() {
        let err = StoryRequest::new(
            vec!["kw".to_string()],
            "mystery",
            1,
            &["gloomy".to_string()],
        )
        .unwrap_err();
        assert_eq!(err, RequestError::InvalidMood("gloomy".to_string()));
    }

    #[test]
    fn test_error_messages_are_specific() {
        assert_eq!(
            RequestError::TooManyKeywords.to_string(),
            "Maximum 10 keywords allowed"
        );
        assert!(RequestError::InvalidMood("gloomy".to_string())
            .to_string()
            .contains("'gloomy'"));
    }
}
