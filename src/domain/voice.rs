//! 音色选择
//!
//! 基于主题偏好从供应商音色目录里挑选音色 ID；
//! 目录不可用时退到固定兜底列表。

use crate::domain::story::Theme;

/// 兜底音色（按优先级排列）
pub const FALLBACK_VOICES: [&str; 5] = [
    "en-US-cooper",
    "en-US-hazel",
    "en-US-natalie",
    "en-US-davis",
    "en-US-ruby",
];

/// 主题偏好子串（按优先级排列，忽略大小写匹配音色 ID）
pub fn theme_preferences(theme: Theme) -> &'static [&'static str] {
    match theme {
        Theme::Adventure => &["cooper", "davis", "marcus", "male"],
        Theme::Mystery => &["cooper", "davis", "male"],
        Theme::Romance => &["hazel", "natalie", "sarah", "female"],
        Theme::Fantasy => &["hazel", "ruby", "natalie", "female"],
        Theme::Comedy => &["cooper", "clint", "male"],
        Theme::Horror => &["cooper", "davis", "male"],
        Theme::Children => &["hazel", "natalie", "sarah", "female"],
    }
}

/// 从目录里选择音色
///
/// 顺序：
/// 1. 目录为空 -> 兜底列表第一项（对任何主题）
/// 2. 首个包含主题偏好子串的目录音色（按偏好顺序）
/// 3. 首个包含 "en" 的目录音色
/// 4. 目录第一项
pub fn select_voice(theme: Theme, catalog: &[String]) -> String {
    if catalog.is_empty() {
        return FALLBACK_VOICES[0].to_string();
    }

    for preference in theme_preferences(theme) {
        if let Some(voice_id) = catalog
            .iter()
            .find(|id| id.to_lowercase().contains(preference))
        {
            return voice_id.clone();
        }
    }

    if let Some(voice_id) = catalog.iter().find(|id| id.to_lowercase().contains("en")) {
        return voice_id.clone();
    }

    catalog[0].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_catalog_uses_first_fallback_for_any_theme() {
        for theme in Theme::ALL {
            assert_eq!(select_voice(theme, &[]), "en-US-cooper");
        }
    }

    #[test]
    fn test_theme_preference_match() {
        let voices = catalog(&["en-US-ruby", "en-US-hazel", "en-US-cooper"]);
        assert_eq!(select_voice(Theme::Romance, &voices), "en-US-hazel");
        assert_eq!(select_voice(Theme::Adventure, &voices), "en-US-cooper");
        assert_eq!(select_voice(Theme::Fantasy, &voices), "en-US-hazel");
    }

    #[test]
    fn test_preference_order_is_respected() {
        // fantasy 的偏好顺序是 hazel, ruby, natalie, female
        let voices = catalog(&["en-US-ruby", "en-UK-hazel"]);
        assert_eq!(select_voice(Theme::Fantasy, &voices), "en-UK-hazel");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let voices = catalog(&["EN-US-COOPER"]);
        assert_eq!(select_voice(Theme::Mystery, &voices), "EN-US-COOPER");
    }

    #[test]
    fn test_falls_back_to_english_tagged_voice() {
        let voices = catalog(&["ja-JP-aoi", "en-GB-oliver"]);
        assert_eq!(select_voice(Theme::Romance, &voices), "en-GB-oliver");
    }

    #[test]
    fn test_falls_back_to_first_catalog_entry() {
        let voices = catalog(&["ja-JP-aoi", "fr-FR-lou"]);
        assert_eq!(select_voice(Theme::Romance, &voices), "ja-JP-aoi");
    }
}
