//! Story Context - 提示词构造
//!
//! 将请求参数组装为单条自然语言提示词，提交给外部生成模型

use super::request::StoryRequest;
use super::value_objects::{Mood, Theme};

/// 构造故事生成提示词
///
/// 嵌入主题、关键词、情绪与目标字数，并附加面向 TTS 朗读的写作要求。
/// 要求模型在文本中以括号形式标注情感提示，供分句阶段提取。
pub fn build_story_prompt(request: &StoryRequest) -> String {
    let theme = request.theme();
    let word_count = request.duration().word_target();
    let keywords_text = request.keywords().join(", ");
    let moods_text = join_moods(request.moods());

    format!(
        "Create an engaging {duration}-minute story (approximately {word_count} words) \
with the following specifications:\n\
\n\
Theme: {theme}\n\
Keywords to include: {keywords_text}\n\
Emotional moods to emphasize: {moods_text}\n\
Target word count: {word_count} words\n\
\n\
Requirements:\n\
1. Create clear emotional transitions that match the specified moods: {moods_text}\n\
2. Use vivid descriptions and engaging dialogue\n\
3. Include natural pauses and dramatic moments for audio narration\n\
4. Structure with a clear beginning, middle, and end\n\
5. Make it suitable for emotional text-to-speech narration\n\
6. Include emotional cues in parentheses like (excited), (whispered), (dramatically)\n\
7. Ensure all keywords are naturally integrated: {keywords_text}\n\
\n\
Write a captivating {theme} story that will sound amazing when narrated with \
emotional text-to-speech technology.",
        duration = request.duration().minutes(),
        word_count = word_count,
        theme = theme_label(theme),
        keywords_text = keywords_text,
        moods_text = moods_text,
    )
}

fn theme_label(theme: Theme) -> &'static str {
    theme.as_str()
}

fn join_moods(moods: &[Mood]) -> String {
    moods
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> StoryRequest {
        StoryRequest::new(
            vec!["lighthouse".to_string(), "storm".to_string()],
            "mystery",
            3,
            &["mysterious".to_string(), "fear".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_prompt_embeds_all_parameters() {
        let prompt = build_story_prompt(&request());
        assert!(prompt.contains("Theme: mystery"));
        assert!(prompt.contains("lighthouse, storm"));
        assert!(prompt.contains("mysterious, fear"));
        assert!(prompt.contains("3-minute story"));
        assert!(prompt.contains("approximately 450 words"));
    }

    #[test]
    fn test_prompt_requests_parenthesized_cues() {
        let prompt = build_story_prompt(&request());
        assert!(prompt.contains("emotional cues in parentheses"));
    }
}
