//! 情感分句器
//!
//! 将故事文本切分为句级片段并为每句指派情感标签：
//! 1. 括号内的显式情感标注优先（置信度 0.9），朗读文本中剔除所有括号内容
//! 2. 其次使用词典分类器（如果配置启用），并向调用方偏好情绪改写
//! 3. 否则按偏好情绪轮换指派（置信度 0.7）

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::emotion::{Emotion, EmotionFamily, VoiceStyle};
use crate::domain::story::Mood;

/// 句长下限（字符数）
///
/// 低于此长度的句子不足以承载情感化朗读，直接丢弃
pub const MIN_SENTENCE_CHARS: usize = 10;

/// 句末标点（连续的 . ! ? 视为一个边界）
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// 首个括号标注（捕获内容）
static FIRST_CUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

/// 所有括号内容（用于剔除）
static PAREN_CONTENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// 句级故事片段
#[derive(Debug, Clone)]
pub struct StorySegment {
    /// 朗读文本（已剔除括号标注）
    pub text: String,
    /// 情感标签
    pub emotion: Emotion,
    /// 音色风格（由情感查表得出，查不到落 conversational）
    pub voice_style: VoiceStyle,
    /// 指派置信度，仅供参考
    pub confidence: f32,
}

/// 情感分句器
pub struct EmotionSegmenter {
    lexicon: Option<EmotionLexicon>,
}

impl EmotionSegmenter {
    /// 轮换指派模式（无分类器）
    pub fn new() -> Self {
        Self { lexicon: None }
    }

    /// 附加词典分类器
    pub fn with_lexicon(lexicon: EmotionLexicon) -> Self {
        Self {
            lexicon: Some(lexicon),
        }
    }

    /// 分句并指派情感
    ///
    /// 输出与原文句序一致；短于 [`MIN_SENTENCE_CHARS`] 的句子被丢弃，
    /// 剔除括号后为空的句子同样被丢弃，保证片段文本非空。
    pub fn segment(&self, story_text: &str, preferred_moods: &[Mood]) -> Vec<StorySegment> {
        let mut segments = Vec::new();
        let mut mood_index = 0usize;

        for candidate in SENTENCE_BOUNDARY.split(story_text) {
            let sentence = candidate.trim();
            if sentence.chars().count() < MIN_SENTENCE_CHARS {
                continue;
            }

            let cue = FIRST_CUE
                .captures(sentence)
                .map(|c| c[1].trim().to_string())
                .filter(|c| !c.is_empty());
            let clean_text = PAREN_CONTENT.replace_all(sentence, "").trim().to_string();
            if clean_text.is_empty() {
                continue;
            }

            let (emotion, confidence) = match cue {
                Some(label) => (Emotion::from_label(&label), 0.9),
                None => self.assign_emotion(&clean_text, preferred_moods, &mut mood_index),
            };

            let voice_style = emotion.voice_style();
            segments.push(StorySegment {
                text: clean_text,
                emotion,
                voice_style,
                confidence,
            });
        }

        segments
    }

    /// 无显式标注时的指派策略
    fn assign_emotion(
        &self,
        sentence: &str,
        preferred_moods: &[Mood],
        mood_index: &mut usize,
    ) -> (Emotion, f32) {
        if let Some(lexicon) = &self.lexicon {
            if let Some((detected, confidence)) = lexicon.classify(sentence) {
                return (bias_to_preferred(detected, preferred_moods), confidence);
            }
        }

        // 轮换指派
        if preferred_moods.is_empty() {
            return (Emotion::Neutral, 0.7);
        }
        let mood = preferred_moods[*mood_index % preferred_moods.len()];
        *mood_index += 1;
        (mood.to_emotion(), 0.7)
    }
}

impl Default for EmotionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// 将分类结果向偏好情绪改写
///
/// 已经是偏好情绪则保留；否则取首个同家族的偏好情绪；
/// 没有同家族的，退到首个偏好情绪。
fn bias_to_preferred(detected: Emotion, preferred_moods: &[Mood]) -> Emotion {
    if preferred_moods.is_empty() {
        return detected;
    }
    if preferred_moods.iter().any(|m| m.to_emotion() == detected) {
        return detected;
    }

    let family = detected.family();
    if family != EmotionFamily::Unknown {
        if let Some(mood) = preferred_moods
            .iter()
            .find(|m| m.to_emotion().family() == family)
        {
            return mood.to_emotion();
        }
    }

    preferred_moods[0].to_emotion()
}

/// 关键词词典情感分类器
///
/// 基于命中计数的规则分类，无学习状态
pub struct EmotionLexicon {
    entries: Vec<(Emotion, &'static [&'static str])>,
}

impl EmotionLexicon {
    pub fn new() -> Self {
        // 词干匹配，小写包含即命中
        let entries: Vec<(Emotion, &'static [&'static str])> = vec![
            (
                Emotion::Joy,
                &["laugh", "smile", "joy", "delight", "cheer"][..],
            ),
            (
                Emotion::Excitement,
                &["excit", "thrill", "eager", "rush", "burst"][..],
            ),
            (
                Emotion::Sadness,
                &["tear", "wept", "sorrow", "grief", "mourn", "lonely"][..],
            ),
            (
                Emotion::Anger,
                &["anger", "furious", "rage", "shout", "snarl"][..],
            ),
            (
                Emotion::Fear,
                &["fear", "terror", "afraid", "trembl", "dread", "panic"][..],
            ),
            (
                Emotion::Surprise,
                &["sudden", "gasp", "astonish", "startl"][..],
            ),
            (
                Emotion::Calm,
                &["calm", "gentle", "peaceful", "quiet", "still"][..],
            ),
            (
                Emotion::Mysterious,
                &["myster", "shadow", "secret", "strange", "whisper"][..],
            ),
        ];
        Self { entries }
    }

    /// 分类单句，无命中返回 None
    ///
    /// 置信度随命中数增长，封顶 0.9
    pub fn classify(&self, sentence: &str) -> Option<(Emotion, f32)> {
        let lowered = sentence.to_lowercase();
        let mut best: Option<(&Emotion, usize)> = None;

        for (emotion, stems) in &self.entries {
            let hits = stems.iter().filter(|s| lowered.contains(**s)).count();
            if hits == 0 {
                continue;
            }
            match best {
                Some((_, best_hits)) if hits <= best_hits => {}
                _ => best = Some((emotion, hits)),
            }
        }

        best.map(|(emotion, hits)| {
            let confidence = (0.5 + 0.1 * hits as f32).min(0.9);
            (emotion.clone(), confidence)
        })
    }
}

impl Default for EmotionLexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moods(labels: &[&str]) -> Vec<Mood> {
        labels.iter().map(|l| Mood::parse(l).unwrap()).collect()
    }

    #[test]
    fn test_short_sentences_are_dropped() {
        let segmenter = EmotionSegmenter::new();
        let segments = segmenter.segment("Hi. No! The lighthouse keeper waited alone.", &moods(&["neutral"]));
        assert_eq!(segments.len(), 1);
        assert!(segments[0].text.contains("lighthouse keeper"));
        for seg in &segments {
            assert!(seg.text.chars().count() >= 1);
        }
    }

    #[test]
    fn test_explicit_cue_wins_with_high_confidence() {
        let segmenter = EmotionSegmenter::new();
        let segments = segmenter.segment(
            "(excited) The door finally swung open before them!",
            &moods(&["sadness"]),
        );
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].emotion, Emotion::Excitement);
        assert!((segments[0].confidence - 0.9).abs() < f32::EPSILON);
        // 括号内容不得进入朗读文本
        assert!(!segments[0].text.contains('('));
        assert!(!segments[0].text.contains("excited"));
    }

    #[test]
    fn test_free_form_cue_is_preserved_as_other() {
        let segmenter = EmotionSegmenter::new();
        let segments = segmenter.segment(
            "(whispered softly) The corridor stretched into darkness.",
            &moods(&["neutral"]),
        );
        assert_eq!(
            segments[0].emotion,
            Emotion::Other("whispered softly".to_string())
        );
        assert_eq!(segments[0].voice_style, VoiceStyle::Conversational);
    }

    #[test]
    fn test_rotation_cycles_preferred_moods() {
        let segmenter = EmotionSegmenter::new();
        let text = "The first sentence is long enough. The second sentence is long enough. The third sentence is long enough.";
        let segments = segmenter.segment(text, &moods(&["joy", "fear"]));
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].emotion, Emotion::Joy);
        assert_eq!(segments[1].emotion, Emotion::Fear);
        assert_eq!(segments[2].emotion, Emotion::Joy);
        for seg in &segments {
            assert!((seg.confidence - 0.7).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_sentence_order_is_preserved() {
        let segmenter = EmotionSegmenter::new();
        let text = "The storm rolled in over the harbor. The keeper climbed the spiral stairs.";
        let segments = segmenter.segment(text, &moods(&["neutral"]));
        assert_eq!(segments.len(), 2);
        assert!(segments[0].text.starts_with("The storm"));
        assert!(segments[1].text.starts_with("The keeper"));
    }

    #[test]
    fn test_cue_only_sentence_is_dropped() {
        let segmenter = EmotionSegmenter::new();
        let segments = segmenter.segment("(a long dramatic pause).", &moods(&["neutral"]));
        assert!(segments.is_empty());
    }

    #[test]
    fn test_lexicon_detects_and_biases_to_family() {
        let segmenter = EmotionSegmenter::with_lexicon(EmotionLexicon::new());
        // trembl→fear（negative 家族），偏好里 sadness 同为 negative，应改写为 sadness
        let segments = segmenter.segment(
            "His hands were trembling in the dark hallway.",
            &moods(&["sadness", "joy"]),
        );
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].emotion, Emotion::Sadness);
    }

    #[test]
    fn test_lexicon_keeps_preferred_detection() {
        let segmenter = EmotionSegmenter::with_lexicon(EmotionLexicon::new());
        let segments = segmenter.segment(
            "A strange whisper drifted from the shadows.",
            &moods(&["mysterious"]),
        );
        assert_eq!(segments[0].emotion, Emotion::Mysterious);
    }

    #[test]
    fn test_lexicon_falls_back_to_rotation_without_hits() {
        let segmenter = EmotionSegmenter::with_lexicon(EmotionLexicon::new());
        let segments = segmenter.segment(
            "The accountant reviewed the quarterly report.",
            &moods(&["calm"]),
        );
        assert_eq!(segments[0].emotion, Emotion::Calm);
        assert!((segments[0].confidence - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_every_segment_has_a_style() {
        let segmenter = EmotionSegmenter::new();
        let text = "(brooding) The fog refused to lift that morning. Nobody spoke on the pier.";
        for seg in segmenter.segment(text, &moods(&["neutral"])) {
            assert!(!seg.voice_style.as_str().is_empty());
        }
    }
}
