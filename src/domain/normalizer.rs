//! TTS 文本清洗
//!
//! 合成前对文本做确定性、幂等的规整：剔除括号与强调标记、
//! 改写结巴、展开缩写、收敛省略号、重建句首大写、压缩空白、
//! 滤掉标点白名单以外的字符。
//!
//! 幂等性是对外契约：`normalize(normalize(x)) == normalize(x)`。

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// 各类括号内容（含括号本身，整体剔除）
static PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());
static BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").unwrap());
static BRACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());
static ANGLES: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// 强调标记（保留内部文本）
static STAR_EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*+([^*]*)\*+").unwrap());
static UNDERSCORE_EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+([^_]*)_+").unwrap());
static BACKTICK_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`+([^`]*)`+").unwrap());

/// 结巴形式：单字母-词，如 "w-who"
static STUTTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Za-z])-([A-Za-z]\w*)").unwrap());

/// 连续句点 / Unicode 省略号
static DOT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());
static ELLIPSIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"…+").unwrap());

/// 空白压缩
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// 缩写展开表（按书写形式匹配，另派生全小写与全大写两种变体）
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("Dr.", "Doctor"),
    ("Mr.", "Mister"),
    ("Mrs.", "Missus"),
    ("Ms.", "Miss"),
    ("Prof.", "Professor"),
    ("St.", "Saint"),
    ("Ave.", "Avenue"),
    ("Rd.", "Road"),
    ("Jr.", "Junior"),
    ("Sr.", "Senior"),
    ("Inc.", "Incorporated"),
    ("Ltd.", "Limited"),
    ("Corp.", "Corporation"),
    ("Co.", "Company"),
    ("etc.", "etcetera"),
    ("vs.", "versus"),
    ("e.g.", "for example"),
    ("i.e.", "that is"),
    ("A.M.", "A M"),
    ("P.M.", "P M"),
];

/// 单字母到读音的固定映射（结巴改写用）
fn letter_sound(letter: char) -> String {
    match letter.to_ascii_lowercase() {
        'w' => "wuh",
        'b' => "buh",
        'c' => "cuh",
        'd' => "duh",
        'f' => "fuh",
        'g' => "guh",
        'h' => "huh",
        'j' => "juh",
        'k' => "kuh",
        'l' => "luh",
        'm' => "muh",
        'n' => "nuh",
        'p' => "puh",
        'r' => "ruh",
        's' => "suh",
        't' => "tuh",
        'v' => "vuh",
        'x' => "xuh",
        'z' => "zuh",
        other => return other.to_string(),
    }
    .to_string()
}

/// 清洗文本供 TTS 朗读
pub fn normalize(text: &str) -> String {
    // 1. 剔除所有括号类内容
    let text = PARENS.replace_all(text, "");
    let text = BRACKETS.replace_all(&text, "");
    let text = BRACES.replace_all(&text, "");
    let text = ANGLES.replace_all(&text, "");

    // 2. 剥掉强调标记
    let text = STAR_EMPHASIS.replace_all(&text, "$1");
    let text = UNDERSCORE_EMPHASIS.replace_all(&text, "$1");
    let text = BACKTICK_CODE.replace_all(&text, "$1");

    // 3. 结巴改写："w-who" -> "wuh who"
    let text = STUTTER.replace_all(&text, |caps: &Captures| {
        let letter = caps[1].chars().next().unwrap();
        format!("{} {}", letter_sound(letter), &caps[2])
    });

    // 4. 展开缩写（书写形式、全小写、全大写各替换一遍）
    let mut text = text.into_owned();
    for (abbrev, full) in ABBREVIATIONS {
        text = text.replace(abbrev, full);
        text = text.replace(&abbrev.to_lowercase(), &full.to_lowercase());
        text = text.replace(&abbrev.to_uppercase(), &full.to_uppercase());
    }

    // 5. 省略号与连续句点收敛为单个句点
    let text = DOT_RUNS.replace_all(&text, ".");
    let text = ELLIPSIS.replace_all(&text, ".");

    // 6. 按句点重建：句首大写、". " 连接、补句末句点
    let fragments: Vec<String> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(capitalize_first)
        .collect();
    let mut text = fragments.join(". ");
    if !text.is_empty() && !text.ends_with('.') {
        text.push('.');
    }

    // 7. 白名单过滤：字母 / 数字 / 空白 / .,!?-
    let text: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || ".,!?-".contains(*c))
        .collect();

    // 8. 压缩空白（放在过滤之后，被剔除字符留下的空隙也要收拢）
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}

fn capitalize_first(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "(excited) The d-door creaked... Dr. Smith *gasped* [loudly]!",
            "Mrs. Jones whispered… w-wait, {aside} <note> the A.M. train!",
            "Cost: 5 dollars & 10% #tax; fine?",
            "Already clean text. With two sentences.",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_bracket_content_is_stripped() {
        let out = normalize("The keeper (muttering) checked [the log] {twice} <quietly> today.");
        assert!(!out.contains("muttering"));
        assert!(!out.contains("the log"));
        assert!(!out.contains("twice"));
        assert!(!out.contains("quietly"));
        assert!(out.contains("The keeper"));
    }

    #[test]
    fn test_emphasis_markers_keep_inner_text() {
        let out = normalize("It was *very* important to _remain_ `calm` throughout.");
        assert!(out.contains("very important"));
        assert!(out.contains("remain"));
        assert!(out.contains("calm"));
        assert!(!out.contains('*'));
        assert!(!out.contains('_'));
        assert!(!out.contains('`'));
    }

    #[test]
    fn test_stutter_rewrite() {
        let out = normalize("He asked w-who is there");
        assert!(out.contains("wuh who is there"), "got {:?}", out);
    }

    #[test]
    fn test_stutter_unmapped_letter_passes_through() {
        let out = normalize("The a-apple cart tipped over");
        assert!(out.contains("a apple"), "got {:?}", out);
    }

    #[test]
    fn test_abbreviation_expansion() {
        let out = normalize("Dr. Smith met Mrs. Jones.");
        assert!(out.contains("Doctor Smith met Missus Jones."), "got {:?}", out);
    }

    #[test]
    fn test_abbreviation_case_variants() {
        let out = normalize("the dr. nodded at MR. GRAY");
        assert!(out.contains("doctor"), "got {:?}", out);
        assert!(out.contains("MISTER GRAY"), "got {:?}", out);
    }

    #[test]
    fn test_ellipsis_collapse() {
        let out = normalize("He waited... and waited…… then left.");
        assert!(!out.contains(".."));
        assert!(!out.contains('…'));
        assert!(out.contains("He waited. And waited. Then left."), "got {:?}", out);
    }

    #[test]
    fn test_sentences_are_recapitalized() {
        let out = normalize("first part. second part. third part.");
        assert_eq!(out, "First part. Second part. Third part.");
    }

    #[test]
    fn test_whitespace_collapse_and_trailing_period() {
        let out = normalize("  spaced   out    words  ");
        assert_eq!(out, "Spaced out words.");
    }

    #[test]
    fn test_disallowed_characters_are_removed() {
        let out = normalize("Cost: 5 dollars & 10% #tax @noon; fine?");
        assert!(!out.contains(':'));
        assert!(!out.contains('&'));
        assert!(!out.contains('%'));
        assert!(!out.contains('#'));
        assert!(!out.contains('@'));
        assert!(!out.contains(';'));
        assert!(out.contains('?'));
    }

    #[test]
    fn test_question_and_exclamation_survive() {
        let out = normalize("Who goes there! Answer me? Now.");
        assert!(out.contains('!'));
        assert!(out.contains('?'));
    }
}
