use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::char_len;
use crate::lexicon;
use crate::scoring::timing::TimingAnalysis;

static KEYWORD_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new("(?:关于|聊聊|谈谈|说说)([^，。]+)").expect("topic pattern: compile-time constant"),
        Regex::new("(?:如何|怎么|为什么)([^，。]+)").expect("question pattern: compile-time constant"),
        Regex::new(r"([0-9]+个[^，。]+)").expect("count pattern: compile-time constant"),
        Regex::new("([^，。]+)(?:技巧|方法|攻略|指南)").expect("method pattern: compile-time constant"),
    ]
});

const MAX_TITLE_KEYWORDS: usize = 3;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleAnalysis {
    pub length: usize,
    pub has_number: bool,
    pub has_question: bool,
    pub has_emotion: bool,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub word_count: usize,
    pub paragraph_count: usize,
    pub has_structure: bool,
    pub has_list: bool,
    #[serde(rename = "hasCTA")]
    pub has_cta: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub title_analysis: TitleAnalysis,
    pub content_analysis: ContentAnalysis,
    pub timing_analysis: TimingAnalysis,
}

pub fn analyze_title(title: Option<&str>) -> TitleAnalysis {
    let Some(title) = title else {
        return TitleAnalysis::default();
    };

    TitleAnalysis {
        length: char_len(title),
        has_number: lexicon::has_digit(title),
        has_question: lexicon::has_title_question(title),
        has_emotion: lexicon::has_emotion_word_extended(title),
        keywords: extract_title_keywords(title),
    }
}

pub fn analyze_content(content: Option<&str>) -> ContentAnalysis {
    let Some(content) = content else {
        return ContentAnalysis::default();
    };

    ContentAnalysis {
        word_count: char_len(content),
        paragraph_count: content.split('\n').count(),
        has_structure: lexicon::has_structure_marker(content),
        has_list: lexicon::has_list_marker(content),
        has_cta: lexicon::has_call_to_action(content),
    }
}

/// First capture of each keyword pattern, in pattern order.
pub fn extract_title_keywords(title: &str) -> Vec<String> {
    KEYWORD_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.captures(title))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .take(MAX_TITLE_KEYWORDS)
        .collect()
}
