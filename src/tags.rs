//! SEO keyword, topic tag and entity extraction, plus per-platform hashtags.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::lexicon::{CONCEPT_WORDS, HOT_TOPIC_TAGS, KNOWN_ENTITIES, SEO_KEYWORDS};
use crate::{char_len, dedup_preserving, non_blank, take_chars, EngineError, Platform};

const MAX_SEO: usize = 15;
const MAX_TOPICS: usize = 10;
const MAX_ENTITIES: usize = 10;
const MAX_PHRASES: usize = 10;
const MAX_HASHTAGS: usize = 8;
const DESCRIPTION_CHARS: usize = 100;

static BOOK_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("《([^》]+)》").expect("BOOK_TITLE: compile-time constant"));
static ASCII_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("ASCII_QUOTE: compile-time constant"));
static CJK_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("“([^”]+)”").expect("CJK_QUOTE: compile-time constant"));

#[derive(Debug, Clone, Copy)]
pub struct ExtractionFlags {
    pub seo: bool,
    pub topics: bool,
    pub entities: bool,
}

impl Default for ExtractionFlags {
    fn default() -> Self {
        Self {
            seo: true,
            topics: true,
            entities: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeoRecommendations {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TagExtractionResult {
    pub seo: Vec<String>,
    pub topics: Vec<String>,
    pub entities: Vec<String>,
    pub hashtags: BTreeMap<String, Vec<String>>,
    pub recommendations: SeoRecommendations,
}

pub fn extract_tags(
    content: Option<&str>,
    topic: Option<&str>,
    platform: Option<&str>,
    flags: ExtractionFlags,
) -> Result<TagExtractionResult, EngineError> {
    let content = non_blank(content);
    let topic = non_blank(topic);
    if content.is_none() && topic.is_none() {
        return Err(EngineError::invalid("content or topic is required"));
    }

    let text = format!("{} {}", topic.unwrap_or(""), content.unwrap_or(""));
    let mut result = TagExtractionResult::default();

    if flags.seo {
        result.seo = seo_keywords(&text);
    }
    if flags.topics {
        result.topics = topic_tags(&text);
    }
    if flags.entities {
        result.entities = entities(&text);
    }

    let combined: Vec<String> = result
        .seo
        .iter()
        .chain(result.topics.iter())
        .chain(result.entities.iter())
        .cloned()
        .collect();
    result.hashtags = platform_hashtags(&combined, platform.and_then(Platform::from_str));

    let subject = topic
        .map(str::to_string)
        .or_else(|| content.and_then(topic_from_content))
        .unwrap_or_default();
    result.recommendations = recommendations(&subject, &result.seo, content);

    Ok(result)
}

/// Lexicon hits (case-insensitive) followed by short punctuation-delimited phrases.
pub fn seo_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut keywords = Vec::new();

    for (_, words) in SEO_KEYWORDS.iter() {
        for word in words.iter() {
            if lowered.contains(&word.to_lowercase()) {
                keywords.push(word.to_string());
            }
        }
    }

    keywords.extend(phrases(&lowered, 2, 4).into_iter().take(MAX_PHRASES));

    let mut keywords = dedup_preserving(keywords);
    keywords.truncate(MAX_SEO);
    keywords
}

pub fn topic_tags(text: &str) -> Vec<String> {
    let tags = HOT_TOPIC_TAGS
        .iter()
        .chain(CONCEPT_WORDS.iter())
        .filter(|tag| text.contains(*tag))
        .map(|tag| tag.to_string())
        .collect();

    let mut tags = dedup_preserving(tags);
    tags.truncate(MAX_TOPICS);
    tags
}

pub fn entities(text: &str) -> Vec<String> {
    let mut found: Vec<String> = KNOWN_ENTITIES
        .iter()
        .filter(|entity| text.contains(*entity))
        .map(|entity| entity.to_string())
        .collect();

    for pattern in [&*BOOK_TITLE, &*ASCII_QUOTE, &*CJK_QUOTE] {
        found.extend(
            pattern
                .captures_iter(text)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string())),
        );
    }

    let mut found = dedup_preserving(found);
    found.truncate(MAX_ENTITIES);
    found
}

/// Hashtags for every platform, or only `platform` when one is given.
pub fn platform_hashtags(
    keywords: &[String],
    platform: Option<Platform>,
) -> BTreeMap<String, Vec<String>> {
    let targets: Vec<Platform> = match platform {
        Some(platform) => vec![platform],
        None => Platform::ALL.to_vec(),
    };

    targets
        .into_iter()
        .map(|platform| {
            let tags = keywords
                .iter()
                .take(MAX_HASHTAGS)
                .map(|keyword| platform.hashtag(keyword))
                .collect();
            (platform.id().to_string(), tags)
        })
        .collect()
}

pub fn recommendations(topic: &str, seo: &[String], content: Option<&str>) -> SeoRecommendations {
    let leading = seo.iter().take(3).cloned().collect::<Vec<_>>().join("、");
    let preview = match content {
        Some(content) => take_chars(content, 50),
        None => topic.to_string(),
    };
    let description = format!(
        "{}深度解析。本文将从{}等角度，{}...帮助你全面理解{}的核心要点。",
        topic, leading, preview, topic
    );

    SeoRecommendations {
        title: format!("{}：{}完整指南", topic, leading),
        description: format!("{}...", take_chars(&description, DESCRIPTION_CHARS)),
        keywords: seo.iter().take(MAX_HASHTAGS).cloned().collect::<Vec<_>>().join(", "),
    }
}

fn phrases(text: &str, min_len: usize, max_len: usize) -> Vec<String> {
    text.split(|c: char| matches!(c, '，' | '。' | '！' | '？') || c.is_whitespace())
        .filter(|segment| (min_len..=max_len).contains(&char_len(segment)))
        .map(str::to_string)
        .collect()
}

/// First 15 characters of the content once bracket and colon marks are stripped.
fn topic_from_content(content: &str) -> Option<String> {
    let cleaned: String = content
        .chars()
        .filter(|c| !matches!(c, '【' | '】' | '[' | ']' | '(' | ')' | '：' | ':'))
        .collect();
    let subject = take_chars(cleaned.trim(), 15);
    if subject.is_empty() {
        None
    } else {
        Some(subject)
    }
}
