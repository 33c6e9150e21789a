pub mod config;
pub mod error;
pub mod history;
pub mod hot_topics;
pub mod lexicon;
pub mod scoring;
pub mod tags;
pub mod titles;

use serde::Serialize;

pub use error::EngineError;
pub use history::{lookup_history, CompletedTask, CreatorRecord, HistoryStore, UserHistory};
pub use hot_topics::{
    builtin_catalog, filter_by_domains, generate_topic_from_hot, rank_topics, relevance_score,
    HotTopic, RankedTopic, TopicIdea, Trend,
};
pub use scoring::{
    predict_performance, score_content, ContentInput, PerformancePrediction, PerformanceReport,
    PostingTime, Potential, ScoreBreakdown, Suggestion,
};
pub use tags::{extract_tags, ExtractionFlags, TagExtractionResult};
pub use titles::{generate_titles, rank_titles, score_title, TitleVariant};

/// Publishing platforms with their own timing, reach and hashtag conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Douyin,
    Xiaohongshu,
    Bilibili,
    Wechat,
    Zhihu,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Douyin,
        Platform::Xiaohongshu,
        Platform::Bilibili,
        Platform::Wechat,
        Platform::Zhihu,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "douyin" => Some(Platform::Douyin),
            "xiaohongshu" => Some(Platform::Xiaohongshu),
            "bilibili" => Some(Platform::Bilibili),
            "wechat" => Some(Platform::Wechat),
            "zhihu" => Some(Platform::Zhihu),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Platform::Douyin => "douyin",
            Platform::Xiaohongshu => "xiaohongshu",
            Platform::Bilibili => "bilibili",
            Platform::Wechat => "wechat",
            Platform::Zhihu => "zhihu",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Douyin => "抖音",
            Platform::Xiaohongshu => "小红书",
            Platform::Bilibili => "B站",
            Platform::Wechat => "微信公众号",
            Platform::Zhihu => "知乎",
        }
    }

    /// Local hours at which posts on this platform perform best.
    pub fn best_hours(self) -> &'static [u32] {
        match self {
            Platform::Douyin => &[7, 12, 18, 21, 22],
            Platform::Xiaohongshu => &[7, 12, 20, 22],
            Platform::Bilibili => &[12, 18, 20, 21, 22],
            Platform::Wechat => &[7, 12, 18, 21],
            Platform::Zhihu => &[12, 20, 21, 22],
        }
    }

    pub fn reach_multiplier(self) -> f64 {
        match self {
            Platform::Douyin => 1.5,
            Platform::Xiaohongshu => 1.3,
            Platform::Bilibili => 1.2,
            Platform::Wechat => 1.0,
            Platform::Zhihu => 0.8,
        }
    }

    pub fn hashtag(self, keyword: &str) -> String {
        match self {
            Platform::Douyin => format!("#{}", keyword),
            Platform::Xiaohongshu | Platform::Bilibili => format!("#{}#", keyword),
            Platform::Wechat | Platform::Zhihu => keyword.to_string(),
        }
    }
}

/// Best hours used when the platform is unknown.
pub const GENERIC_BEST_HOURS: [u32; 5] = [7, 12, 18, 20, 21];

/// Length in characters, which is how every length threshold is expressed.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// First `max` characters of `text`.
pub fn take_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Clamp an accumulated score into `[0, 100]`.
pub fn clamp_score(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

/// Round half up, the way every weighted score in the engine is rounded.
pub fn round_half_up(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    (value + 0.5).floor() as i64
}

/// Drop repeated entries, keeping first occurrences in order.
pub fn dedup_preserving(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Treat empty or whitespace-only text as absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
