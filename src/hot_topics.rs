//! Trending topics: the seeded catalog, domain filtering, relevance ranking
//! and turning a hot topic into a content idea.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::HotTopicsConfig;
use crate::lexicon::domain_keywords;
use crate::round_half_up;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    fn bonus(self) -> f64 {
        match self {
            Trend::Up => 20.0,
            Trend::Stable => 10.0,
            Trend::Down => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotTopic {
    pub id: String,
    pub title: String,
    pub platform: String,
    pub heat: u8,
    pub trend: Trend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTopic {
    #[serde(flatten)]
    pub topic: HotTopic,
    pub relevance_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicIdea {
    pub title: String,
    pub angle: String,
    pub outline: Vec<String>,
}

struct IdeaTemplate {
    title: &'static str,
    angle: &'static str,
    outline: [&'static str; 4],
}

const ECONOMICS_IDEAS: [IdeaTemplate; 2] = [
    IdeaTemplate {
        title: "{title}背后的经济逻辑",
        angle: "从经济学角度深度解读热点事件",
        outline: ["热点现象描述", "经济学原理分析", "实际案例佐证", "对普通人的启示"],
    },
    IdeaTemplate {
        title: "{title}，普通人如何抓住机会？",
        angle: "将热点与个人发展机会结合",
        outline: ["热点趋势分析", "机会点识别", "具体行动建议", "风险提示"],
    },
];

const PSYCHOLOGY_IDEAS: [IdeaTemplate; 2] = [
    IdeaTemplate {
        title: "{title}的心理机制",
        angle: "用心理学原理解读热点行为",
        outline: ["现象观察", "心理学概念解释", "实验/案例佐证", "应用建议"],
    },
    IdeaTemplate {
        title: "从{title}看认知偏差",
        angle: "揭示热点中的认知心理学",
        outline: ["热点事件回顾", "认知偏差分析", "如何避免类似偏差", "实用技巧"],
    },
];

const DEFAULT_IDEAS: [IdeaTemplate; 2] = [
    IdeaTemplate {
        title: "{title}的深层解读",
        angle: "深度分析热点背后的逻辑",
        outline: ["热点概述", "深度分析", "观点论证", "总结升华"],
    },
    IdeaTemplate {
        title: "{title}，你需要知道的3件事",
        angle: "用清单形式整理热点知识",
        outline: ["热点背景", "要点1：核心信息", "要点2：深度分析", "要点3：行动建议"],
    },
];

fn seeded(id: &str, title: &str, platform: &str, heat: u8, trend: Trend, category: &str) -> HotTopic {
    HotTopic {
        id: id.to_string(),
        title: title.to_string(),
        platform: platform.to_string(),
        heat,
        trend,
        category: Some(category.to_string()),
        url: None,
    }
}

/// The seeded trending list, hottest first.
pub fn builtin_catalog() -> Vec<HotTopic> {
    let mut topics = vec![
        seeded("weibo-1", "AI技术在教育领域的应用", "weibo", 98, Trend::Up, "科技"),
        seeded("weibo-2", "2024年最值得读的商业书籍", "weibo", 85, Trend::Stable, "商业"),
        seeded("weibo-3", "心理学解读：为什么总是拖延", "weibo", 92, Trend::Up, "心理"),
        seeded("weibo-4", "数字经济下的新职业机会", "weibo", 78, Trend::Down, "商业"),
        seeded("zhihu-1", "如何系统学习经济学？", "zhihu", 88, Trend::Stable, "经济学"),
        seeded("zhihu-2", "人工智能会取代哪些职业？", "zhihu", 95, Trend::Up, "科技"),
        seeded("zhihu-3", "认知偏差如何影响投资决策", "zhihu", 72, Trend::Up, "心理"),
        seeded("douyin-1", "一分钟看懂区块链技术", "douyin", 90, Trend::Up, "科技"),
        seeded("douyin-2", "普通人如何开始内容创业", "douyin", 86, Trend::Stable, "商业"),
        seeded("douyin-3", "30天养成阅读习惯的秘诀", "douyin", 82, Trend::Down, "教育"),
    ];
    topics.sort_by(|a, b| b.heat.cmp(&a.heat));
    topics
}

/// Replace the seeded list with topics from a JSON array on disk.
pub async fn load_catalog(path: &Path) -> Result<Vec<HotTopic>, String> {
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| format!("failed to read hot topics: {}", err))?;
    let mut topics: Vec<HotTopic> = serde_json::from_str(&data)
        .map_err(|err| format!("failed to parse hot topics: {}", err))?;
    for topic in topics.iter_mut() {
        topic.heat = topic.heat.min(100);
    }
    topics.sort_by(|a, b| b.heat.cmp(&a.heat));
    Ok(topics)
}

/// The configured catalog file when one is set, the seeded list otherwise.
pub async fn catalog_from_config(config: &HotTopicsConfig) -> Result<Vec<HotTopic>, String> {
    match config.catalog_path.as_deref() {
        Some(path) => load_catalog(Path::new(path)).await,
        None => Ok(builtin_catalog()),
    }
}

fn category_matches(topic: &HotTopic, domains: &[String]) -> bool {
    topic
        .category
        .as_deref()
        .map(|category| domains.iter().any(|domain| domain == category))
        .unwrap_or(false)
}

/// (matched, total) keyword counts over every requested domain.
fn keyword_hits(topic: &HotTopic, domains: &[String]) -> (usize, usize) {
    let title = topic.title.to_lowercase();
    let keywords: Vec<&str> = domains
        .iter()
        .flat_map(|domain| domain_keywords(domain).iter().copied())
        .collect();
    let matched = keywords
        .iter()
        .filter(|keyword| title.contains(&keyword.to_lowercase()))
        .count();
    (matched, keywords.len())
}

/// Keep topics whose category is a requested domain or whose title mentions
/// one of its keywords. No domains keeps everything.
pub fn filter_by_domains(topics: &[HotTopic], domains: &[String]) -> Vec<HotTopic> {
    if domains.is_empty() {
        return topics.to_vec();
    }
    topics
        .iter()
        .filter(|topic| category_matches(topic, domains) || keyword_hits(topic, domains).0 > 0)
        .cloned()
        .collect()
}

pub fn relevance_score(topic: &HotTopic, domains: &[String]) -> u8 {
    let popularity = (topic.heat.min(100) as f64 / 100.0) * 50.0;

    let domain_match = if category_matches(topic, domains) {
        30.0
    } else {
        let (matched, total) = keyword_hits(topic, domains);
        (matched as f64 / total.max(1) as f64) * 30.0
    };

    let score = round_half_up(popularity + domain_match + topic.trend.bonus());
    score.clamp(0, 100) as u8
}

/// Annotate every topic with its relevance and sort best first. Ties keep
/// input order.
pub fn rank_topics(topics: Vec<HotTopic>, domains: &[String]) -> Vec<RankedTopic> {
    let mut ranked: Vec<RankedTopic> = topics
        .into_iter()
        .map(|topic| {
            let relevance_score = relevance_score(&topic, domains);
            RankedTopic {
                topic,
                relevance_score,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    ranked
}

/// Pick one idea template for the domain (or the default set) using `rng`.
pub fn generate_topic_from_hot<R: Rng>(
    topic: &HotTopic,
    domain: &str,
    rng: &mut R,
) -> TopicIdea {
    let templates: &[IdeaTemplate] = match domain {
        "经济学" => &ECONOMICS_IDEAS,
        "心理学" => &PSYCHOLOGY_IDEAS,
        _ => &DEFAULT_IDEAS,
    };
    let template = &templates[rng.gen_range(0..templates.len())];

    TopicIdea {
        title: template.title.replace("{title}", &topic.title),
        angle: template.angle.to_string(),
        outline: template.outline.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_by_heat() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog[0].id, "weibo-1");
        assert!(catalog.windows(2).all(|w| w[0].heat >= w[1].heat));
    }

    #[test]
    fn keyword_share_is_proportional() {
        let topic = seeded("t", "人工智能与大数据", "zhihu", 0, Trend::Down, "其他");
        // 2 of 10 科技 keywords: 0.2 * 30 = 6.
        assert_eq!(relevance_score(&topic, &["科技".to_string()]), 6);
    }

    #[test]
    fn unknown_domains_guard_division() {
        let topic = seeded("t", "标题", "zhihu", 40, Trend::Stable, "其他");
        assert_eq!(relevance_score(&topic, &["烹饪".to_string()]), 30);
        assert_eq!(relevance_score(&topic, &[]), 30);
    }
}
