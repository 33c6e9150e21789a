use serde::{Deserialize, Serialize};
use creator_engine::{
    ContentInput, EngineError, ExtractionFlags, HotTopic, Platform, RankedTopic, TitleVariant,
    TopicIdea,
};

#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub error: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub platform: Option<String>,
    pub user_id: Option<String>,
}

impl PredictRequest {
    pub fn into_input(self) -> (ContentInput, Option<String>) {
        let input = ContentInput {
            title: self.title,
            content: self.content,
            platform: self.platform.as_deref().and_then(Platform::from_str),
        };
        let user_id = self.user_id.filter(|id| !id.trim().is_empty());
        (input, user_id)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleRequest {
    pub topic: Option<String>,
    pub content: Option<String>,
    pub target_platform: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct TitleResponse {
    pub topic: String,
    pub titles: Vec<TitleVariant>,
    pub total: usize,
    pub platforms: Vec<String>,
}

impl TitleResponse {
    pub fn new(topic: String, titles: Vec<TitleVariant>, platforms: Vec<String>) -> Self {
        let platforms = if platforms.is_empty() {
            vec!["通用".to_string()]
        } else {
            platforms
        };
        Self {
            topic,
            total: titles.len(),
            titles,
            platforms,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRequest {
    pub content: Option<String>,
    pub topic: Option<String>,
    pub platform: Option<String>,
    #[serde(rename = "extractSEO")]
    pub extract_seo: Option<bool>,
    pub extract_topics: Option<bool>,
    pub extract_entities: Option<bool>,
}

impl TagRequest {
    pub fn flags(&self) -> ExtractionFlags {
        ExtractionFlags {
            seo: self.extract_seo.unwrap_or(true),
            topics: self.extract_topics.unwrap_or(true),
            entities: self.extract_entities.unwrap_or(true),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HotTopicsQuery {
    pub domains: Option<String>,
}

impl HotTopicsQuery {
    pub fn domains(&self) -> Vec<String> {
        parse_domains(self.domains.as_deref())
    }
}

pub fn parse_domains(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|domain| !domain.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotTopicsResponse {
    pub topics: Vec<RankedTopic>,
    pub total: usize,
    pub domains: Vec<String>,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeaRequest {
    pub hot_topic_id: Option<String>,
    pub domain: Option<String>,
    pub seed: Option<u64>,
}

impl GenerateIdeaRequest {
    pub fn validate(self) -> Result<(String, String, Option<u64>), EngineError> {
        let id = self.hot_topic_id.filter(|v| !v.trim().is_empty());
        let domain = self.domain.filter(|v| !v.trim().is_empty());
        match (id, domain) {
            (Some(id), Some(domain)) => Ok((id, domain, self.seed)),
            _ => Err(EngineError::invalid("hotTopicId and domain are required")),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeaResponse {
    pub original_topic: HotTopic,
    pub generated_topic: TopicIdea,
    pub domain: String,
}
