use serde::Serialize;

use crate::config::PredictionConfig;
use crate::history::UserHistory;
use crate::scoring::ScoreBreakdown;
use crate::{round_half_up, Platform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Potential {
    Low,
    Medium,
    High,
    Viral,
}

impl Potential {
    pub fn from_overall(overall: u8) -> Self {
        if overall >= 85 {
            Potential::Viral
        } else if overall >= 70 {
            Potential::High
        } else if overall >= 55 {
            Potential::Medium
        } else {
            Potential::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Potential::Low => "low",
            Potential::Medium => "medium",
            Potential::High => "high",
            Potential::Viral => "viral",
        }
    }
}

/// A widened estimate. `unit` is `"k"` when the bounds are in thousands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateRange {
    pub min: i64,
    pub max: i64,
    pub unit: String,
}

impl EstimateRange {
    pub fn display(&self) -> String {
        format!("{}{}-{}{}", self.min, self.unit, self.max, self.unit)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePrediction {
    pub estimated_views: EstimateRange,
    pub estimated_likes: EstimateRange,
    pub estimated_shares: EstimateRange,
    pub confidence: u8,
    pub potential: Potential,
}

pub fn predict(
    scores: &ScoreBreakdown,
    platform: Option<Platform>,
    history: Option<&UserHistory>,
    config: &PredictionConfig,
) -> PerformancePrediction {
    let base_views = scores.overall as f64 * config.views_per_point;
    let user_multiplier = match history {
        Some(history) if config.rating_baseline > 0.0 => history.avg_rating / config.rating_baseline,
        _ => 1.0,
    };
    let platform_multiplier = platform.map(Platform::reach_multiplier).unwrap_or(1.0);

    let views = round_half_up(base_views * user_multiplier * platform_multiplier).max(0);
    let likes = round_half_up(views as f64 * (scores.attractiveness as f64 / 100.0) * config.like_rate);
    let shares = round_half_up(views as f64 * (scores.shareability as f64 / 100.0) * config.share_rate);

    let history_bonus = if history.is_some() { 20 } else { 0 };
    let score_bonus = if scores.overall > 70 { 20 } else { 10 };
    let confidence = (50 + history_bonus + score_bonus).min(95) as u8;

    PerformancePrediction {
        estimated_views: widen(views, config),
        estimated_likes: widen(likes, config),
        estimated_shares: widen(shares, config),
        confidence,
        potential: Potential::from_overall(scores.overall),
    }
}

fn widen(value: i64, config: &PredictionConfig) -> EstimateRange {
    let value = value as f64;
    if value >= config.thousand_threshold as f64 {
        EstimateRange {
            min: round_half_up(value * config.range_low / 1000.0),
            max: round_half_up(value * config.range_high / 1000.0),
            unit: "k".to_string(),
        }
    } else {
        EstimateRange {
            min: round_half_up(value * config.range_low),
            max: round_half_up(value * config.range_high),
            unit: String::new(),
        }
    }
}
