use chrono::{Datelike, Local, Timelike, Weekday};
use serde::Serialize;

use crate::{clamp_score, Platform, GENERIC_BEST_HOURS};

const ANALYSIS_DEFAULT_HOURS: [u32; 4] = [7, 12, 18, 20];

/// The moment a post would go out, in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostingTime {
    pub hour: u32,
    pub weekday: Weekday,
}

impl PostingTime {
    pub fn new(hour: u32, weekday: Weekday) -> Self {
        Self {
            hour: hour.min(23),
            weekday,
        }
    }

    pub fn now() -> Self {
        let now = Local::now();
        Self::new(now.hour(), now.weekday())
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }
}

pub fn timing_score(platform: Option<Platform>, at: &PostingTime) -> u8 {
    let mut score = 50;
    let hour = at.hour as i64;

    match platform {
        Some(platform) => {
            let best = platform.best_hours();
            if best.contains(&at.hour) {
                score += 30;
            } else if best.iter().any(|&h| (h as i64 - hour).abs() <= 1) {
                score += 15;
            }
        }
        None => {
            if GENERIC_BEST_HOURS.contains(&at.hour) {
                score += 20;
            }
        }
    }

    if at.is_weekend() {
        score += 10;
    }

    clamp_score(score)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingAnalysis {
    pub current_hour: u32,
    pub is_best_time: bool,
    pub best_times: Vec<u32>,
    pub suggestion: String,
}

pub fn analyze_timing(platform: Option<Platform>, at: &PostingTime) -> TimingAnalysis {
    let best_times: Vec<u32> = platform
        .map(|p| p.best_hours().to_vec())
        .unwrap_or_else(|| ANALYSIS_DEFAULT_HOURS.to_vec());
    let is_best_time = best_times.contains(&at.hour);
    let suggestion = if is_best_time {
        "当前是较好的发布时间".to_string()
    } else {
        let hours: Vec<String> = best_times.iter().map(|h| h.to_string()).collect();
        format!("建议在 {} 点发布", hours.join("、"))
    };

    TimingAnalysis {
        current_hour: at.hour,
        is_best_time,
        best_times,
        suggestion,
    }
}
