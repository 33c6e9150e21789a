use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::HistoryConfig;

/// Number of most recent completed tasks that count towards a summary.
const RECENT_TASK_LIMIT: usize = 20;
const DEFAULT_RATING: f64 = 3.5;

/// Summary of a creator's track record, consumed by the performance predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHistory {
    pub avg_rating: f64,
    pub total_completed: usize,
    pub domains: Vec<String>,
    pub consistency: u8,
}

/// A creator with no recorded work yet.
impl Default for UserHistory {
    fn default() -> Self {
        Self {
            avg_rating: DEFAULT_RATING,
            total_completed: 0,
            domains: Vec::new(),
            consistency: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTask {
    pub domain: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRecord {
    pub user_id: String,
    #[serde(default)]
    pub completed_tasks: Vec<CompletedTask>,
    /// Script ratings on a 1-5 scale.
    #[serde(default)]
    pub ratings: Vec<u8>,
}

impl CreatorRecord {
    pub fn summarize(&self, now: DateTime<Utc>) -> UserHistory {
        let mut recent: Vec<&CompletedTask> = self.completed_tasks.iter().collect();
        recent.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        recent.truncate(RECENT_TASK_LIMIT);

        let avg_rating = if self.ratings.is_empty() {
            DEFAULT_RATING
        } else {
            self.ratings.iter().map(|&r| r as f64).sum::<f64>() / self.ratings.len() as f64
        };

        UserHistory {
            avg_rating,
            total_completed: recent.len(),
            domains: recent.iter().map(|task| task.domain.clone()).collect(),
            consistency: consistency(&recent, now),
        }
    }
}

fn consistency(tasks: &[&CompletedTask], now: DateTime<Utc>) -> u8 {
    if tasks.len() < 3 {
        return 50;
    }
    let week_ago = now - Duration::days(7);
    let recent = tasks
        .iter()
        .filter(|task| task.completed_at >= week_ago)
        .count();
    (50 + recent * 10).min(100) as u8
}

/// Read-only view over creator records stored as a JSON array.
pub struct HistoryStore {
    records: HashMap<String, CreatorRecord>,
}

impl HistoryStore {
    pub async fn load(path: PathBuf) -> Result<Self, String> {
        let records: Vec<CreatorRecord> = if path.exists() {
            let data = tokio::fs::read_to_string(&path)
                .await
                .map_err(|err| format!("failed to read history: {}", err))?;
            if data.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&data)
                    .map_err(|err| format!("failed to parse history: {}", err))?
            }
        } else {
            Vec::new()
        };

        Ok(Self::from_records(records))
    }

    /// `None` when no history file is configured.
    pub async fn from_config(config: &HistoryConfig) -> Result<Option<Self>, String> {
        match config.path.as_deref() {
            Some(path) => Ok(Some(Self::load(PathBuf::from(path)).await?)),
            None => Ok(None),
        }
    }

    pub fn from_records(records: Vec<CreatorRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.user_id.clone(), record))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unknown users get [`UserHistory::default`].
    pub fn history(&self, user_id: &str, now: DateTime<Utc>) -> UserHistory {
        self.records
            .get(user_id)
            .map(|record| record.summarize(now))
            .unwrap_or_default()
    }
}

/// History for a request that names a user. A missing store behaves like an
/// empty one.
pub fn lookup_history(
    store: Option<&HistoryStore>,
    user_id: Option<&str>,
    now: DateTime<Utc>,
) -> Option<UserHistory> {
    let user_id = user_id?;
    Some(
        store
            .map(|store| store.history(user_id, now))
            .unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(days_ago: i64, now: DateTime<Utc>) -> CompletedTask {
        CompletedTask {
            domain: "心理学".to_string(),
            completed_at: now - Duration::days(days_ago),
        }
    }

    #[test]
    fn summary_defaults_rating_without_scores() {
        let now = Utc::now();
        let record = CreatorRecord {
            user_id: "u1".to_string(),
            completed_tasks: vec![task(1, now)],
            ratings: Vec::new(),
        };
        let history = record.summarize(now);
        assert!((history.avg_rating - 3.5).abs() < 1e-9);
        assert_eq!(history.total_completed, 1);
        assert_eq!(history.consistency, 50);
    }

    #[test]
    fn consistency_rewards_recent_work() {
        let now = Utc::now();
        let record = CreatorRecord {
            user_id: "u2".to_string(),
            completed_tasks: vec![task(1, now), task(2, now), task(3, now), task(30, now)],
            ratings: vec![4, 5],
        };
        let history = record.summarize(now);
        assert_eq!(history.consistency, 80);
        assert!((history.avg_rating - 4.5).abs() < 1e-9);
    }

    #[test]
    fn only_recent_tasks_count() {
        let now = Utc::now();
        let tasks = (0..25).map(|day| task(day, now)).collect();
        let record = CreatorRecord {
            user_id: "u3".to_string(),
            completed_tasks: tasks,
            ratings: vec![3],
        };
        assert_eq!(record.summarize(now).total_completed, 20);
    }

    #[test]
    fn store_looks_up_by_user() {
        let store = HistoryStore::from_records(vec![CreatorRecord {
            user_id: "creator".to_string(),
            completed_tasks: Vec::new(),
            ratings: vec![2],
        }]);
        let now = Utc::now();
        assert!((store.history("creator", now).avg_rating - 2.0).abs() < 1e-9);
        assert_eq!(store.history("missing", now), UserHistory::default());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn named_user_always_gets_history() {
        let now = Utc::now();
        assert_eq!(
            lookup_history(None, Some("new-user"), now),
            Some(UserHistory::default())
        );
        assert_eq!(lookup_history(None, None, now), None);

        let store = HistoryStore::from_records(Vec::new());
        let history = lookup_history(Some(&store), Some("new-user"), now).expect("named user");
        assert!((history.avg_rating - 3.5).abs() < 1e-9);
        assert_eq!(history.total_completed, 0);
        assert_eq!(history.consistency, 50);
    }

    #[tokio::test]
    async fn missing_file_loads_empty_store() {
        let store = HistoryStore::load(PathBuf::from("does/not/exist.json"))
            .await
            .expect("missing file is not an error");
        assert!(store.is_empty());
    }
}
