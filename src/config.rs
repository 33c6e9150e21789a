use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Weights of the five sub-scores in `overall`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub attractiveness: f64,
    pub readability: f64,
    pub shareability: f64,
    pub completeness: f64,
    pub timing: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            attractiveness: 0.25,
            readability: 0.20,
            shareability: 0.25,
            completeness: 0.20,
            timing: 0.10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    pub views_per_point: f64,
    pub rating_baseline: f64,
    pub like_rate: f64,
    pub share_rate: f64,
    pub range_low: f64,
    pub range_high: f64,
    pub thousand_threshold: i64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            views_per_point: 100.0,
            rating_baseline: 3.5,
            like_rate: 0.05,
            share_rate: 0.02,
            range_low: 0.7,
            range_high: 1.3,
            thousand_threshold: 10_000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotTopicsConfig {
    pub catalog_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default)]
    pub prediction: PredictionConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub hot_topics: HotTopicsConfig,
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                EngineConfig::default()
            }
        } else {
            EngineConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|err| format!("failed to create config dir: {}", err))?;
            }
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var("HISTORY_PATH") {
            if !path.trim().is_empty() {
                self.history.path = Some(path);
            }
        }
        if let Ok(path) = env::var("HOT_TOPICS_PATH") {
            if !path.trim().is_empty() {
                self.hot_topics.catalog_path = Some(path);
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("ENGINE_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/engine.toml")))
}
