use crate::error::CareerResult;
use serde::{Deserialize, Serialize};

/// Coefficients driving the in-career reputation score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationConfig {
    /// Starting reputation score [0, 100] for a fresh career.
    pub initial_score: i32,
    /// Points per unit of (win% - 0.5). A 14-3 season is worth about +8.
    pub win_pct_weight: f64,
    /// Bonus for reaching the playoffs.
    pub playoff_bonus: i32,
    /// Bonus for a division title.
    pub division_bonus: i32,
    /// Bonus for a conference title.
    pub conference_bonus: i32,
    /// Bonus for a championship.
    pub championship_bonus: i32,
    /// Firing penalties by severity.
    pub firing_penalty_mild: i32,
    pub firing_penalty_standard: i32,
    pub firing_penalty_severe: i32,
    /// Decay for each year spent out of work.
    pub unemployment_decay: i32,
    /// Season drops at or beyond this size are logged as warnings.
    pub warn_drop_threshold: i32,
}

impl Default for ReputationConfig {
    fn default() -> Self {
        Self {
            initial_score: 50,
            win_pct_weight: 20.0,
            playoff_bonus: 2,
            division_bonus: 2,
            conference_bonus: 3,
            championship_bonus: 8,
            firing_penalty_mild: 5,
            firing_penalty_standard: 10,
            firing_penalty_severe: 15,
            unemployment_decay: 3,
            warn_drop_threshold: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerConfig {
    #[serde(default)]
    pub reputation: ReputationConfig,
}

impl CareerConfig {
    /// Load from a JSON file. Missing sections fall back to defaults.
    pub fn load(path: &str) -> CareerResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: CareerConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CareerError;

    #[test]
    fn empty_json_uses_default_reputation() {
        let config: CareerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.reputation, ReputationConfig::default());
    }

    #[test]
    fn load_reports_missing_path() {
        let err = CareerConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CareerError::Other(_)));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn load_reports_malformed_file() {
        let path = std::env::temp_dir().join(format!("career-config-{}.json", std::process::id()));
        std::fs::write(&path, "{ \"reputation\": ").unwrap();
        let path = path.to_string_lossy().to_string();

        let err = CareerConfig::load(&path).unwrap_err();
        assert!(matches!(err, CareerError::Other(_)));
        assert!(err.to_string().starts_with("Cannot parse"));
        let _ = std::fs::remove_file(&path);
    }
}
