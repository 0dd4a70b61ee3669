//! Run configuration
//!
//! Serde-backed settings for a risk evaluation, typically loaded from a
//! YAML or JSON file: which method to run, at what confidence level and
//! horizon, and the Monte Carlo / rolling-window knobs.

use crate::dispatch::{RiskMethod, RiskParams};
use crate::error::{Result, RiskError};
use serde::{Deserialize, Serialize};

fn default_confidence_level() -> f64 {
    0.95
}

fn default_time_horizon() -> u32 {
    1
}

/// Complete configuration for a risk evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Calculation method to run
    pub method: RiskMethod,

    /// Confidence level, strictly between 0 and 1
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,

    /// Time horizon in periods
    #[serde(default = "default_time_horizon")]
    pub time_horizon: u32,

    /// Number of Monte Carlo simulations; required when method is MonteCarlo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_simulations: Option<usize>,

    /// Random seed for reproducible Monte Carlo runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,

    /// Optional rolling-window size; when set, evaluation slides over the
    /// series instead of using it whole
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_window: Option<usize>,
}

impl RiskConfig {
    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: RiskConfig = serde_yaml::from_str(yaml)
            .map_err(|e| RiskError::Config(format!("Failed to parse YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RiskConfig = serde_json::from_str(json)
            .map_err(|e| RiskError::Config(format!("Failed to parse JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for internally inconsistent settings
    ///
    /// The same checks the dispatcher performs per call, applied once at
    /// load time so bad files fail before any data is fetched.
    pub fn validate(&self) -> Result<()> {
        if self.confidence_level <= 0.0 || self.confidence_level >= 1.0 {
            return Err(RiskError::InvalidConfidenceLevel(self.confidence_level));
        }

        if self.time_horizon == 0 {
            return Err(RiskError::InvalidTimeHorizon(self.time_horizon));
        }

        if self.method == RiskMethod::MonteCarlo {
            match self.num_simulations {
                None => {
                    return Err(RiskError::MissingParameter(
                        "num_simulations is required for the Monte Carlo method".to_string(),
                    ))
                }
                Some(0) => return Err(RiskError::InvalidSimulationCount(0)),
                Some(_) => {}
            }
        }

        if let Some(window) = self.rolling_window {
            if window < 2 {
                return Err(RiskError::InvalidParameter(format!(
                    "Rolling window size {} must be at least 2",
                    window
                )));
            }
        }

        Ok(())
    }

    /// Estimator parameters for this configuration
    pub fn params(&self) -> RiskParams {
        RiskParams {
            confidence_level: self.confidence_level,
            time_horizon: self.time_horizon,
            num_simulations: self.num_simulations,
            random_seed: self.random_seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
method: MonteCarlo
confidence_level: 0.99
time_horizon: 10
num_simulations: 10000
random_seed: 42
"#;
        let config = RiskConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.method, RiskMethod::MonteCarlo);
        assert_eq!(config.confidence_level, 0.99);
        assert_eq!(config.time_horizon, 10);
        assert_eq!(config.num_simulations, Some(10_000));
        assert_eq!(config.random_seed, Some(42));
        assert!(config.rolling_window.is_none());
    }

    #[test]
    fn test_config_defaults() {
        let yaml = "method: Historical";
        let config = RiskConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.confidence_level, 0.95);
        assert_eq!(config.time_horizon, 1);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
  "method": "Parametric",
  "confidence_level": 0.9,
  "time_horizon": 5
}"#;
        let config = RiskConfig::from_json(json).unwrap();

        assert_eq!(config.method, RiskMethod::Parametric);
        assert_eq!(config.confidence_level, 0.9);
    }

    #[test]
    fn test_config_monte_carlo_requires_simulations() {
        let yaml = "method: MonteCarlo";
        let result = RiskConfig::from_yaml(yaml);
        assert!(matches!(result, Err(RiskError::MissingParameter(_))));
    }

    #[test]
    fn test_config_rejects_bad_confidence() {
        let yaml = r#"
method: Historical
confidence_level: 1.2
"#;
        let result = RiskConfig::from_yaml(yaml);
        assert!(matches!(result, Err(RiskError::InvalidConfidenceLevel(_))));
    }

    #[test]
    fn test_config_rejects_tiny_rolling_window() {
        let yaml = r#"
method: Historical
rolling_window: 1
"#;
        let result = RiskConfig::from_yaml(yaml);
        assert!(matches!(result, Err(RiskError::InvalidParameter(_))));
    }

    #[test]
    fn test_config_rejects_zero_simulations() {
        let yaml = r#"
method: MonteCarlo
num_simulations: 0
"#;
        let result = RiskConfig::from_yaml(yaml);
        assert!(matches!(result, Err(RiskError::InvalidSimulationCount(0))));
    }

    #[test]
    fn test_config_invalid_yaml() {
        let yaml = "method: {broken: [structure";
        assert!(RiskConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = RiskConfig {
            method: RiskMethod::MonteCarlo,
            confidence_level: 0.95,
            time_horizon: 1,
            num_simulations: Some(5_000),
            random_seed: Some(7),
            rolling_window: Some(126),
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = RiskConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.method, config.method);
        assert_eq!(parsed.num_simulations, config.num_simulations);
        assert_eq!(parsed.rolling_window, config.rolling_window);
    }
}
