//! Tunable constants of the confidence model.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! temperature_threshold = 28.0
//! temperature_sensitive = ["Frozen", "Dairy"]
//! ```

use crate::config::ConfigError;
use crate::model::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Starting confidence before any bonus.
    pub base_confidence: f64,
    /// Bonus granted for a full (1.0) history weight.
    pub history_bonus: f64,
    /// History weight used when a signal carries none. No order feedback
    /// exists yet, so this stays a calibration constant.
    pub history_weight: f64,
    /// Bonus per high-impact event that applies to the product.
    pub event_bonus: f64,
    /// Upper bound on the summed event bonus.
    pub event_cap: f64,
    pub temperature_bonus: f64,
    /// Forecasts strictly above this many °C earn the temperature bonus.
    pub temperature_threshold: f64,
    pub temperature_sensitive: Vec<Category>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_confidence: 70.0,
            history_bonus: 20.0,
            history_weight: 0.5,
            event_bonus: 5.0,
            event_cap: 10.0,
            temperature_bonus: 5.0,
            temperature_threshold: 30.0,
            temperature_sensitive: vec![Category::Frozen, Category::Dairy, Category::Produce],
        }
    }
}

impl EngineConfig {
    /// Parses a (possibly partial) TOML document and validates the result.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let bonuses = [
            ("base_confidence", self.base_confidence),
            ("history_bonus", self.history_bonus),
            ("event_bonus", self.event_bonus),
            ("event_cap", self.event_cap),
            ("temperature_bonus", self.temperature_bonus),
        ];
        for (name, value) in bonuses {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.history_weight) {
            return Err(ConfigError::Invalid(format!(
                "history_weight must be within [0, 1], got {}",
                self.history_weight
            )));
        }
        if !self.temperature_threshold.is_finite() {
            return Err(ConfigError::Invalid(
                "temperature_threshold must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            temperature_threshold = 28.0
            temperature_sensitive = ["Frozen"]
            "#,
        )
        .unwrap();
        assert_eq!(config.temperature_threshold, 28.0);
        assert_eq!(config.temperature_sensitive, vec![Category::Frozen]);
        assert_eq!(config.base_confidence, 70.0);
        assert_eq!(config.event_cap, 10.0);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = EngineConfig::from_toml_str("history_weight = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains("history_weight")));

        let err = EngineConfig::from_toml_str("event_bonus = -5.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains("event_bonus")));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("base_confidence = \"high\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
