//! Processor configuration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_PROCESSOR: &str = "ORDERSYNC_SALES_PROCESSOR";
pub const ENV_EVENT_PREFIX: &str = "ORDERSYNC_EVENT_PREFIX";

pub const DEFAULT_EVENT_PREFIX: &str = "process_sales_object";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported sales processor: {0}")]
    UnsupportedProcessor(String),

    #[error("notification prefix must not be empty")]
    EmptyEventPrefix,
}

/// Which sales processor handles edited orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorCode {
    /// Leave sales documents alone; sync payment and item quantities only.
    #[default]
    SyncOnly,
}

impl ProcessorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorCode::SyncOnly => "sync_only",
        }
    }
}

impl FromStr for ProcessorCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sync_only" => Ok(ProcessorCode::SyncOnly),
            other => Err(ConfigError::UnsupportedProcessor(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    pub processor: ProcessorCode,
    pub event_prefix: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            processor: ProcessorCode::default(),
            event_prefix: DEFAULT_EVENT_PREFIX.to_string(),
        }
    }
}

impl ProcessorConfig {
    /// Load from `ORDERSYNC_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (env-like).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(code) = lookup(ENV_PROCESSOR) {
            config.processor = code.parse()?;
        }
        if let Some(prefix) = lookup(ENV_EVENT_PREFIX) {
            config.event_prefix = prefix.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_prefix.is_empty() {
            return Err(ConfigError::EmptyEventPrefix);
        }
        Ok(())
    }

    /// Full notification name for a stage suffix (`before`, `after`, `error`).
    pub fn event_name(&self, stage: &str) -> String {
        format!("{}_{}", self.event_prefix, stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ProcessorConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, ProcessorConfig::default());
        assert_eq!(config.processor, ProcessorCode::SyncOnly);
        assert_eq!(config.event_name("before"), "process_sales_object_before");
    }

    #[test]
    fn prefix_override_is_trimmed() {
        let config =
            ProcessorConfig::from_lookup(lookup(&[(ENV_EVENT_PREFIX, "  mw_oe_sales  ")])).unwrap();

        assert_eq!(config.event_name("error"), "mw_oe_sales_error");
    }

    #[test]
    fn rejects_unknown_processor() {
        let err =
            ProcessorConfig::from_lookup(lookup(&[(ENV_PROCESSOR, "invoice_all")])).unwrap_err();

        assert_eq!(err, ConfigError::UnsupportedProcessor("invoice_all".into()));
    }

    #[test]
    fn rejects_blank_prefix() {
        let err = ProcessorConfig::from_lookup(lookup(&[(ENV_EVENT_PREFIX, "   ")])).unwrap_err();

        assert_eq!(err, ConfigError::EmptyEventPrefix);
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let config: ProcessorConfig =
            serde_json::from_str(r#"{ "processor": "sync_only" }"#).unwrap();

        assert_eq!(config.event_prefix, DEFAULT_EVENT_PREFIX);
        assert_eq!(config.processor.as_str(), "sync_only");
    }
}
