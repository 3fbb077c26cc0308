// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0
//
// ConfigLoader reads the configuration file once and exposes lazy, cached
// accessors for tracing and runtime. Each section falls back to its default
// when absent, so a missing file or an empty document means all-defaults.

use std::collections::HashSet;

use lazy_static::lazy_static;
use serde_yaml::{Value, from_str};
use thiserror::Error;
use tracing::{debug, warn};

use crate::runtime::RuntimeConfiguration;
use cra_tracing::TracingConfiguration;

#[derive(Error, Debug)]
pub enum ConfigError {
    // File / I/O
    #[error("not found: {0}")]
    NotFound(String),

    // Parsing / structural validity
    #[error("invalid configuration - impossible to parse yaml")]
    InvalidYaml,
    #[error("invalid configuration - key {0} not valid")]
    InvalidKey(String),
}

lazy_static! {
    static ref CONFIG_KEYS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("tracing");
        s.insert("runtime");
        s
    };
}

pub struct ConfigLoader {
    root: Value,
    tracing: Option<TracingConfiguration>,
    runtime: Option<RuntimeConfiguration>,
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let root_keys = self
            .root
            .as_mapping()
            .map(|m| {
                m.keys()
                    .filter_map(|k| k.as_str())
                    .map(|s| s.to_string())
                    .collect::<Vec<String>>()
            })
            .unwrap_or_default();

        f.debug_struct("ConfigLoader")
            .field("root_keys", &root_keys)
            .field("tracing_loaded", &self.tracing.is_some())
            .field("runtime_loaded", &self.runtime.is_some())
            .finish()
    }
}

impl ConfigLoader {
    pub fn new(file_path: &str) -> Result<Self, ConfigError> {
        let config_str =
            std::fs::read_to_string(file_path).map_err(|e| ConfigError::NotFound(e.to_string()))?;
        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(config_str: &str) -> Result<Self, ConfigError> {
        let root: Value = from_str(config_str).map_err(|_| ConfigError::InvalidYaml)?;

        match root.as_mapping() {
            Some(mapping) => {
                for key in mapping.keys() {
                    let k = key.as_str().ok_or(ConfigError::InvalidYaml)?;
                    if !CONFIG_KEYS.contains(k) {
                        return Err(ConfigError::InvalidKey(k.to_string()));
                    }
                }
            }
            // An empty document is valid and means all-defaults
            None if root.is_null() => {}
            None => return Err(ConfigError::InvalidYaml),
        }

        Ok(Self {
            root,
            tracing: None,
            runtime: None,
        })
    }

    /// All-defaults configuration, used when no config file is given.
    pub fn defaults() -> Self {
        Self {
            root: Value::Null,
            tracing: None,
            runtime: None,
        }
    }

    pub fn tracing(&mut self) -> &TracingConfiguration {
        if self.tracing.is_none() {
            let cfg = self
                .root
                .get("tracing")
                .cloned()
                .map(|v| {
                    serde_yaml::from_value(v).unwrap_or_else(|e| {
                        warn!(error = ?e, "invalid tracing config, falling back to default");
                        TracingConfiguration::default()
                    })
                })
                .unwrap_or_else(TracingConfiguration::default);
            debug!(?cfg, "Tracing configuration loaded");
            self.tracing = Some(cfg);
        }
        self.tracing.as_ref().unwrap()
    }

    pub fn runtime(&mut self) -> &RuntimeConfiguration {
        if self.runtime.is_none() {
            let cfg = self
                .root
                .get("runtime")
                .cloned()
                .map(|v| {
                    serde_yaml::from_value(v).unwrap_or_else(|e| {
                        warn!(error = ?e, "invalid runtime config, falling back to default");
                        RuntimeConfiguration::default()
                    })
                })
                .unwrap_or_else(RuntimeConfiguration::default);
            debug!(?cfg, "Runtime configuration loaded");
            self.runtime = Some(cfg);
        }
        self.runtime.as_ref().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn testdata_path() -> String {
        concat!(env!("CARGO_MANIFEST_DIR"), "/testdata").to_string()
    }

    #[test]
    #[traced_test]
    fn test_full_config() {
        let path = format!("{}/config.yaml", testdata_path());
        let mut loader = ConfigLoader::new(&path).expect("loader init should succeed");

        assert_eq!(loader.tracing().log_level(), "info");
        assert_eq!(loader.runtime().thread_name(), "cra-worker");
    }

    #[test]
    #[traced_test]
    fn test_tracing_specific_config() {
        let path = format!("{}/config-tracing.yaml", testdata_path());
        let mut loader = ConfigLoader::new(&path).expect("loader init should succeed");
        assert_eq!(loader.tracing().log_level(), "debug");
    }

    #[test]
    #[traced_test]
    fn test_empty_config_means_defaults() {
        let path = format!("{}/config-empty.yaml", testdata_path());
        let mut loader = ConfigLoader::new(&path).expect("empty config should load");
        assert_eq!(loader.tracing().log_level(), "info");
        assert_eq!(loader.runtime().n_cores(), 0);
    }

    #[test]
    fn test_defaults_without_file() {
        let mut loader = ConfigLoader::defaults();
        assert_eq!(loader.tracing().log_level(), "info");
    }

    #[test]
    #[traced_test]
    fn test_unknown_top_level_key_is_rejected() {
        let path = format!("{}/config-invalid-key.yaml", testdata_path());
        let res = ConfigLoader::new(&path);
        assert!(matches!(res, Err(ConfigError::InvalidKey(k)) if k == "services"));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let res = ConfigLoader::from_yaml("runtime: [unclosed");
        assert!(matches!(res, Err(ConfigError::InvalidYaml)));
    }

    #[test]
    fn test_missing_file() {
        let res = ConfigLoader::new("/does/not/exist.yaml");
        assert!(matches!(res, Err(ConfigError::NotFound(_))));
    }

    #[test]
    #[traced_test]
    fn test_invalid_section_falls_back_to_default() {
        let mut loader = ConfigLoader::from_yaml("runtime: { n_cores: \"not-a-number\" }")
            .expect("structurally valid yaml should load");
        assert_eq!(loader.runtime().n_cores(), 0);
    }
}
