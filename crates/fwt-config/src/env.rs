//! Environment variable access.
//!
//! The resolver never reads `std::env` directly; it goes through an
//! [`EnvSource`] so embedders and tests can supply a fixed view.

use fwt_common::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// Read-only view of environment variables.
pub trait EnvSource: Send + Sync + fmt::Debug {
    /// Value of `name`, if set.
    fn var(&self, name: &str) -> Option<String>;

    /// Value of `name`; unset or empty is an error.
    fn require(&self, name: &str) -> Result<String> {
        self.var(name)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::MissingEnvVar(name.to_string()))
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_env_lookup() {
        let env = MapEnv::new().with("config_type", "local");
        assert_eq!(env.var("config_type").as_deref(), Some("local"));
        assert_eq!(env.var("config_name"), None);
    }

    #[test]
    fn require_rejects_unset_and_empty() {
        let env: MapEnv = [("config_name", "")].into_iter().collect();
        let err = env.require("config_name").unwrap_err();
        assert!(matches!(err, Error::MissingEnvVar(ref n) if n == "config_name"));

        let err = env.require("config_bucket").unwrap_err();
        assert!(err.to_string().contains("config_bucket"));
    }

    #[test]
    fn process_env_reads_path() {
        // PATH is set in every test environment we run in.
        assert!(ProcessEnv.var("PATH").is_some());
    }
}
