//! The raw configuration document.

use fwt_common::{Error, Result};
use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// A loaded configuration document whose top level is a mapping.
///
/// Key order is preserved from the source text, which makes `files`
/// declaration order observable to the selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawConfig(Mapping);

impl RawConfig {
    /// Parse a YAML document from text.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(text)?;
        Self::from_value(value)
    }

    /// Parse a YAML document from raw bytes, as fetched from object storage.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_yaml::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Accept an already-parsed value if its top level is a mapping.
    ///
    /// Merge keys (`<<: *anchor`) are expanded first.
    pub fn from_value(mut value: Value) -> Result<Self> {
        value.apply_merge()?;
        match value {
            Value::Mapping(map) => Ok(RawConfig(map)),
            other => Err(Error::InvalidConfig(format!(
                "top level of configuration must be a mapping, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The whole document.
    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }
}

/// Render a mapping key as the name used in specs and error messages.
pub(crate) fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "~".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| type_name(other).to_string()),
    }
}

/// Short YAML type name for error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
