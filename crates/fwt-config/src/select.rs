//! File-type selection.

use crate::document::{key_name, type_name, RawConfig};
use fwt_common::{Error, Result};
use regex::Regex;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::{debug, error};

/// The `files` entry selected for one file identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExactConfig {
    file_type: String,
    pattern: String,
    #[serde(skip)]
    body: Mapping,
}

impl ExactConfig {
    /// Key of the matched entry under `files`.
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// The pattern that matched.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn body(&self) -> &Mapping {
        &self.body
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    #[cfg(test)]
    pub(crate) fn for_test(body: &str) -> Self {
        let body = serde_yaml::from_str(body).expect("test body must be a mapping");
        Self {
            file_type: "test".to_string(),
            pattern: ".*".to_string(),
            body,
        }
    }
}

/// Select the first `files` entry whose `pattern` matches a prefix of `identifier`.
///
/// Entries are tried in declaration order; specificity plays no part.
pub fn select_exact(raw: &RawConfig, identifier: &str) -> Result<ExactConfig> {
    select_inner(raw, identifier)
        .inspect_err(|e| error!(identifier, error = %e, "file-type selection failed"))
}

fn select_inner(raw: &RawConfig, identifier: &str) -> Result<ExactConfig> {
    let files = match raw.get("files") {
        None | Some(Value::Null) => {
            return Err(Error::InvalidConfig(
                "files segment is missing or empty".to_string(),
            ))
        }
        Some(Value::Mapping(files)) => files,
        Some(other) => {
            return Err(Error::InvalidConfig(format!(
                "files segment must be a mapping, got {}",
                type_name(other)
            )))
        }
    };

    for (key, entry) in files {
        let file_type = key_name(key);
        let body = entry.as_mapping().ok_or_else(|| {
            Error::InvalidConfig(format!(
                "files.{} must be a mapping, got {}",
                file_type,
                type_name(entry)
            ))
        })?;
        let pattern = body
            .get("pattern")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::InvalidConfig(format!("files.{}.pattern must be a string", file_type))
            })?;

        if prefix_matcher(pattern, &file_type)?.is_match(identifier) {
            debug!(identifier, file_type = %file_type, pattern, "file type selected");
            return Ok(ExactConfig {
                file_type,
                pattern: pattern.to_string(),
                body: body.clone(),
            });
        }
    }

    Err(Error::MissingConfig(format!(
        "No matching regex pattern found for file with name [{}]. Please check configuration yaml file",
        identifier
    )))
}

/// Compile `pattern` so it only matches at the start of the input.
fn prefix_matcher(pattern: &str, file_type: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})", pattern)).map_err(|e| {
        Error::InvalidConfig(format!(
            "files.{}.pattern '{}' is not a valid regex: {}",
            file_type, pattern, e
        ))
    })
}
