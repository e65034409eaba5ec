//! Output format and result directive extraction.

use crate::document::type_name;
use crate::select::ExactConfig;
use fwt_common::{Error, Result};
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::error;

/// How output fields are rendered. Passed through without validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutputFormatSpec(Value);

impl OutputFormatSpec {
    pub fn empty() -> Self {
        OutputFormatSpec(Value::Mapping(Mapping::new()))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Mapping(m) => m.is_empty(),
            Value::Sequence(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl Default for OutputFormatSpec {
    fn default() -> Self {
        Self::empty()
    }
}

/// Which result producer to invoke, and with what arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSpec {
    name: String,
    arguments: Mapping,
}

impl ResultSpec {
    /// Strategy identifier consumed downstream.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Never null; empty when the document declares none.
    pub fn arguments(&self) -> &Mapping {
        &self.arguments
    }

    pub fn argument(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }
}

/// Return `output.format` verbatim, or an empty structure when absent.
pub fn extract_output_format(exact: &ExactConfig) -> Result<OutputFormatSpec> {
    format_inner(exact).inspect_err(|e| error!(error = %e, "output format extraction failed"))
}

fn format_inner(exact: &ExactConfig) -> Result<OutputFormatSpec> {
    let output = match exact.get("output") {
        None => return Ok(OutputFormatSpec::empty()),
        Some(Value::Mapping(output)) => output,
        Some(other) => {
            return Err(Error::InvalidConfig(format!(
                "output segment must be a mapping, got {}",
                type_name(other)
            )))
        }
    };

    Ok(match output.get("format") {
        None | Some(Value::Null) => OutputFormatSpec::empty(),
        Some(format) => OutputFormatSpec(format.clone()),
    })
}

/// Extract the mandatory `output.result` directive.
pub fn extract_result(exact: &ExactConfig) -> Result<ResultSpec> {
    result_inner(exact).inspect_err(|e| error!(error = %e, "result directive extraction failed"))
}

fn result_inner(exact: &ExactConfig) -> Result<ResultSpec> {
    let missing = || {
        Error::InvalidConfig(
            "result segment is missing. Please ensure configuration is provided".to_string(),
        )
    };

    let output = match exact.get("output") {
        None => return Err(missing()),
        Some(Value::Mapping(output)) => output,
        Some(other) => {
            return Err(Error::InvalidConfig(format!(
                "output segment must be a mapping, got {}",
                type_name(other)
            )))
        }
    };

    let result = match output.get("result") {
        None => return Err(missing()),
        Some(result) if is_empty_value(result) => {
            return Err(Error::InvalidConfig(
                "result segment cannot be empty. Please ensure configuration is valid"
                    .to_string(),
            ))
        }
        Some(Value::Mapping(result)) => result,
        Some(other) => {
            return Err(Error::InvalidConfig(format!(
                "result segment must be a mapping, got {}",
                type_name(other)
            )))
        }
    };

    let name = result
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            Error::InvalidConfig("result name must be a non-empty string".to_string())
        })?
        .to_string();

    let arguments = match result.get("arguments") {
        None | Some(Value::Null) => Mapping::new(),
        Some(Value::Mapping(args)) => args.clone(),
        Some(other) => {
            return Err(Error::InvalidConfig(format!(
                "result arguments must be a mapping, got {}",
                type_name(other)
            )))
        }
    };

    Ok(ResultSpec { name, arguments })
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Mapping(m) => m.is_empty(),
        Value::Sequence(s) => s.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
