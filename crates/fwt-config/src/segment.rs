//! Segment and field layout specs.
//!
//! A segment family (by default `source`) is a mapping of segment names to
//! segment bodies:
//!
//! ```yaml
//! source:
//!   header:
//!     mapper: fixed
//!     format:
//!       - { name: kind, spec: "0,1" }
//!   body:
//!     mapper: fixed
//!     format:
//!       - name: id
//!         spec: "0,5"
//!         validators:
//!           - { name: not_blank, arguments: [] }
//! ```
//!
//! The `skip_header`/`skip_footer` flags are family-wide: they record whether
//! a segment literally named `header`/`footer` exists in the family, and every
//! spec built from that family carries the same pair.

use crate::document::{key_name, type_name};
use crate::range::to_range;
use crate::range::PositionRange;
use crate::select::ExactConfig;
use fwt_common::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use tracing::error;

/// Family consulted when the caller does not name one.
pub const DEFAULT_FAMILY: &str = "source";

/// A validator attached to one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatorSpec {
    name: String,
    segment: String,
    field: String,
    arguments: Value,
}

impl ValidatorSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Arguments as declared; an empty sequence when none were given.
    pub fn arguments(&self) -> &Value {
        &self.arguments
    }
}

/// Layout of one segment.
///
/// `names()` and `specs()` always have equal length; index `i` of one
/// describes the same field as index `i` of the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSpec {
    mapper: String,
    segment: String,
    names: Vec<String>,
    specs: Vec<PositionRange>,
    skip_header: bool,
    skip_footer: bool,
    validators: Vec<ValidatorSpec>,
}

/// One field of a segment, pairing a name with its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    pub name: &'a str,
    pub range: PositionRange,
}

impl SegmentSpec {
    /// Name of the record mapper for this segment.
    pub fn mapper(&self) -> &str {
        &self.mapper
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn specs(&self) -> &[PositionRange] {
        &self.specs
    }

    pub fn skip_header(&self) -> bool {
        self.skip_header
    }

    pub fn skip_footer(&self) -> bool {
        self.skip_footer
    }

    /// Validators in declaration order across all fields.
    pub fn validators(&self) -> &[ValidatorSpec] {
        &self.validators
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldSpec<'_>> + '_ {
        self.names
            .iter()
            .zip(&self.specs)
            .map(|(name, range)| FieldSpec {
                name,
                range: *range,
            })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct FieldRaw {
    name: String,
    spec: String,
    #[serde(default)]
    validators: Option<Vec<ValidatorRaw>>,
}

#[derive(Debug, Deserialize)]
struct ValidatorRaw {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

/// Build one [`SegmentSpec`] per segment under `family`, in declaration order.
pub fn build_segments(exact: &ExactConfig, family: &str) -> Result<Vec<SegmentSpec>> {
    build_inner(exact, family)
        .inspect_err(|e| error!(family, error = %e, "segment spec build failed"))
}

fn build_inner(exact: &ExactConfig, family: &str) -> Result<Vec<SegmentSpec>> {
    let segments = match exact.get(family) {
        None => {
            return Err(Error::InvalidConfig(format!(
                "{} segment is missing in configuration",
                family
            )))
        }
        Some(Value::Null) => {
            return Err(Error::InvalidConfig(format!(
                "{} segment cannot be empty",
                family
            )))
        }
        Some(Value::Mapping(segments)) => segments,
        Some(other) => {
            return Err(Error::InvalidConfig(format!(
                "{} segment must be a mapping, got {}",
                family,
                type_name(other)
            )))
        }
    };

    let skip_header = segments.contains_key("header");
    let skip_footer = segments.contains_key("footer");

    segments
        .iter()
        .map(|(key, body)| {
            let segment = key_name(key);
            build_segment(family, segment, body, skip_header, skip_footer)
        })
        .collect()
}

fn build_segment(
    family: &str,
    segment: String,
    body: &Value,
    skip_header: bool,
    skip_footer: bool,
) -> Result<SegmentSpec> {
    let path = format!("{}.{}", family, segment);
    let body: &Mapping = body.as_mapping().ok_or_else(|| {
        Error::InvalidConfig(format!("{} must be a mapping, got {}", path, type_name(body)))
    })?;

    let mapper = body
        .get("mapper")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::InvalidConfig(format!("{}.mapper must be a string", path)))?
        .to_string();

    let format = body
        .get("format")
        .and_then(Value::as_sequence)
        .ok_or_else(|| Error::InvalidConfig(format!("{}.format must be a list of fields", path)))?;

    let mut names = Vec::with_capacity(format.len());
    let mut specs = Vec::with_capacity(format.len());
    let mut validators = Vec::new();

    for (idx, entry) in format.iter().enumerate() {
        let field_path = format!("{}.format[{}]", path, idx);
        let field: FieldRaw = serde_yaml::from_value(entry.clone())
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", field_path, e)))?;
        let range = to_range(&field.spec)
            .map_err(|e| Error::InvalidConfig(format!("{}.spec: {}", field_path, e)))?;

        for validator in field.validators.into_iter().flatten() {
            validators.push(ValidatorSpec {
                name: validator.name,
                segment: segment.clone(),
                field: field.name.clone(),
                arguments: validator
                    .arguments
                    .filter(|a| !a.is_null())
                    .unwrap_or_else(|| Value::Sequence(Vec::new())),
            });
        }

        names.push(field.name);
        specs.push(range);
    }

    Ok(SegmentSpec {
        mapper,
        segment,
        names,
        specs,
        skip_header,
        skip_footer,
        validators,
    })
}
