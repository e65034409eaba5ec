//! Every spec derived for one file identifier.

use crate::document::RawConfig;
use crate::output::{extract_output_format, extract_result, OutputFormatSpec, ResultSpec};
use crate::segment::{build_segments, SegmentSpec};
use crate::select::{select_exact, ExactConfig};
use fwt_common::Result;
use serde::Serialize;
use tracing::info;

/// Selection plus all three derived specs. Built all at once or not at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSpecs {
    identifier: String,
    exact: ExactConfig,
    segments: Vec<SegmentSpec>,
    output_format: OutputFormatSpec,
    result: ResultSpec,
}

impl FileSpecs {
    /// Select the entry for `identifier` and derive its specs from `family`.
    ///
    /// Failures are logged by the step that detects them.
    pub fn resolve(raw: &RawConfig, identifier: &str, family: &str) -> Result<Self> {
        let exact = select_exact(raw, identifier)?;
        let segments = build_segments(&exact, family)?;
        let output_format = extract_output_format(&exact)?;
        let result = extract_result(&exact)?;

        info!(
            identifier,
            file_type = exact.file_type(),
            segments = segments.len(),
            result = result.name(),
            "file specs resolved"
        );

        Ok(Self {
            identifier: identifier.to_string(),
            exact,
            segments,
            output_format,
            result,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn exact(&self) -> &ExactConfig {
        &self.exact
    }

    pub fn segments(&self) -> &[SegmentSpec] {
        &self.segments
    }

    pub fn output_format(&self) -> &OutputFormatSpec {
        &self.output_format
    }

    pub fn result(&self) -> &ResultSpec {
        &self.result
    }
}
