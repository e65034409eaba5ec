//! Rendering derived specs for the terminal.

use clap::ValueEnum;
use fwt_config::FileSpecs;
use thiserror::Error;

/// Output encodings supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML, matching the configuration document's own format
    Yaml,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Render `specs` in the requested format.
pub fn render(specs: &FileSpecs, format: OutputFormat) -> Result<String, RenderError> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(specs)?,
        OutputFormat::Yaml => serde_yaml::to_string(specs)?,
    })
}
