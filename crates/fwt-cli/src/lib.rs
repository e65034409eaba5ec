//! Library side of the `fwt` binary: exit codes and spec rendering.

pub mod exit_codes;
pub mod render;

pub use exit_codes::ExitCode;
pub use render::{render, OutputFormat, RenderError};
