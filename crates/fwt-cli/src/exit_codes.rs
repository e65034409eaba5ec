//! Exit codes for the fwt CLI.
//!
//! Exit codes communicate the failure kind without requiring output parsing.

use fwt_common::ErrorKind;

/// Exit codes for fwt operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Specs resolved and printed
    Clean = 0,

    /// Document or section has the wrong shape
    InvalidConfig = 10,

    /// Document or matching file type could not be found
    MissingConfig = 11,

    /// A single value (such as a position range) is malformed
    InvalidValue = 12,

    /// Rendering or writing the output failed
    IoError = 13,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }
}

impl From<ErrorKind> for ExitCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidConfig => ExitCode::InvalidConfig,
            ErrorKind::MissingConfig => ExitCode::MissingConfig,
            ErrorKind::InvalidValue => ExitCode::InvalidValue,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
