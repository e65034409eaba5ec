//! Fixed-width transformer configuration resolution.
//!
//! This crate provides:
//! - Config source resolution (inline → explicit path → env-selected path or object storage)
//! - File-type selection by first-matching `pattern` regex
//! - Segment/field layout specs with position ranges and validator descriptors
//! - Output format and result directive extraction
//!
//! Routing contract for configuration authors: entries under `files` are tried
//! in declaration order and the first `pattern` that matches a prefix of the
//! file identifier wins. Put specific patterns before general ones.
//! Patterns use `regex` crate syntax, which has no look-around and no
//! backreferences: a pattern such as `^(?!TEST)INV` is rejected as invalid
//! configuration. Express exclusions through entry order instead.

pub mod document;
pub mod env;
pub mod output;
pub mod range;
pub mod segment;
pub mod select;
pub mod source;
pub mod specs;
pub mod store;

pub use document::RawConfig;
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use output::{extract_output_format, extract_result, OutputFormatSpec, ResultSpec};
pub use range::{to_range, PositionRange, RangeError};
pub use segment::{build_segments, FieldSpec, SegmentSpec, ValidatorSpec, DEFAULT_FAMILY};
pub use select::{select_exact, ExactConfig};
pub use source::{resolve, ConfigSource, Resolver};
pub use specs::FileSpecs;
pub use store::{DirObjectStore, MemoryObjectStore, ObjectStore};

pub use fwt_common::{Error, ErrorKind, Result};
