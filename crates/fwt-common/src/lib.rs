//! Fixed-width transformer common types and errors.
//!
//! This crate provides foundational types shared across the fwt crates:
//! - The unified error type and its three-way classification
//! - Names of the environment variables that select a configuration source

pub mod env;
pub mod error;

pub use env::{CONFIG_BUCKET, CONFIG_NAME, CONFIG_TYPE, CONFIG_TYPE_LOCAL};
pub use error::{Error, ErrorKind, Result};
