//! Object storage seam for remote configuration documents.
//!
//! Networked clients live outside this crate; they only need to implement
//! [`ObjectStore`]. Two implementations ship here: a directory-backed mirror
//! and an in-memory store.

use fwt_common::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Fetches whole objects by bucket and key.
pub trait ObjectStore: Send + Sync + fmt::Debug {
    fn fetch_object_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
}

/// Serves `<root>/<bucket>/<key>` from the local filesystem.
#[derive(Debug, Clone)]
pub struct DirObjectStore {
    root: PathBuf,
}

impl DirObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, bucket: &str, key: &str) -> Option<PathBuf> {
        let escapes = |s: &str| {
            Path::new(s)
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
        };
        if bucket.is_empty() || key.is_empty() || escapes(bucket) || escapes(key) {
            return None;
        }
        Some(self.root.join(bucket).join(key))
    }
}

impl ObjectStore for DirObjectStore {
    fn fetch_object_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let path = self
            .object_path(bucket, key)
            .ok_or_else(|| Error::ObjectFetch {
                bucket: bucket.to_string(),
                key: key.to_string(),
                reason: "bucket and key must be plain relative names".to_string(),
            })?;
        std::fs::read(&path).map_err(|e| Error::ObjectFetch {
            bucket: bucket.to_string(),
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Objects held in memory, keyed by `(bucket, key)`.
#[derive(Debug, Clone, Default)]
pub struct MemoryObjectStore {
    objects: HashMap<(String, String), Vec<u8>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(
        mut self,
        bucket: impl Into<String>,
        key: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.objects
            .insert((bucket.into(), key.into()), bytes.into());
        self
    }
}

impl ObjectStore for MemoryObjectStore {
    fn fetch_object_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| Error::ObjectFetch {
                bucket: bucket.to_string(),
                key: key.to_string(),
                reason: "no such object".to_string(),
            })
    }
}
