//! Configuration source resolution.
//!
//! Precedence, strictly in this order:
//! 1. Inline text
//! 2. Explicit local path
//! 3. `config_type=local` → the path in `config_name`
//! 4. Otherwise → object `config_name` in bucket `config_bucket`

use crate::document::RawConfig;
use crate::env::{EnvSource, ProcessEnv};
use crate::store::ObjectStore;
use fwt_common::{Error, Result, CONFIG_BUCKET, CONFIG_NAME, CONFIG_TYPE, CONFIG_TYPE_LOCAL};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// Where a configuration document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Inline(String),
    Local(PathBuf),
    Remote { bucket: String, key: String },
}

impl ConfigSource {
    /// Pick the source by precedence. Empty inline text counts as absent.
    pub fn select(
        local: Option<&Path>,
        inline: Option<&str>,
        env: &dyn EnvSource,
    ) -> Result<Self> {
        if let Some(text) = inline.filter(|t| !t.is_empty()) {
            return Ok(ConfigSource::Inline(text.to_string()));
        }
        if let Some(path) = local {
            return Ok(ConfigSource::Local(path.to_path_buf()));
        }
        if env.var(CONFIG_TYPE).as_deref() == Some(CONFIG_TYPE_LOCAL) {
            let name = env.require(CONFIG_NAME)?;
            return Ok(ConfigSource::Local(PathBuf::from(name)));
        }
        let bucket = env.require(CONFIG_BUCKET)?;
        let key = env.require(CONFIG_NAME)?;
        Ok(ConfigSource::Remote { bucket, key })
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Inline(_) => write!(f, "inline configuration"),
            ConfigSource::Local(path) => write!(f, "local file [{}]", path.display()),
            ConfigSource::Remote { bucket, key } => {
                write!(f, "bucket [{}] with key [{}]", bucket, key)
            }
        }
    }
}

/// Loads configuration documents from the selected source.
#[derive(Debug, Clone)]
pub struct Resolver {
    env: Arc<dyn EnvSource>,
    store: Option<Arc<dyn ObjectStore>>,
}

impl Resolver {
    /// Resolver over the process environment with no object store.
    pub fn new() -> Self {
        Self {
            env: Arc::new(ProcessEnv),
            store: None,
        }
    }

    /// Replace the environment view.
    pub fn with_env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Attach the object store used in remote mode.
    pub fn with_store(mut self, store: impl ObjectStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Select a source by precedence and load it.
    pub fn resolve(&self, local: Option<&Path>, inline: Option<&str>) -> Result<RawConfig> {
        let source = ConfigSource::select(local, inline, self.env.as_ref())
            .inspect_err(|e| error!(error = %e, "cannot determine configuration source"))?;
        self.load(&source)
    }

    /// Load and parse a document from `source`.
    pub fn load(&self, source: &ConfigSource) -> Result<RawConfig> {
        info!(%source, "Using configuration");
        self.load_inner(source)
            .inspect_err(|e| error!(%source, error = %e, "failed to load configuration"))
    }

    fn load_inner(&self, source: &ConfigSource) -> Result<RawConfig> {
        match source {
            ConfigSource::Inline(text) => RawConfig::parse(text),
            ConfigSource::Local(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
                RawConfig::parse(&text)
            }
            ConfigSource::Remote { bucket, key } => {
                let store = self.store.as_ref().ok_or_else(|| {
                    Error::MissingConfig(format!(
                        "no object store configured to fetch key [{}] from bucket [{}]",
                        key, bucket
                    ))
                })?;
                let bytes = store.fetch_object_bytes(bucket, key)?;
                RawConfig::from_slice(&bytes)
            }
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve against the process environment without an object store.
pub fn resolve(local: Option<&Path>, inline: Option<&str>) -> Result<RawConfig> {
    Resolver::new().resolve(local, inline)
}
