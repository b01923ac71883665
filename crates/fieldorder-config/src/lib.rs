//! TOML configuration for fieldorder chains.
//!
//! ```toml
//! [ordering]
//! specialize = true
//! reference_null_order = "last"
//! ```
//!
//! Every key is optional; a missing file section yields the defaults.


use fieldorder_core::{compare::ChainPolicy, value::NullOrder};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ordering config: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
}

///
/// OrderingConfig
///
/// Top-level document. Only the `[ordering]` table is recognized.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OrderingConfig {
    #[serde(default)]
    pub ordering: OrderingSection,
}

///
/// OrderingSection
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OrderingSection {
    /// Recognize field accessors passed as key extractors.
    #[serde(default = "default_specialize")]
    pub specialize: bool,

    /// Null placement for specialized reference keys.
    #[serde(default)]
    pub reference_null_order: NullOrder,
}

const fn default_specialize() -> bool {
    true
}

impl Default for OrderingSection {
    fn default() -> Self {
        Self {
            specialize: default_specialize(),
            reference_null_order: NullOrder::default(),
        }
    }
}

impl OrderingConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            specialize = config.ordering.specialize,
            "loaded ordering config"
        );

        Ok(config)
    }

    /// The chain policy this document describes.
    #[must_use]
    pub const fn chain_policy(&self) -> ChainPolicy {
        let policy = if self.ordering.specialize {
            ChainPolicy::new()
        } else {
            ChainPolicy::generic_only()
        };

        policy.with_reference_null_order(self.ordering.reference_null_order)
    }
}

impl From<&OrderingConfig> for ChainPolicy {
    fn from(config: &OrderingConfig) -> Self {
        config.chain_policy()
    }
}
