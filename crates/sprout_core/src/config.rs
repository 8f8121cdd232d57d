//! Configuration for Sprout
//!
//! Covers the caller-tunable validation policy of the habit entry form.
//! The engine's scoring weights, category tables and milestone rules are
//! fixed rule tables in code and are deliberately not configurable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SproutError};

/// Top-level configuration for Sprout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SproutConfig {
    /// Habit entry validation policy
    #[serde(default)]
    pub validation: ValidationPolicy,
}

/// Policy applied when a habit description is committed in the entry form.
///
/// The thresholds partition similarity confidence into silent acceptance,
/// a non-blocking warning, and hard rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Minimum habit description length in characters
    pub min_length: usize,

    /// Maximum habit description length in characters
    pub max_length: usize,

    /// Confidence above this (and at or below `block_threshold`) warns
    pub warn_threshold: f64,

    /// Confidence above this rejects the entry as a near-duplicate
    pub block_threshold: f64,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 100,
            warn_threshold: crate::similarity::SIMILAR_THRESHOLD,
            block_threshold: crate::similarity::CATEGORY_CONFIDENCE,
        }
    }
}

impl SproutConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|cause| SproutError::ConfigIo {
            path: path.to_path_buf(),
            cause,
        })?;
        toml::from_str(&content).map_err(|cause| SproutError::ConfigParse {
            path: path.to_path_buf(),
            cause,
        })
    }

    /// Load configuration, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|cause| SproutError::ConfigSerialize { cause })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|cause| SproutError::ConfigWrite {
                path: path.to_path_buf(),
                cause,
            })?;
        }
        std::fs::write(path, content).map_err(|cause| SproutError::ConfigWrite {
            path: path.to_path_buf(),
            cause,
        })
    }

    /// Default config location under the user's config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sprout")
            .join("config.toml")
    }
}
