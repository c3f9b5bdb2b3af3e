//! Render and configuration errors

use std::path::PathBuf;
use storygen_parser::ParseError;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::RenderConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Package name is not a dotted Java identifier
    #[error("invalid Java package name: {name:?}")]
    InvalidPackage {
        /// Offending name
        name: String,
    },
}

impl ConfigError {
    /// Create invalid package error
    #[inline]
    #[must_use]
    pub fn invalid_package(name: impl Into<String>) -> Self {
        Self::InvalidPackage { name: name.into() }
    }
}

/// Errors from story text to test package
#[derive(Debug, Error)]
pub enum StorygenError {
    /// Story text did not parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Render configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for end-to-end generation
pub type StorygenResult<T> = Result<T, StorygenError>;
