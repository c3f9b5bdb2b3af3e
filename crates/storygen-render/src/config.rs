//! Render configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default package for generated step classes
pub const DEFAULT_PACKAGE: &str = "acceptance.steps";

/// Default package holding `TestContext` and `MultiServiceTestHarness`
pub const DEFAULT_HARNESS_PACKAGE: &str = "acceptance.harness";

/// Java packages used when rendering step definitions
///
/// Loadable from TOML; missing keys fall back to the defaults.
///
/// ```toml
/// package_name = "com.example.steps"
/// harness_package = "com.example.harness"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Package of the generated step class
    pub package_name: String,
    /// Package the harness support classes are imported from
    pub harness_package: String,
}

impl RenderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With step class package
    #[inline]
    #[must_use]
    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    /// With harness package
    #[inline]
    #[must_use]
    pub fn with_harness_package(mut self, harness_package: impl Into<String>) -> Self {
        self.harness_package = harness_package.into();
        self
    }

    /// Parse and validate TOML configuration
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed TOML or unknown keys,
    /// [`ConfigError::InvalidPackage`] for a bad package name
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`RenderConfig::from_toml`]
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Check both packages are dotted Java identifiers
    ///
    /// # Errors
    /// [`ConfigError::InvalidPackage`] naming the first bad package
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in [&self.package_name, &self.harness_package] {
            if !is_java_package(name) {
                return Err(ConfigError::invalid_package(name.as_str()));
            }
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE.to_string(),
            harness_package: DEFAULT_HARNESS_PACKAGE.to_string(),
        }
    }
}

fn is_java_package(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}
