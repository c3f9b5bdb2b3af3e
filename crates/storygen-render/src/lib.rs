//! storygen Renderers
//!
//! Generates test artifacts from a parsed [`storygen_model::Story`].
//!
//! # Core Concepts
//!
//! - [`StoryRenderer`]: Core trait for artifact renderers
//! - [`FeatureFileRenderer`]: Gherkin feature file with background and scenarios
//! - [`StepDefinitionRenderer`]: Java/Cucumber class of pending step stubs
//! - [`RenderConfig`]: Java packages for the step class and harness imports
//! - [`TestPackage`]: Both artifacts plus the names to write them under
//!
//! # Example
//!
//! ```rust
//! use storygen_render::{generate_from_text, RenderConfig};
//!
//! let text = "{panel:title=Value Statement}\n\
//!             As a user, I want to export reports, so that I can share them.\n\
//!             {panel}";
//! let package = generate_from_text(text, &RenderConfig::default())?;
//!
//! assert_eq!(package.class_name(), "ExportReportsSteps");
//! assert!(package.feature_file().starts_with("Feature: Export reports\n"));
//! # Ok::<(), storygen_render::StorygenError>(())
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod error;
mod feature;
pub mod naming;
mod package;
mod renderer;
mod steps;

pub use config::RenderConfig;
pub use error::{ConfigError, StorygenError, StorygenResult};
pub use feature::FeatureFileRenderer;
pub use package::{
    generate_feature_file, generate_from_text, generate_step_definitions, generate_test_package,
    TestPackage,
};
pub use renderer::StoryRenderer;
pub use steps::{unique_steps, StepDefinitionRenderer};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for rendering stories
    pub use crate::config::RenderConfig;
    pub use crate::error::{StorygenError, StorygenResult};
    pub use crate::feature::FeatureFileRenderer;
    pub use crate::package::{generate_from_text, generate_test_package, TestPackage};
    pub use crate::renderer::StoryRenderer;
    pub use crate::steps::StepDefinitionRenderer;
}
