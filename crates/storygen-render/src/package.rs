//! Feature file and step class bundled for one story

use crate::config::RenderConfig;
use crate::error::StorygenResult;
use crate::feature::FeatureFileRenderer;
use crate::naming::{class_name, snake_case};
use crate::renderer::StoryRenderer;
use crate::steps::StepDefinitionRenderer;
use serde::Serialize;
use std::path::PathBuf;
use storygen_model::Story;

const STEPS_SUFFIX: &str = "Steps";
const FALLBACK_STEM: &str = "story";

/// Generated artifacts for one story
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestPackage {
    package_name: String,
    class_name: String,
    feature_file: String,
    step_definitions: String,
}

impl TestPackage {
    /// Java package of the step class
    #[inline]
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Step class name
    #[inline]
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Gherkin feature file text
    #[inline]
    #[must_use]
    pub fn feature_file(&self) -> &str {
        &self.feature_file
    }

    /// Java step definition source
    #[inline]
    #[must_use]
    pub fn step_definitions(&self) -> &str {
        &self.step_definitions
    }

    /// Feature file name, e.g. `reject_duplicate_card.feature`
    ///
    /// Derived from the class name without its `Steps` suffix.
    #[must_use]
    pub fn feature_file_name(&self) -> String {
        let stem = self
            .class_name
            .strip_suffix(STEPS_SUFFIX)
            .unwrap_or(&self.class_name);
        let stem = if stem.is_empty() {
            FALLBACK_STEM.to_string()
        } else {
            snake_case(stem)
        };
        format!("{stem}.{}", FeatureFileRenderer::EXTENSION)
    }

    /// Relative path of the step class source, e.g. `com/example/FooSteps.java`
    #[must_use]
    pub fn step_file_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package_name.split('.').collect();
        path.push(format!(
            "{}.{}",
            self.class_name,
            StepDefinitionRenderer::EXTENSION
        ));
        path
    }
}

/// Render both artifacts for a parsed story
///
/// The configuration is used as given; see [`RenderConfig::validate`].
#[must_use]
pub fn generate_test_package(story: &Story, config: &RenderConfig) -> TestPackage {
    let feature_file = FeatureFileRenderer::new().render(story);
    let step_definitions = StepDefinitionRenderer::new(config.clone()).render(story);

    TestPackage {
        package_name: config.package_name.clone(),
        class_name: class_name(story.value_statement().goal()),
        feature_file,
        step_definitions,
    }
}

/// Parse story text and render both artifacts
///
/// # Errors
/// [`crate::StorygenError::Config`] if the configuration is invalid,
/// [`crate::StorygenError::Parse`] if the text is not a valid story
pub fn generate_from_text(text: &str, config: &RenderConfig) -> StorygenResult<TestPackage> {
    config.validate()?;
    let story = storygen_parser::parse_story(text)?;
    Ok(generate_test_package(&story, config))
}

/// Feature file text for a story
#[must_use]
pub fn generate_feature_file(story: &Story) -> String {
    FeatureFileRenderer::new().render(story)
}

/// Step definition source for a story in the given package
#[must_use]
pub fn generate_step_definitions(story: &Story, package_name: &str) -> String {
    StepDefinitionRenderer::new(RenderConfig::new().with_package_name(package_name)).render(story)
}
