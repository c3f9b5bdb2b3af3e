//! Gherkin feature file rendering

use crate::naming::feature_name;
use crate::renderer::StoryRenderer;
use std::fmt;
use storygen_model::{AcceptanceCriterion, ServiceTopology, StepKeyword, Story};

const AND: &str = "And";

/// Renders a story as a Gherkin feature file
///
/// ```text
/// Feature: <Goal>
///   As a <persona>, I want <goal>, so that <benefit>
///
///   Background:
///     Given the "<service>" service is running
///     And event consumers are ready to receive events
///     And the Avro schema registry is accessible
///
///   Scenario: <name>
///     Given ...
///     And ...
/// ```
///
/// The background is omitted when no requirement names a service.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureFileRenderer;

impl FeatureFileRenderer {
    /// Create new renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Background block for a topology, `None` when it has no services
    #[must_use]
    pub fn background(&self, topology: &ServiceTopology) -> Option<String> {
        (!topology.services().is_empty()).then(|| Background(topology).to_string())
    }

    /// Scenario block for one criterion, without the trailing blank line
    #[must_use]
    pub fn scenario(&self, criterion: &AcceptanceCriterion) -> String {
        Scenario(criterion).to_string()
    }
}

impl StoryRenderer for FeatureFileRenderer {
    const EXTENSION: &'static str = "feature";

    fn render(&self, story: &Story) -> String {
        let topology = story.topology();
        tracing::debug!(
            services = topology.services().len(),
            events = topology.events().len(),
            schemas = topology.schemas().len(),
            scenarios = story.acceptance_criteria().len(),
            "rendering feature file"
        );
        FeatureFile { story, topology: &topology }.to_string()
    }
}

struct FeatureFile<'a> {
    story: &'a Story,
    topology: &'a ServiceTopology,
}

impl fmt::Display for FeatureFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value_statement = self.story.value_statement();
        writeln!(f, "Feature: {}", feature_name(value_statement.goal()))?;
        writeln!(f, "  {value_statement}")?;
        writeln!(f)?;

        if !self.topology.services().is_empty() {
            Background(self.topology).fmt(f)?;
        }

        for criterion in self.story.acceptance_criteria() {
            Scenario(criterion).fmt(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

struct Background<'a>(&'a ServiceTopology);

impl fmt::Display for Background<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Background:")?;
        for service in self.0.services() {
            writeln!(f, "    Given the \"{service}\" service is running")?;
        }
        if !self.0.events().is_empty() {
            writeln!(f, "    And event consumers are ready to receive events")?;
        }
        if !self.0.schemas().is_empty() {
            writeln!(f, "    And the Avro schema registry is accessible")?;
        }
        writeln!(f)
    }
}

struct Scenario<'a>(&'a AcceptanceCriterion);

impl fmt::Display for Scenario<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Scenario: {}", self.0.scenario_name())?;
        for keyword in StepKeyword::ALL {
            for (i, statement) in self.0.statements(keyword).iter().enumerate() {
                let word = if i == 0 { keyword.as_str() } else { AND };
                writeln!(f, "    {word} {statement}")?;
            }
        }
        Ok(())
    }
}
