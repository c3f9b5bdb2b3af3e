//! Human-readable story summaries

use std::fmt;
use storygen_model::{ServiceTopology, Story};

pub(crate) struct StorySummary<'a>(pub(crate) &'a Story);

impl fmt::Display for StorySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let story = self.0;
        writeln!(f, "Value Statement")?;
        writeln!(f, "  {}", story.value_statement())?;

        writeln!(f)?;
        writeln!(f, "Requirements ({})", story.requirements().len())?;
        for req in story.requirements() {
            writeln!(f, "  {}. {}", req.number(), req.text())?;
            list(f, "     services", req.services())?;
            list(f, "     events", req.events())?;
            list(f, "     schemas", req.schemas())?;
        }

        writeln!(f)?;
        writeln!(f, "Acceptance Criteria ({})", story.acceptance_criteria().len())?;
        for criterion in story.acceptance_criteria() {
            writeln!(f, "  Scenario: {}", criterion.scenario_name())?;
            for (keyword, statement) in criterion.steps() {
                writeln!(f, "    {keyword} {statement}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Topology")?;
        TopologySummary(&story.topology()).fmt(f)
    }
}

pub(crate) struct TopologySummary<'a>(pub(crate) &'a ServiceTopology);

impl fmt::Display for TopologySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  services: {}", self.0.services().join(", "))?;
        writeln!(f, "  events: {}", self.0.events().join(", "))?;
        writeln!(f, "  schemas: {}", self.0.schemas().join(", "))
    }
}

// empty lists are skipped
fn list(f: &mut fmt::Formatter<'_>, label: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "{label}: {}", items.join(", "))
}
