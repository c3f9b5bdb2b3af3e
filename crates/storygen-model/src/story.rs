//! Story and value statement types

use crate::criterion::AcceptanceCriterion;
use crate::requirement::Requirement;
use crate::topology::ServiceTopology;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The "As a <persona>, I want <goal>, so that <benefit>" triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueStatement {
    persona: String,
    goal: String,
    benefit: String,
}

impl ValueStatement {
    /// Create value statement from its three parts
    #[inline]
    #[must_use]
    pub fn new(
        persona: impl Into<String>,
        goal: impl Into<String>,
        benefit: impl Into<String>,
    ) -> Self {
        Self {
            persona: persona.into(),
            goal: goal.into(),
            benefit: benefit.into(),
        }
    }

    /// Who wants the change
    #[inline]
    #[must_use]
    pub fn persona(&self) -> &str {
        &self.persona
    }

    /// What they want
    #[inline]
    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Why they want it
    #[inline]
    #[must_use]
    pub fn benefit(&self) -> &str {
        &self.benefit
    }
}

impl fmt::Display for ValueStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "As a {}, I want {}, so that {}",
            self.persona, self.goal, self.benefit
        )
    }
}

/// A fully parsed user story
///
/// Built in one step from its parts. Requirements and criteria are only
/// handed out by shared reference, so nothing changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    value_statement: ValueStatement,
    requirements: Vec<Requirement>,
    acceptance_criteria: Vec<AcceptanceCriterion>,
}

impl Story {
    /// Assemble a story
    #[inline]
    #[must_use]
    pub fn new(
        value_statement: ValueStatement,
        requirements: Vec<Requirement>,
        acceptance_criteria: Vec<AcceptanceCriterion>,
    ) -> Self {
        Self {
            value_statement,
            requirements,
            acceptance_criteria,
        }
    }

    /// Get value statement
    #[inline]
    #[must_use]
    pub fn value_statement(&self) -> &ValueStatement {
        &self.value_statement
    }

    /// Get requirements in source order
    #[inline]
    #[must_use]
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Get acceptance criteria in source order
    #[inline]
    #[must_use]
    pub fn acceptance_criteria(&self) -> &[AcceptanceCriterion] {
        &self.acceptance_criteria
    }

    /// Reduce the requirements into a service topology
    ///
    /// Recomputed on every call.
    #[inline]
    #[must_use]
    pub fn topology(&self) -> ServiceTopology {
        ServiceTopology::from_requirements(&self.requirements)
    }
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Story{{valueStatement={}, requirements={}, acceptanceCriteria={}}}",
            self.value_statement,
            self.requirements.len(),
            self.acceptance_criteria.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_statement_display() {
        let vs = ValueStatement::new("user", "something", "benefit.");
        assert_eq!(vs.to_string(), "As a user, I want something, so that benefit.");
    }

    #[test]
    fn story_accessors() {
        let mut criterion = AcceptanceCriterion::new("works");
        criterion.push_given("a precondition");

        let story = Story::new(
            ValueStatement::new("user", "goal", "benefit"),
            vec![Requirement::new(1, "do something")],
            vec![criterion],
        );

        assert_eq!(story.value_statement().persona(), "user");
        assert_eq!(story.requirements().len(), 1);
        assert_eq!(story.acceptance_criteria()[0].scenario_name(), "works");
    }

    #[test]
    fn story_display_counts() {
        let story = Story::new(ValueStatement::new("a", "b", "c"), Vec::new(), Vec::new());
        let shown = story.to_string();
        assert!(shown.contains("requirements=0"));
        assert!(shown.contains("acceptanceCriteria=0"));
    }

    #[test]
    fn story_serde_roundtrip() {
        let story = Story::new(
            ValueStatement::new("user", "goal", "benefit"),
            vec![Requirement::new(1, r#"call the "payment" service"#)],
            Vec::new(),
        );
        let json = serde_json::to_string(&story).unwrap();
        let back: Story = serde_json::from_str(&json).unwrap();
        assert_eq!(story, back);
    }
}
