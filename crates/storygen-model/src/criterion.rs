//! Gherkin-style acceptance criterion

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary Gherkin step keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKeyword {
    /// Precondition
    Given,
    /// Action
    When,
    /// Outcome
    Then,
}

impl StepKeyword {
    /// All keywords in rendering order
    pub const ALL: [StepKeyword; 3] = [StepKeyword::Given, StepKeyword::When, StepKeyword::Then];

    /// Keyword as written in Gherkin
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKeyword::Given => "Given",
            StepKeyword::When => "When",
            StepKeyword::Then => "Then",
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scenario with its Given/When/Then statements
///
/// Statement lists only grow; there is no way to remove or reorder them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptanceCriterion {
    scenario_name: String,
    given: Vec<String>,
    when: Vec<String>,
    then: Vec<String>,
}

impl AcceptanceCriterion {
    /// Create criterion with no statements
    #[inline]
    #[must_use]
    pub fn new(scenario_name: impl Into<String>) -> Self {
        Self {
            scenario_name: scenario_name.into(),
            given: Vec::new(),
            when: Vec::new(),
            then: Vec::new(),
        }
    }

    /// Append a Given statement
    #[inline]
    pub fn push_given(&mut self, statement: impl Into<String>) {
        self.given.push(statement.into());
    }

    /// Append a When statement
    #[inline]
    pub fn push_when(&mut self, statement: impl Into<String>) {
        self.when.push(statement.into());
    }

    /// Append a Then statement
    #[inline]
    pub fn push_then(&mut self, statement: impl Into<String>) {
        self.then.push(statement.into());
    }

    /// Append a statement under the given keyword
    pub fn push(&mut self, keyword: StepKeyword, statement: impl Into<String>) {
        match keyword {
            StepKeyword::Given => self.push_given(statement),
            StepKeyword::When => self.push_when(statement),
            StepKeyword::Then => self.push_then(statement),
        }
    }

    /// Keyword an `And` line should extend: Then, else When, else Given
    ///
    /// Returns `None` while the scenario has no statements yet.
    #[must_use]
    pub fn continuation_keyword(&self) -> Option<StepKeyword> {
        if !self.then.is_empty() {
            Some(StepKeyword::Then)
        } else if !self.when.is_empty() {
            Some(StepKeyword::When)
        } else if !self.given.is_empty() {
            Some(StepKeyword::Given)
        } else {
            None
        }
    }

    /// Scenario name
    #[inline]
    #[must_use]
    pub fn scenario_name(&self) -> &str {
        &self.scenario_name
    }

    /// Given statements in order
    #[inline]
    #[must_use]
    pub fn given(&self) -> &[String] {
        &self.given
    }

    /// When statements in order
    #[inline]
    #[must_use]
    pub fn when(&self) -> &[String] {
        &self.when
    }

    /// Then statements in order
    #[inline]
    #[must_use]
    pub fn then(&self) -> &[String] {
        &self.then
    }

    /// Statements for one keyword
    #[inline]
    #[must_use]
    pub fn statements(&self, keyword: StepKeyword) -> &[String] {
        match keyword {
            StepKeyword::Given => &self.given,
            StepKeyword::When => &self.when,
            StepKeyword::Then => &self.then,
        }
    }

    /// All statements grouped Given, then When, then Then
    pub fn steps(&self) -> impl Iterator<Item = (StepKeyword, &str)> + '_ {
        StepKeyword::ALL.into_iter().flat_map(move |keyword| {
            self.statements(keyword)
                .iter()
                .map(move |s| (keyword, s.as_str()))
        })
    }
}

impl fmt::Display for AcceptanceCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scenario: {} [Given:{}, When:{}, Then:{}]",
            self.scenario_name,
            self.given.len(),
            self.when.len(),
            self.then.len()
        )
    }
}
