//! Gherkin acceptance criteria parser

use crate::error::ParseResult;
use crate::parsers::{content_lines, SectionParser};
use storygen_model::{AcceptanceCriterion, SectionKind, StepKeyword};

const SCENARIO_PREFIX: &str = "Scenario:";
const AND_PREFIX: &str = "And ";

/// Step line classification
enum StepLine<'a> {
    Primary(StepKeyword, &'a str),
    And(&'a str),
}

impl<'a> StepLine<'a> {
    fn classify(line: &'a str) -> Option<Self> {
        for keyword in StepKeyword::ALL {
            if let Some(rest) = line
                .strip_prefix(keyword.as_str())
                .and_then(|rest| rest.strip_prefix(' '))
            {
                return Some(Self::Primary(keyword, rest.trim()));
            }
        }
        line.strip_prefix(AND_PREFIX)
            .map(|rest| Self::And(rest.trim()))
    }
}

/// Parses `Scenario:` blocks with Given/When/Then/And lines
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptanceCriteriaParser;

impl SectionParser for AcceptanceCriteriaParser {
    type Output = Vec<AcceptanceCriterion>;

    const SECTION: SectionKind = SectionKind::AcceptanceCriteria;

    fn parse_section(&self, content: &str) -> ParseResult<Vec<AcceptanceCriterion>> {
        let mut criteria = Vec::new();
        let mut current: Option<AcceptanceCriterion> = None;

        for line in content_lines(content) {
            if let Some(name) = line.strip_prefix(SCENARIO_PREFIX) {
                if let Some(done) = current.take() {
                    criteria.push(done);
                }
                current = Some(AcceptanceCriterion::new(name.trim()));
                continue;
            }

            let Some(criterion) = current.as_mut() else {
                continue;
            };

            match StepLine::classify(line) {
                Some(StepLine::Primary(keyword, statement)) => criterion.push(keyword, statement),
                Some(StepLine::And(statement)) => match criterion.continuation_keyword() {
                    Some(keyword) => criterion.push(keyword, statement),
                    None => tracing::warn!(
                        scenario = criterion.scenario_name(),
                        statement,
                        "dropping And step with no preceding Given/When/Then"
                    ),
                },
                None => {}
            }
        }

        if let Some(done) = current {
            criteria.push(done);
        }

        tracing::debug!(criteria = criteria.len(), "parsed acceptance criteria");
        Ok(criteria)
    }
}
