//! Story assembly from panels

use crate::error::{ParseError, ParseResult};
use crate::parsers::{
    AcceptanceCriteriaParser, PanelExtractor, RequirementListParser, SectionParser,
    ValueStatementParser,
};
use storygen_model::{SectionKind, Story, ValueStatement};

/// Parses a complete panel-formatted story
#[derive(Debug, Clone, Copy, Default)]
pub struct StoryParser {
    panels: PanelExtractor,
    value_statement: ValueStatementParser,
    requirements: RequirementListParser,
    acceptance_criteria: AcceptanceCriteriaParser,
}

impl StoryParser {
    /// Create new story parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse story text
    ///
    /// Panels are processed in source order. When a section appears more
    /// than once, the later panel replaces the earlier one. A malformed
    /// value statement fails the whole parse even if a later one is valid.
    ///
    /// # Errors
    /// - [`ParseError::InvalidInput`] if the text is empty or blank
    /// - [`ParseError::InvalidFormat`] if a value statement is malformed
    /// - [`ParseError::MissingSection`] if there is no value statement panel
    pub fn parse(&self, text: &str) -> ParseResult<Story> {
        let panels = self.panels.extract(text)?;

        let mut value_statement: Option<ValueStatement> = None;
        let mut requirements = Vec::new();
        let mut acceptance_criteria = Vec::new();

        for panel in &panels {
            match panel.section_kind() {
                Some(SectionKind::ValueStatement) => {
                    let parsed = self.value_statement.parse_section(panel.content())?;
                    if value_statement.is_some() {
                        tracing::warn!(
                            title = panel.title(),
                            "value statement panel overrides an earlier one"
                        );
                    }
                    value_statement = Some(parsed);
                }
                Some(SectionKind::Requirements) => {
                    requirements = self.requirements.parse_section(panel.content())?;
                }
                Some(SectionKind::AcceptanceCriteria) => {
                    acceptance_criteria =
                        self.acceptance_criteria.parse_section(panel.content())?;
                }
                None => {
                    tracing::trace!(title = panel.title(), "ignoring unrecognized panel");
                }
            }
        }

        let value_statement = value_statement
            .ok_or_else(|| ParseError::missing_section(SectionKind::ValueStatement))?;

        Ok(Story::new(value_statement, requirements, acceptance_criteria))
    }

    /// Parse possibly-absent story text
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidInput`] for `None`, otherwise as
    /// [`StoryParser::parse`]
    pub fn parse_opt(&self, text: Option<&str>) -> ParseResult<Story> {
        text.map_or(Err(ParseError::InvalidInput), |text| self.parse(text))
    }
}

/// Parse story text with a default parser
///
/// # Errors
/// See [`StoryParser::parse`]
#[inline]
pub fn parse_story(text: &str) -> ParseResult<Story> {
    StoryParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUE_STATEMENT: &str =
        "{panel:title=Value Statement}\nAs a user, I want something, so that benefit.\n{panel}";

    #[test]
    fn value_statement_only() {
        let story = parse_story(VALUE_STATEMENT).unwrap();

        assert_eq!(story.value_statement().persona(), "user");
        assert_eq!(story.value_statement().goal(), "something");
        assert_eq!(story.value_statement().benefit(), "benefit.");
        assert!(story.requirements().is_empty());
        assert!(story.acceptance_criteria().is_empty());
    }

    #[test]
    fn empty_and_none_are_invalid_input() {
        let parser = StoryParser::new();
        assert_eq!(parser.parse(""), Err(ParseError::InvalidInput));
        assert_eq!(parser.parse_opt(None), Err(ParseError::InvalidInput));
        assert!(parser.parse_opt(Some(VALUE_STATEMENT)).is_ok());
    }

    #[test]
    fn missing_value_statement() {
        let text = "{panel:title=Requirements}\n1. do something\n{panel}";
        assert_eq!(
            parse_story(text),
            Err(ParseError::missing_section(SectionKind::ValueStatement))
        );
    }

    #[test]
    fn text_without_panels_is_missing_section() {
        assert!(matches!(
            parse_story("As a user, I want something, so that benefit."),
            Err(ParseError::MissingSection { .. })
        ));
    }

    #[test]
    fn malformed_value_statement() {
        let text = "{panel:title=Value Statement}\nThis is not a valid value statement format\n{panel}";
        assert!(matches!(
            parse_story(text),
            Err(ParseError::InvalidFormat { section: SectionKind::ValueStatement, .. })
        ));
    }

    #[test]
    fn last_value_statement_wins() {
        let text = format!(
            "{VALUE_STATEMENT}\n{{panel:title=Value Statement}}\nAs a manager, I want control, so that order.\n{{panel}}"
        );
        let story = parse_story(&text).unwrap();

        assert_eq!(story.value_statement().persona(), "manager");
        assert_eq!(story.value_statement().goal(), "control");
    }

    #[test]
    fn malformed_value_statement_fails_even_if_later_one_is_valid() {
        let text = format!("{{panel:title=Value Statement}}\nnonsense\n{{panel}}\n{VALUE_STATEMENT}");
        assert!(matches!(
            parse_story(&text),
            Err(ParseError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn last_requirements_panel_wins() {
        let text = format!(
            "{VALUE_STATEMENT}\n{{panel:title=Requirements}}\n1. first\n{{panel}}\n\
             {{panel:title=Requirements}}\n1. second\n2. third\n{{panel}}"
        );
        let story = parse_story(&text).unwrap();
        assert_eq!(story.requirements().len(), 2);
        assert_eq!(story.requirements()[0].text(), "second");
    }

    #[test]
    fn unrecognized_panels_are_ignored() {
        let text = format!("{{panel:title=Notes}}\nAnything\n{{panel}}\n{VALUE_STATEMENT}");
        assert!(parse_story(&text).is_ok());
    }
}
