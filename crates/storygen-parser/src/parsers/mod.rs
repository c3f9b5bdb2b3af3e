//! Section parsers
//!
//! Each story section has its own parser:
//! - Value statement ("As a ... I want ... so that ...")
//! - Numbered requirements list
//! - Gherkin acceptance criteria
//!
//! Panels themselves are located by [`PanelExtractor`].

use crate::error::ParseResult;
use storygen_model::SectionKind;

mod acceptance;
mod panel;
mod requirements;
mod value_statement;

pub use acceptance::AcceptanceCriteriaParser;
pub use panel::PanelExtractor;
pub use requirements::RequirementListParser;
pub use value_statement::ValueStatementParser;

/// Parser for the body of one kind of panel
///
/// Implement this trait to support a new section.
pub trait SectionParser: Send + Sync + 'static {
    /// What the section parses into
    type Output;

    /// The section this parser handles
    const SECTION: SectionKind;

    /// Parse trimmed panel content
    ///
    /// # Errors
    /// Returns error if the content does not follow the section grammar
    fn parse_section(&self, content: &str) -> ParseResult<Self::Output>;

    /// Check whether a panel title belongs to this parser
    fn accepts_title(&self, title: &str) -> bool {
        SectionKind::from_title(title) == Some(Self::SECTION)
    }
}

/// Non-blank lines of a panel body, trimmed
///
/// Handles both `\n` and `\r\n` line endings.
pub(crate) fn content_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim).filter(|line| !line.is_empty())
}
