//! Value statement parser
//!
//! Grammar (case-insensitive, may span lines):
//!
//! ```text
//! As a <persona>, I want [to] <goal>, so that <benefit>
//! ```

use crate::error::{ParseError, ParseResult};
use crate::parsers::SectionParser;
use once_cell::sync::Lazy;
use regex::Regex;
use storygen_model::{SectionKind, ValueStatement};

// persona stops at the first comma; goal stops at the comma before "so that".
// Whitespace is ASCII only.
static VALUE_STATEMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)As a(?-u:\s)+([^,]+),(?-u:\s)*I want(?:(?-u:\s)+to)?(?-u:\s)+(.+?),(?-u:\s)*so that(?-u:\s)+(.+)",
    )
        .expect("value statement pattern is valid")
});

/// Parses the persona/goal/benefit triple
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueStatementParser;

impl SectionParser for ValueStatementParser {
    type Output = ValueStatement;

    const SECTION: SectionKind = SectionKind::ValueStatement;

    fn parse_section(&self, content: &str) -> ParseResult<ValueStatement> {
        let caps = VALUE_STATEMENT_PATTERN
            .captures(content)
            .ok_or_else(|| ParseError::invalid_format(Self::SECTION, content))?;

        let (persona, goal, benefit) = (caps[1].trim(), caps[2].trim(), caps[3].trim());
        if persona.is_empty() || goal.is_empty() || benefit.is_empty() {
            return Err(ParseError::invalid_format(Self::SECTION, content));
        }

        Ok(ValueStatement::new(persona, goal, benefit))
    }
}
