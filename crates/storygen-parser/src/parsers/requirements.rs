//! Numbered requirements list parser
//!
//! A small line state machine: a line starting `<ASCII digits>.` opens a new
//! item, any other line extends the open item, and lines seen before the
//! first item are ignored.

use crate::error::ParseResult;
use crate::parsers::{content_lines, SectionParser};
use once_cell::sync::Lazy;
use regex::Regex;
use storygen_model::{Requirement, SectionKind};

static ITEM_START_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\.(?-u:\s)*(.*)").expect("item start pattern is valid"));

/// Parses a numbered, possibly multi-line, requirement list
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementListParser;

/// Item being accumulated
struct OpenItem {
    number: u32,
    text: String,
}

impl OpenItem {
    fn start(digits: &str, first_line: &str) -> Self {
        Self {
            number: digits.parse().unwrap_or(u32::MAX),
            text: first_line.to_string(),
        }
    }

    fn extend(&mut self, line: &str) {
        self.text.push(' ');
        self.text.push_str(line);
    }

    /// Close the item; an item that never received text is dropped
    fn finish(self) -> Option<Requirement> {
        if self.text.is_empty() {
            None
        } else {
            Some(Requirement::new(self.number, self.text.trim()))
        }
    }
}

impl SectionParser for RequirementListParser {
    type Output = Vec<Requirement>;

    const SECTION: SectionKind = SectionKind::Requirements;

    fn parse_section(&self, content: &str) -> ParseResult<Vec<Requirement>> {
        let mut requirements = Vec::new();
        let mut open: Option<OpenItem> = None;

        for line in content_lines(content) {
            if let Some(caps) = ITEM_START_PATTERN.captures(line) {
                if let Some(req) = open.take().and_then(OpenItem::finish) {
                    requirements.push(req);
                }
                open = Some(OpenItem::start(&caps[1], &caps[2]));
            } else if let Some(item) = open.as_mut() {
                item.extend(line);
            }
        }

        if let Some(req) = open.and_then(OpenItem::finish) {
            requirements.push(req);
        }

        tracing::debug!(requirements = requirements.len(), "parsed requirements");
        Ok(requirements)
    }
}
