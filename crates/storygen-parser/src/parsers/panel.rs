//! Panel extraction
//!
//! Recognizes `{panel:title=<Title>[|<attrs>]}` ... `{panel}` blocks.

use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;
use storygen_model::Panel;

// Title runs to the first `|` or `}`; any further attributes are skipped.
static PANEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\{panel:title=([^|}]+)(?:[^}]+)?\}\s*(.*?)\s*\{panel\}")
        .expect("panel pattern is valid")
});

/// Splits story text into titled panels
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelExtractor;

impl PanelExtractor {
    /// Create new panel extractor
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract every panel in source order
    ///
    /// Panels do not nest; each opening marker pairs with the next closing
    /// marker.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidInput`] if the text is empty or blank
    pub fn extract(&self, text: &str) -> ParseResult<Vec<Panel>> {
        if text.trim().is_empty() {
            return Err(ParseError::InvalidInput);
        }

        let panels: Vec<Panel> = PANEL_PATTERN
            .captures_iter(text)
            .map(|caps| Panel::new(caps[1].trim(), &caps[2]))
            .collect();

        tracing::debug!(panels = panels.len(), "extracted panels");
        Ok(panels)
    }
}
