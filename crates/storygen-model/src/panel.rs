//! Titled document section

use serde::{Deserialize, Serialize};

/// Sections a story is assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    /// "As a ... I want ... so that ..."
    ValueStatement,
    /// Numbered requirement list
    Requirements,
    /// Gherkin scenarios
    AcceptanceCriteria,
}

impl SectionKind {
    /// Title fragment that identifies this section (lower-case)
    #[inline]
    #[must_use]
    pub fn title_marker(&self) -> &'static str {
        match self {
            SectionKind::ValueStatement => "value statement",
            SectionKind::Requirements => "requirements",
            SectionKind::AcceptanceCriteria => "acceptance criteria",
        }
    }

    /// Classify a panel title by case-insensitive substring match
    ///
    /// Checked in declaration order, so a title naming two sections
    /// resolves to the first one.
    #[must_use]
    pub fn from_title(title: &str) -> Option<Self> {
        let lower = title.to_lowercase();
        [
            SectionKind::ValueStatement,
            SectionKind::Requirements,
            SectionKind::AcceptanceCriteria,
        ]
        .into_iter()
        .find(|kind| lower.contains(kind.title_marker()))
    }
}

/// A titled section of the source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    title: String,
    content: String,
}

impl Panel {
    /// Create panel; content is trimmed
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl AsRef<str>) -> Self {
        Self {
            title: title.into(),
            content: content.as_ref().trim().to_string(),
        }
    }

    /// Panel title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Trimmed panel body
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Section this panel feeds, if any
    #[inline]
    #[must_use]
    pub fn section_kind(&self) -> Option<SectionKind> {
        SectionKind::from_title(&self.title)
    }
}
