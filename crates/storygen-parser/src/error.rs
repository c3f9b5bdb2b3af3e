//! Error types for story parsing
//!
//! Every variant is fatal for the parse call that raised it; no partial
//! story is ever returned.

use storygen_model::SectionKind;

/// Errors raised while turning story text into a [`storygen_model::Story`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Source text was absent, empty or whitespace only
    #[error("story text cannot be null or empty")]
    InvalidInput,

    /// A required section has no panel
    #[error("story must contain a {} panel", .section.title_marker())]
    MissingSection {
        /// The section that was not found
        section: SectionKind,
    },

    /// A section's content does not follow its grammar
    #[error("invalid {} format: {content}", .section.title_marker())]
    InvalidFormat {
        /// The section being parsed
        section: SectionKind,
        /// Offending panel content, kept for diagnostics
        content: String,
    },
}

impl ParseError {
    /// Create missing-section error
    #[inline]
    #[must_use]
    pub fn missing_section(section: SectionKind) -> Self {
        Self::MissingSection { section }
    }

    /// Create invalid-format error carrying the offending content
    #[inline]
    pub fn invalid_format(section: SectionKind, content: impl Into<String>) -> Self {
        Self::InvalidFormat {
            section,
            content: content.into(),
        }
    }

    /// Section the error refers to, if any
    #[inline]
    #[must_use]
    pub fn section(&self) -> Option<SectionKind> {
        match self {
            Self::InvalidInput => None,
            Self::MissingSection { section } | Self::InvalidFormat { section, .. } => {
                Some(*section)
            }
        }
    }
}

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;
