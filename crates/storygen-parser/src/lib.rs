//! storygen Story Parser
//!
//! Turns panel-formatted story text into a [`storygen_model::Story`].
//!
//! # Input Format
//!
//! ```text
//! {panel:title=Value Statement | titleBGColor=#b9d9ed}
//! As a <persona>, I want [to] <goal>, so that <benefit>
//! {panel}
//! {panel:title=Requirements}
//! 1. update the "data cleanse" service ...
//! 2. ensure the "ageRejected" event is triggered ...
//! {panel}
//! {panel:title=Acceptance Criteria}
//! Scenario: ...
//! Given ... / When ... / Then ... / And ...
//! {panel}
//! ```
//!
//! # Architecture
//!
//! ```text
//! text → PanelExtractor → [Panel] ─┬→ ValueStatementParser     ─┐
//!                                  ├→ RequirementListParser    ─┼→ Story
//!                                  └→ AcceptanceCriteriaParser ─┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use storygen_parser::parse_story;
//!
//! let story = parse_story(
//!     "{panel:title=Value Statement}\nAs a user, I want something, so that benefit.\n{panel}",
//! )?;
//! assert_eq!(story.value_statement().goal(), "something");
//! # Ok::<(), storygen_parser::ParseError>(())
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod parsers;
mod story;

pub use error::{ParseError, ParseResult};
pub use story::{parse_story, StoryParser};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for parsing stories
    pub use crate::error::{ParseError, ParseResult};
    pub use crate::parsers::{
        AcceptanceCriteriaParser, PanelExtractor, RequirementListParser, SectionParser,
        ValueStatementParser,
    };
    pub use crate::story::{parse_story, StoryParser};
}
