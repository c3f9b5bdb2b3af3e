//! storygen Story Model
//!
//! Typed, immutable representation of a parsed user story.
//!
//! # Core Concepts
//!
//! - [`Story`]: Value statement + numbered requirements + acceptance criteria
//! - [`ValueStatement`]: The "As a ... I want ... so that ..." triple
//! - [`Requirement`]: One numbered obligation with extracted service/event/schema names
//! - [`AcceptanceCriterion`]: One Given/When/Then scenario
//! - [`ServiceTopology`]: De-duplicated union of a story's services, events and schemas
//! - [`Panel`]: A titled section of the source document (parse-time only)
//!
//! # Example
//!
//! ```rust
//! use storygen_model::{Requirement, Story, ValueStatement};
//!
//! let statement = ValueStatement::new("user", "export reports", "I can share them");
//! let requirements = vec![
//!     Requirement::new(1, r#"call the "reporting" service"#),
//!     Requirement::new(2, r#"call the "reporting" service again"#),
//! ];
//! let story = Story::new(statement, requirements, Vec::new());
//!
//! let topology = story.topology();
//! assert_eq!(topology.services(), ["reporting".to_string()]);
//! ```

#![warn(unreachable_pub)]

mod criterion;
mod panel;
mod requirement;
mod story;
mod topology;

pub use criterion::{AcceptanceCriterion, StepKeyword};
pub use panel::{Panel, SectionKind};
pub use requirement::Requirement;
pub use story::{Story, ValueStatement};
pub use topology::ServiceTopology;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the story model
    pub use crate::{
        AcceptanceCriterion, Panel, Requirement, SectionKind, ServiceTopology, StepKeyword, Story,
        ValueStatement,
    };
}
