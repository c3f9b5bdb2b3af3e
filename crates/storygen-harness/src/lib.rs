//! storygen Harness
//!
//! In-memory contracts behind the generated Cucumber step classes: the
//! `MultiServiceTestHarness`, `TestContext` and their collaborators,
//! expressed as Rust traits.
//!
//! # Core Concepts
//!
//! - [`MultiServiceHarness`]: Lifecycle plus service, event and schema checks for a scenario
//! - [`ServiceInvoker`] / [`ServiceConnector`]: Named service clients
//! - [`EventObserver`] / [`EventBusSpy`]: Record, await and assert-absent events
//! - [`SchemaValidator`] / [`SchemaCatalog`]: Static payload schemas
//! - [`ScenarioContext`]: Shared values and the registered harness
//!
//! Nothing here talks to a network; [`UnconnectedService`] reports every
//! call as not implemented.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use storygen_harness::{Event, MultiServiceHarness};
//!
//! # async fn run() -> storygen_harness::HarnessResult<()> {
//! let harness = MultiServiceHarness::new(["data cleanse"], ["ageRejected"]);
//! harness.setup();
//!
//! harness.event_bus().record(Event::empty("ageRejected").with_field("age", 121));
//! let event = harness.wait_for_event("ageRejected", Duration::from_secs(5)).await?;
//! assert_eq!(event.get("age"), Some(&serde_json::json!(121)));
//!
//! harness.teardown();
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

mod context;
mod error;
mod event;
mod harness;
pub mod schema;
pub mod service;
mod spy;

pub use context::ScenarioContext;
pub use error::{HarnessError, HarnessResult};
pub use event::Event;
pub use harness::MultiServiceHarness;
pub use schema::{FieldSpec, FieldType, SchemaCatalog, SchemaDefinition, SchemaValidator};
pub use service::{
    ServiceConnector, ServiceInvoker, ServiceRequest, ServiceResponse, UnconnectedConnector,
    UnconnectedService,
};
pub use spy::{EventBusSpy, EventObserver};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for step implementations
    pub use crate::context::ScenarioContext;
    pub use crate::error::{HarnessError, HarnessResult};
    pub use crate::event::Event;
    pub use crate::harness::MultiServiceHarness;
    pub use crate::schema::SchemaValidator;
    pub use crate::service::{ServiceInvoker, ServiceRequest};
    pub use crate::spy::EventObserver;
}
