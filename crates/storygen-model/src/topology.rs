//! Service topology: the de-duplicated union of a story's references

use crate::requirement::Requirement;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Services, events and schemas named anywhere in a story's requirements
///
/// Each list holds a name at most once. The current order is first-seen,
/// but callers must treat it as unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTopology {
    services: Vec<String>,
    events: Vec<String>,
    schemas: Vec<String>,
}

impl ServiceTopology {
    /// Union the references of every requirement
    #[must_use]
    pub fn from_requirements<'a, I>(requirements: I) -> Self
    where
        I: IntoIterator<Item = &'a Requirement>,
    {
        let mut services = IndexSet::new();
        let mut events = IndexSet::new();
        let mut schemas = IndexSet::new();

        for req in requirements {
            services.extend(req.services().iter().cloned());
            events.extend(req.events().iter().cloned());
            schemas.extend(req.schemas().iter().cloned());
        }

        Self {
            services: services.into_iter().collect(),
            events: events.into_iter().collect(),
            schemas: schemas.into_iter().collect(),
        }
    }

    /// Distinct service names
    #[inline]
    #[must_use]
    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// Distinct event names
    #[inline]
    #[must_use]
    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Distinct schema file names
    #[inline]
    #[must_use]
    pub fn schemas(&self) -> &[String] {
        &self.schemas
    }

    /// True when no requirement named anything
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.events.is_empty() && self.schemas.is_empty()
    }
}

impl fmt::Display for ServiceTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ServiceTopology{{services={:?}, events={:?}, schemas={:?}}}",
            self.services, self.events, self.schemas
        )
    }
}
