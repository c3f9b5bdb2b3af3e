//! Multi-service harness

use crate::error::{HarnessError, HarnessResult};
use crate::event::Event;
use crate::schema::{SchemaCatalog, SchemaValidator};
use crate::service::{ServiceConnector, ServiceInvoker, UnconnectedConnector};
use crate::spy::{EventBusSpy, EventObserver};
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use storygen_model::ServiceTopology;

/// Services and events a scenario runs against
///
/// Composes a [`ServiceConnector`], an [`EventObserver`] and a
/// [`SchemaValidator`]. Defaults are [`UnconnectedConnector`],
/// [`EventBusSpy`] and an empty [`SchemaCatalog`].
///
/// Lifecycle: [`setup`](Self::setup) connects every configured service and
/// subscribes every configured event, [`reset`](Self::reset) clears events
/// between scenarios, [`teardown`](Self::teardown) drops clients and events.
pub struct MultiServiceHarness {
    configured_services: Vec<String>,
    configured_events: Vec<String>,
    connector: Box<dyn ServiceConnector>,
    clients: DashMap<String, Arc<dyn ServiceInvoker>>,
    event_bus: Arc<dyn EventObserver>,
    schemas: Arc<dyn SchemaValidator>,
}

impl MultiServiceHarness {
    /// Create harness for named services and events
    #[must_use]
    pub fn new<S, E>(services: S, events: E) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            configured_services: services.into_iter().map(Into::into).collect(),
            configured_events: events.into_iter().map(Into::into).collect(),
            connector: Box::new(UnconnectedConnector::default()),
            clients: DashMap::new(),
            event_bus: Arc::new(EventBusSpy::new()),
            schemas: Arc::new(SchemaCatalog::new()),
        }
    }

    /// Create harness for a story's services and events
    #[must_use]
    pub fn from_topology(topology: &ServiceTopology) -> Self {
        Self::new(topology.services().iter().cloned(), topology.events().iter().cloned())
    }

    /// With service connector
    #[must_use]
    pub fn with_connector(mut self, connector: impl ServiceConnector + 'static) -> Self {
        self.connector = Box::new(connector);
        self
    }

    /// With event observer
    #[must_use]
    pub fn with_event_observer(mut self, observer: Arc<dyn EventObserver>) -> Self {
        self.event_bus = observer;
        self
    }

    /// With schema validator
    #[must_use]
    pub fn with_schema_validator(mut self, validator: Arc<dyn SchemaValidator>) -> Self {
        self.schemas = validator;
        self
    }

    /// Connect services and subscribe events
    pub fn setup(&self) {
        for service in &self.configured_services {
            self.clients
                .insert(service.clone(), self.connector.connect(service));
        }
        for event_type in &self.configured_events {
            self.event_bus.subscribe(event_type);
        }
        tracing::debug!(
            services = self.configured_services.len(),
            events = self.configured_events.len(),
            "harness set up"
        );
    }

    /// Drop service clients and recorded events
    pub fn teardown(&self) {
        self.clients.clear();
        self.event_bus.clear();
        tracing::debug!("harness torn down");
    }

    /// Clear recorded events, keeping clients and subscriptions
    pub fn reset(&self) {
        self.event_bus.clear();
    }

    /// Client for a configured service
    ///
    /// # Errors
    /// [`HarnessError::ServiceNotConfigured`] if the service is unknown or
    /// the harness is not set up
    pub fn service(&self, name: &str) -> HarnessResult<Arc<dyn ServiceInvoker>> {
        self.clients
            .get(name)
            .map(|client| Arc::clone(client.value()))
            .ok_or_else(|| HarnessError::service_not_configured(name))
    }

    /// Wait for the next event of a type
    ///
    /// # Errors
    /// [`HarnessError::EventTimeout`] if none arrives in time,
    /// [`HarnessError::NotSubscribed`] for unconfigured types
    pub async fn wait_for_event(&self, event_type: &str, timeout: Duration) -> HarnessResult<Event> {
        self.event_bus
            .wait_for(event_type, timeout)
            .await?
            .ok_or_else(|| HarnessError::EventTimeout {
                event_type: event_type.to_string(),
                timeout,
            })
    }

    /// Assert no event of a type was recorded
    ///
    /// # Errors
    /// [`HarnessError::UnexpectedEvent`] if one was
    pub fn verify_event_not_published(&self, event_type: &str) -> HarnessResult<()> {
        if self.event_bus.has_event(event_type) {
            return Err(HarnessError::UnexpectedEvent {
                event_type: event_type.to_string(),
            });
        }
        Ok(())
    }

    /// Validate an event against a named schema
    ///
    /// # Errors
    /// As [`SchemaValidator::validate`]
    pub fn verify_schema_conformance(&self, event: &Event, schema_name: &str) -> HarnessResult<()> {
        self.schemas.validate(event, schema_name)
    }

    /// Recorded events of a type
    #[must_use]
    pub fn events(&self, event_type: &str) -> Vec<Event> {
        self.event_bus.events(event_type)
    }

    /// Event observer in use, for recording from producers
    #[inline]
    #[must_use]
    pub fn event_bus(&self) -> &Arc<dyn EventObserver> {
        &self.event_bus
    }

    /// Configured service names
    #[inline]
    #[must_use]
    pub fn configured_services(&self) -> &[String] {
        &self.configured_services
    }

    /// Configured event types
    #[inline]
    #[must_use]
    pub fn configured_events(&self) -> &[String] {
        &self.configured_events
    }
}

impl fmt::Debug for MultiServiceHarness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiServiceHarness")
            .field("configured_services", &self.configured_services)
            .field("configured_events", &self.configured_events)
            .field("connected", &self.clients.len())
            .finish_non_exhaustive()
    }
}
