//! Harness error types

use std::time::Duration;
use thiserror::Error;

/// Harness errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// Service was not in the harness configuration
    #[error("service not configured: {service}")]
    ServiceNotConfigured {
        /// Requested service
        service: String,
    },

    /// Event type was never subscribed
    #[error("not subscribed to event type: {event_type}")]
    NotSubscribed {
        /// Requested event type
        event_type: String,
    },

    /// No event arrived before the deadline
    #[error("event {event_type} was not received within {timeout:?}")]
    EventTimeout {
        /// Awaited event type
        event_type: String,
        /// How long the wait lasted
        timeout: Duration,
    },

    /// Event was published when it should not have been
    #[error("event {event_type} should not have been published")]
    UnexpectedEvent {
        /// Offending event type
        event_type: String,
    },

    /// Schema is not in the catalog
    #[error("unknown schema: {schema}")]
    UnknownSchema {
        /// Requested schema
        schema: String,
    },

    /// Event payload does not satisfy the schema
    #[error("event {event_type} violates schema {schema}: {reason}")]
    SchemaViolation {
        /// Checked event type
        event_type: String,
        /// Schema checked against
        schema: String,
        /// First violation found
        reason: String,
    },

    /// Operation has no in-memory implementation
    #[error("not implemented: {operation}")]
    NotImplemented {
        /// What was attempted
        operation: String,
    },

    /// Scenario context has no harness registered
    #[error("no harness registered on scenario context")]
    HarnessNotRegistered,

    /// Stored context value has a different shape than requested
    #[error("context value {key} could not be read: {reason}")]
    ContextValue {
        /// Context key
        key: String,
        /// Conversion failure
        reason: String,
    },
}

impl HarnessError {
    /// Create service not configured error
    #[inline]
    #[must_use]
    pub fn service_not_configured(service: impl Into<String>) -> Self {
        Self::ServiceNotConfigured {
            service: service.into(),
        }
    }

    /// Create not subscribed error
    #[inline]
    #[must_use]
    pub fn not_subscribed(event_type: impl Into<String>) -> Self {
        Self::NotSubscribed {
            event_type: event_type.into(),
        }
    }

    /// Create schema violation error
    #[inline]
    #[must_use]
    pub fn schema_violation(
        event_type: impl Into<String>,
        schema: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::SchemaViolation {
            event_type: event_type.into(),
            schema: schema.into(),
            reason: reason.into(),
        }
    }

    /// Check if the error is an assertion failure rather than a setup problem
    #[must_use]
    pub fn is_assertion_failure(&self) -> bool {
        matches!(
            self,
            Self::EventTimeout { .. } | Self::UnexpectedEvent { .. } | Self::SchemaViolation { .. }
        )
    }
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;
