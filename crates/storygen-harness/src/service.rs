//! Service invocation contracts

use crate::error::{HarnessError, HarnessResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Base URL used when no service discovery is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Request method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Read
    Get,
    /// Submit
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
        })
    }
}

/// Request sent to a service under test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Request method
    pub method: Method,
    /// Path appended to the service base URL
    pub endpoint: String,
    /// JSON body for submissions
    pub body: Option<Value>,
}

impl ServiceRequest {
    /// GET request
    #[must_use]
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            endpoint: endpoint.into(),
            body: None,
        }
    }

    /// POST request with JSON body
    #[must_use]
    pub fn post(endpoint: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            endpoint: endpoint.into(),
            body: Some(body),
        }
    }
}

/// Response from a service under test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    /// Status code
    pub status: u16,
    /// JSON body
    pub body: Value,
}

impl ServiceResponse {
    /// Response with a status and body
    #[inline]
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Check for a 2xx status
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client for one named service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceInvoker: Send + Sync {
    /// Name the service was configured under
    fn service_name(&self) -> &str;

    /// Send a request
    ///
    /// # Errors
    /// Implementation specific; [`UnconnectedService`] always returns
    /// [`HarnessError::NotImplemented`]
    async fn invoke(&self, request: ServiceRequest) -> HarnessResult<ServiceResponse>;
}

/// Creates service clients by name
pub trait ServiceConnector: Send + Sync {
    /// Client for a configured service
    fn connect(&self, service_name: &str) -> Arc<dyn ServiceInvoker>;
}

impl<F> ServiceConnector for F
where
    F: Fn(&str) -> Arc<dyn ServiceInvoker> + Send + Sync,
{
    fn connect(&self, service_name: &str) -> Arc<dyn ServiceInvoker> {
        self(service_name)
    }
}

/// Placeholder client that knows where its service lives but cannot call it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnconnectedService {
    name: String,
    base_url: String,
}

impl UnconnectedService {
    /// Client under [`DEFAULT_BASE_URL`]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_base(name, DEFAULT_BASE_URL)
    }

    /// Client under a custom base URL
    ///
    /// Spaces in the name become dashes in the path segment.
    #[must_use]
    pub fn with_base(name: impl Into<String>, base: &str) -> Self {
        let name = name.into();
        let base_url = format!("{}/{}", base.trim_end_matches('/'), name.replace(' ', "-"));
        Self { name, base_url }
    }

    /// Derived service URL
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ServiceInvoker for UnconnectedService {
    fn service_name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, request: ServiceRequest) -> HarnessResult<ServiceResponse> {
        Err(HarnessError::NotImplemented {
            operation: format!("{} {}{}", request.method, self.base_url, request.endpoint),
        })
    }
}

/// Connector producing [`UnconnectedService`] clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnconnectedConnector {
    base: String,
}

impl UnconnectedConnector {
    /// Connector under a custom base URL
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for UnconnectedConnector {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ServiceConnector for UnconnectedConnector {
    fn connect(&self, service_name: &str) -> Arc<dyn ServiceInvoker> {
        Arc::new(UnconnectedService::with_base(service_name, &self.base))
    }
}
