//! HTTP plumbing: the request model, the transport seam and the
//! user/organization service facade.

mod artifact_fetcher;
mod reqwest_transport;
mod services;

pub use artifact_fetcher::{ArtifactFetcher, HttpArtifactFetcher};
pub use reqwest_transport::ReqwestTransport;
pub use services::DashboardApi;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::DashboardResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Transport abstraction so the facade can be exercised without a server.
pub trait HttpTransport {
    /// Sends `request` and returns the decoded JSON response body.
    fn send(&self, request: &ApiRequest) -> DashboardResult<Value>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn send(&self, request: &ApiRequest) -> DashboardResult<Value> {
        (**self).send(request)
    }
}
