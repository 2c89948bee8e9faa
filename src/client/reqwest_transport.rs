use reqwest::Method;
use reqwest::blocking::{Client, Response};
use serde_json::Value;
use tracing::{trace, warn};

use crate::api::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};

use super::{ApiRequest, HttpMethod, HttpTransport};

/// Blocking `reqwest` transport rooted at the configured API base URL.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        let client = build_client(config)?;
        Ok(Self::with_client(&config.api_base_url, client))
    }

    #[must_use]
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &ApiRequest) -> DashboardResult<Value> {
        let url = self.url_for(&request.path);
        let mut builder = self.client.request(to_method(request.method), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|source| {
            warn!(url = %url, error = %source, "api request failed");
            DashboardError::Transport {
                url: url.clone(),
                source,
            }
        })?;
        decode_json(response, &url)
    }
}

pub(super) fn build_client(config: &DashboardConfig) -> DashboardResult<Client> {
    Client::builder()
        .timeout(config.request_timeout())
        .build()
        .map_err(|source| DashboardError::Transport {
            url: config.api_base_url.clone(),
            source,
        })
}

pub(super) fn ensure_success(response: Response, url: &str) -> DashboardResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(DashboardError::HttpStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        })
    }
}

fn decode_json(response: Response, url: &str) -> DashboardResult<Value> {
    let text = ensure_success(response, url)?
        .text()
        .map_err(|source| DashboardError::Transport {
            url: url.to_owned(),
            source,
        })?;
    trace!(url = %url, bytes = text.len(), "api response");
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_without_double_slash() {
        let transport = ReqwestTransport::with_client("https://api.example.com/v1/", Client::new());
        assert_eq!(
            transport.url_for("/users/auth"),
            "https://api.example.com/v1/users/auth"
        );
        assert_eq!(
            transport.url_for("users/auth"),
            "https://api.example.com/v1/users/auth"
        );
    }

    #[test]
    fn transport_rejects_invalid_config() {
        let config = DashboardConfig::new("ftp://example.com");
        assert!(ReqwestTransport::new(&config).is_err());
    }
}
