use reqwest::blocking::Client;
use tracing::debug;

use crate::api::DashboardConfig;
use crate::core::ArtifactRef;
use crate::error::{DashboardError, DashboardResult};

use super::reqwest_transport::{build_client, ensure_success};

/// Retrieves the raw body of an artifact.
pub trait ArtifactFetcher {
    fn fetch(&self, artifact: &ArtifactRef) -> DashboardResult<String>;
}

/// Fetches artifacts with a GET on their URL.
#[derive(Debug, Clone)]
pub struct HttpArtifactFetcher {
    client: Client,
}

impl HttpArtifactFetcher {
    pub fn new(config: &DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Self {
            client: build_client(config)?,
        })
    }

    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl ArtifactFetcher for HttpArtifactFetcher {
    fn fetch(&self, artifact: &ArtifactRef) -> DashboardResult<String> {
        debug!(name = %artifact.name, uuid = %artifact.uuid, "requesting artifact");
        let transport_error = |source: reqwest::Error| DashboardError::Transport {
            url: artifact.url.clone(),
            source,
        };
        let response = self
            .client
            .get(&artifact.url)
            .send()
            .map_err(transport_error)?;
        ensure_success(response, &artifact.url)?
            .text()
            .map_err(transport_error)
    }
}
