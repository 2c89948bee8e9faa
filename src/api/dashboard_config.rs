use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::DisplayTimeZone;
use crate::error::{DashboardError, DashboardResult};

use super::DEFAULT_CHART_HEIGHT;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Dashboard bootstrap configuration.
///
/// Serializable so hosts can persist and reload it; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
    #[serde(default)]
    pub time_zone: DisplayTimeZone,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            chart_height: default_chart_height(),
            time_zone: DisplayTimeZone::default(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn with_chart_height(mut self, height: u32) -> Self {
        self.chart_height = height;
        self
    }

    #[must_use]
    pub fn with_time_zone(mut self, time_zone: DisplayTimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !is_http_url(&self.api_base_url) {
            return Err(DashboardError::InvalidConfig(format!(
                "api base url must start with http:// or https://, got `{}`",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(DashboardError::InvalidConfig(
                "request timeout must be > 0 seconds".to_owned(),
            ));
        }
        if self.chart_height == 0 {
            return Err(DashboardError::InvalidConfig(
                "chart height must be > 0".to_owned(),
            ));
        }
        self.time_zone.validate()
    }

    /// Parses and validates a JSON document; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[must_use]
pub fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_owned()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_chart_height() -> u32 {
    DEFAULT_CHART_HEIGHT
}
