//! Client configuration for the simulation service.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Environment variable overriding the configured endpoint.
pub const ENDPOINT_ENV_VAR: &str = "FSS_API_URL";

/// Path appended to the endpoint for a simulation run.
pub const SIMULATE_PATH: &str = "/simular";

/// Connection settings for the simulation service.
///
/// The core imposes no timeout of its own; these are handed to the HTTP
/// client as its transport policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the service, without the `/simular` suffix.
    pub endpoint: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}

impl ClientSettings {
    /// Settings pointing at `endpoint`, other values default.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Full URL of the simulation route.
    #[must_use]
    pub fn simulate_url(&self) -> String {
        format!("{}{SIMULATE_PATH}", self.endpoint.trim_end_matches('/'))
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_url_strips_trailing_slash() {
        let settings = ClientSettings::with_endpoint("https://sim.example.com/api/");
        assert_eq!(settings.simulate_url(), "https://sim.example.com/api/simular");
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            ClientSettings::default().simulate_url(),
            "http://localhost:8000/simular"
        );
    }
}
