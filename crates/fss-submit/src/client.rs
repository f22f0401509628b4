//! HTTP client for the simulation service.

use std::future::Future;

use reqwest::Client;
use reqwest::header::ACCEPT;

use fss_model::SimulationResult;

use crate::config::ClientSettings;
use crate::error::{Result, SubmissionError};
use crate::request::SimulationRequest;

/// Something that can run a simulation for a request.
///
/// The HTTP client is the production implementation; screens take any
/// backend so tests can observe calls without a network.
pub trait SimulationBackend {
    /// Run one simulation. Implementations must not retry.
    fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> impl Future<Output = Result<SimulationResult>>;
}

/// Client issuing `POST {endpoint}/simular`.
#[derive(Debug, Clone)]
pub struct HttpSimulationClient {
    client: Client,
    url: String,
}

impl HttpSimulationClient {
    /// Build a client from connection settings.
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .connect_timeout(settings.connect_timeout())
            .user_agent(concat!("fss/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| SubmissionError::Config(err.to_string()))?;

        Ok(Self {
            client,
            url: settings.simulate_url(),
        })
    }

    /// URL every request is posted to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SimulationBackend for HttpSimulationClient {
    async fn simulate(&self, request: &SimulationRequest) -> Result<SimulationResult> {
        tracing::info!(layout = %request.layout(), url = %self.url, "submitting simulation");

        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "simulation service rejected request");
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&bytes)?;
        tracing::debug!(bytes = bytes.len(), "simulation response received");

        Ok(SimulationResult::new(value))
    }
}
