//! Submission client for the factory simulation service.
//!
//! A [`SimulationRequest`] is built from a committed parameter set and posted
//! to `{endpoint}/simular`. Every failure (transport, non-2xx status, bad
//! JSON) surfaces as one [`SubmissionError`] with a single user message; no
//! retry happens here. [`SubmissionGate`] keeps at most one request in flight
//! per screen.

pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod request;

pub use client::{HttpSimulationClient, SimulationBackend};
pub use config::{ClientSettings, DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR};
pub use error::{Result, SUBMISSION_FAILED_MESSAGE, SubmissionError};
pub use gate::{InFlight, SubmissionGate, SubmitOutcome, submit_exclusive};
pub use request::SimulationRequest;
