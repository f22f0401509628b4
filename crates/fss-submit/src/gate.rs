//! One-submission-at-a-time gate.

use std::cell::Cell;

use fss_model::SimulationResult;

use crate::client::SimulationBackend;
use crate::error::SubmissionError;
use crate::request::SimulationRequest;

/// Loading flag of a screen.
///
/// The flag is raised for the lifetime of an [`InFlight`] guard. Screens run
/// on a single thread, so a plain `Cell` is enough.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    in_flight: Cell<bool>,
}

impl SubmissionGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is outstanding (the submit control is disabled).
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Raise the flag, or `None` if it is already raised.
    #[must_use]
    pub fn try_begin(&self) -> Option<InFlight<'_>> {
        if self.in_flight.replace(true) {
            None
        } else {
            Some(InFlight { gate: self })
        }
    }
}

/// Clears the loading flag when dropped: on success, on error, or when the
/// pending future is abandoned.
#[derive(Debug)]
pub struct InFlight<'a> {
    gate: &'a SubmissionGate,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.set(false);
    }
}

/// Resolution of a submit trigger.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The service returned a result.
    Completed(SimulationResult),
    /// The submission failed; model and edit state are untouched.
    Failed(SubmissionError),
    /// Another submission was pending, nothing was sent.
    Busy,
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// Submit through `backend` unless `gate` reports a pending submission.
pub async fn submit_exclusive<B: SimulationBackend>(
    gate: &SubmissionGate,
    backend: &B,
    request: &SimulationRequest,
) -> SubmitOutcome {
    let Some(_guard) = gate.try_begin() else {
        tracing::debug!("submission already in flight, ignoring trigger");
        return SubmitOutcome::Busy;
    };

    match backend.simulate(request).await {
        Ok(result) => {
            tracing::info!(layout = %request.layout(), "simulation completed");
            SubmitOutcome::Completed(result)
        }
        Err(error) => {
            tracing::error!(%error, "simulation submission failed");
            SubmitOutcome::Failed(error)
        }
    }
}
