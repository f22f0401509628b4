//! Mutual exclusion of submissions on one gate.

use std::cell::Cell;

use serde_json::json;

use fss_model::{Layout, ParameterSet, SimulationResult};
use fss_submit::{
    Result, SimulationBackend, SimulationRequest, SubmissionError, SubmissionGate, SubmitOutcome,
    submit_exclusive,
};

#[derive(Default)]
struct CountingBackend {
    calls: Cell<usize>,
    fail: bool,
}

impl SimulationBackend for CountingBackend {
    async fn simulate(&self, _request: &SimulationRequest) -> Result<SimulationResult> {
        self.calls.set(self.calls.get() + 1);
        tokio::task::yield_now().await;
        if self.fail {
            Err(SubmissionError::Status {
                status: 503,
                body: String::new(),
            })
        } else {
            Ok(SimulationResult::new(json!({"entradas": 1})))
        }
    }
}

#[tokio::test]
async fn second_trigger_while_pending_is_ignored() {
    let gate = SubmissionGate::new();
    let backend = CountingBackend::default();
    let request = SimulationRequest::new(ParameterSet::defaults(Layout::Shoe));

    let (first, second) = tokio::join!(
        submit_exclusive(&gate, &backend, &request),
        submit_exclusive(&gate, &backend, &request),
    );

    assert!(matches!(first, SubmitOutcome::Completed(_)));
    assert!(second.is_busy());
    assert_eq!(backend.calls.get(), 1);
    assert!(!gate.is_in_flight());
}

#[tokio::test]
async fn gate_reopens_after_failure() {
    let gate = SubmissionGate::new();
    let backend = CountingBackend {
        fail: true,
        ..Default::default()
    };
    let request = SimulationRequest::new(ParameterSet::defaults(Layout::Car));

    let outcome = submit_exclusive(&gate, &backend, &request).await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert!(!gate.is_in_flight());

    let outcome = submit_exclusive(&gate, &backend, &request).await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(backend.calls.get(), 2);
}
