//! One layout's simulation screen.
//!
//! A screen owns its committed parameters, the dialog session editing them,
//! the backend submissions go to and the loading flag. Screens share nothing
//! with each other.

use std::cell::Cell;

use fss_model::{EditError, EditSession, Layout, Machine, ParameterModel, ParameterSet};
use fss_submit::{
    SimulationBackend, SimulationRequest, SubmissionGate, SubmitOutcome, submit_exclusive,
};

pub struct SimulationScreen<B> {
    model: ParameterModel,
    edit: EditSession,
    backend: B,
    gate: SubmissionGate,
    last_error: Cell<Option<&'static str>>,
}

impl<B: SimulationBackend> SimulationScreen<B> {
    /// Screen seeded with the layout defaults.
    pub fn new(layout: Layout, backend: B) -> Self {
        Self::with_parameters(ParameterSet::defaults(layout), backend)
    }

    pub fn with_parameters(parameters: ParameterSet, backend: B) -> Self {
        let model = ParameterModel::with_parameters(parameters);
        let edit = EditSession::new(model.get());
        Self {
            model,
            edit,
            backend,
            gate: SubmissionGate::new(),
            last_error: Cell::new(None),
        }
    }

    pub fn layout(&self) -> Layout {
        self.model.layout()
    }

    /// Committed values.
    pub fn parameters(&self) -> &ParameterSet {
        self.model.get()
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn open_field(&mut self, name: &str) -> Result<(), EditError> {
        self.edit.open_field(self.model.get(), name)
    }

    pub fn open_machine_group(&mut self, machine: Machine) -> Result<(), EditError> {
        self.edit.open_machine_group(self.model.get(), machine)
    }

    pub fn change_text(&mut self, name: &str, text: impl Into<String>) -> Result<(), EditError> {
        self.edit.change_text(name, text)
    }

    pub fn commit(&mut self) -> Result<(), EditError> {
        self.edit.commit(&mut self.model)
    }

    pub fn cancel(&mut self) {
        self.edit.cancel(&self.model);
    }

    /// A submission is outstanding.
    pub fn is_loading(&self) -> bool {
        self.gate.is_in_flight()
    }

    /// Message of the last failed submission, cleared by a successful one.
    pub fn last_error(&self) -> Option<&'static str> {
        self.last_error.get()
    }

    /// Submit the committed parameters.
    ///
    /// Returns [`SubmitOutcome::Busy`] without contacting the backend while
    /// another submission of this screen is pending. Model and edit session
    /// are never touched.
    pub async fn start_simulation(&self) -> SubmitOutcome {
        let request = SimulationRequest::new(self.model.get().clone());
        let outcome = submit_exclusive(&self.gate, &self.backend, &request).await;
        match &outcome {
            SubmitOutcome::Completed(_) => self.last_error.set(None),
            SubmitOutcome::Failed(error) => self.last_error.set(Some(error.user_message())),
            SubmitOutcome::Busy => {}
        }
        outcome
    }
}
