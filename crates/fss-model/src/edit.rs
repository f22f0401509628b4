//! Edit session: the state machine behind the parameter dialogs.
//!
//! Text typed into a dialog lives in an [`EditBuffer`] until the dialog is
//! committed. A commit re-parses *every* buffer entry, not only the ones the
//! dialog showed, and replaces the whole model with the result. Cancelling
//! leaves the model untouched and re-seeds the buffer from it.

use std::fmt;

use crate::error::{EditError, ModelError};
use crate::layout::Layout;
use crate::machine::Machine;
use crate::model::ParameterModel;
use crate::number::{format_number, parse_float};
use crate::parameters::ParameterSet;

/// What the open dialog is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// A single parameter.
    Field(&'static str),
    /// The mean/std/setup triple of one machine.
    Machine(Machine),
}

impl EditTarget {
    /// Parameter names shown by this dialog.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        match self {
            Self::Field(name) => vec![*name],
            Self::Machine(machine) => machine.fields().names().to_vec(),
        }
    }
}

impl fmt::Display for EditTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "field '{name}'"),
            Self::Machine(machine) => write!(f, "machine '{machine}'"),
        }
    }
}

/// Dialog state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Closed,
    EditingField(&'static str),
    EditingMachineGroup(Machine),
}

impl EditState {
    #[must_use]
    pub fn target(&self) -> Option<EditTarget> {
        match *self {
            Self::Closed => None,
            Self::EditingField(name) => Some(EditTarget::Field(name)),
            Self::EditingMachineGroup(machine) => Some(EditTarget::Machine(machine)),
        }
    }
}

/// Text form of every parameter of a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    layout: Layout,
    texts: Vec<String>,
}

impl EditBuffer {
    /// Buffer holding the stringified values of `parameters`.
    #[must_use]
    pub fn from_parameters(parameters: &ParameterSet) -> Self {
        Self {
            layout: parameters.layout(),
            texts: parameters
                .iter()
                .map(|(_, value)| format_number(value))
                .collect(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.layout
            .index_of(name)
            .map(|index| self.texts[index].as_str())
    }

    /// Iterate `(name, text)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.layout
            .parameters()
            .iter()
            .zip(&self.texts)
            .map(|(spec, text)| (spec.name, text.as_str()))
    }

    fn index(&self, name: &str) -> Result<usize, ModelError> {
        self.layout
            .index_of(name)
            .ok_or_else(|| ModelError::UnknownParameter {
                layout: self.layout,
                name: name.to_string(),
            })
    }

    fn set(&mut self, name: &str, text: String) -> Result<(), ModelError> {
        let index = self.index(name)?;
        self.texts[index] = text;
        Ok(())
    }

    fn seed(&mut self, name: &str, parameters: &ParameterSet) -> Result<(), ModelError> {
        let value = parameters
            .get(name)
            .ok_or_else(|| ModelError::UnknownParameter {
                layout: self.layout,
                name: name.to_string(),
            })?;
        self.set(name, format_number(value))
    }

    /// Parse every entry into a complete parameter set.
    pub fn parse(&self) -> Result<ParameterSet, ModelError> {
        ParameterSet::from_pairs(
            self.layout,
            self.iter().map(|(name, text)| (name, parse_float(text))),
        )
    }
}

/// Transient editing state of one screen.
#[derive(Debug, Clone)]
pub struct EditSession {
    state: EditState,
    buffer: EditBuffer,
}

impl EditSession {
    /// Closed session with a buffer seeded from `parameters`.
    #[must_use]
    pub fn new(parameters: &ParameterSet) -> Self {
        Self {
            state: EditState::Closed,
            buffer: EditBuffer::from_parameters(parameters),
        }
    }

    #[must_use]
    pub fn state(&self) -> EditState {
        self.state
    }

    #[must_use]
    pub fn target(&self) -> Option<EditTarget> {
        self.state.target()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state != EditState::Closed
    }

    #[must_use]
    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// Open the single-field dialog for `name`.
    pub fn open_field(&mut self, parameters: &ParameterSet, name: &str) -> Result<(), EditError> {
        self.ensure_closed()?;
        self.ensure_layout(parameters)?;
        let spec = self
            .buffer
            .layout()
            .parameter(name)
            .ok_or_else(|| ModelError::UnknownParameter {
                layout: self.buffer.layout(),
                name: name.to_string(),
            })?;
        self.buffer.seed(spec.name, parameters)?;
        self.state = EditState::EditingField(spec.name);
        tracing::debug!(field = spec.name, "opened field dialog");
        Ok(())
    }

    /// Open the machine dialog showing its mean/std/setup triple.
    pub fn open_machine_group(
        &mut self,
        parameters: &ParameterSet,
        machine: Machine,
    ) -> Result<(), EditError> {
        self.ensure_closed()?;
        self.ensure_layout(parameters)?;
        if machine.layout() != self.buffer.layout() {
            return Err(ModelError::ForeignMachine {
                layout: self.buffer.layout(),
                machine,
            }
            .into());
        }
        for name in machine.fields().names() {
            self.buffer.seed(name, parameters)?;
        }
        self.state = EditState::EditingMachineGroup(machine);
        tracing::debug!(%machine, "opened machine dialog");
        Ok(())
    }

    /// Store typed text verbatim; no numeric coercion happens here.
    pub fn change_text(&mut self, name: &str, text: impl Into<String>) -> Result<(), EditError> {
        if !self.is_open() {
            return Err(EditError::NoDialogOpen);
        }
        self.buffer.set(name, text.into())?;
        Ok(())
    }

    /// Parse the whole buffer and replace the model with it.
    pub fn commit(&mut self, model: &mut ParameterModel) -> Result<(), EditError> {
        let Some(target) = self.target() else {
            return Err(EditError::NoDialogOpen);
        };
        let parsed = self.buffer.parse()?;
        model.replace(parsed)?;
        self.buffer = EditBuffer::from_parameters(model.get());
        self.state = EditState::Closed;
        tracing::info!(%target, "committed parameter edits");
        Ok(())
    }

    /// Close the dialog without touching the model.
    pub fn cancel(&mut self, model: &ParameterModel) {
        if let Some(target) = self.target() {
            tracing::debug!(%target, "cancelled dialog");
        }
        if model.layout() == self.buffer.layout() {
            self.buffer = EditBuffer::from_parameters(model.get());
        }
        self.state = EditState::Closed;
    }

    fn ensure_closed(&self) -> Result<(), EditError> {
        match self.target() {
            Some(target) => Err(EditError::DialogAlreadyOpen(target)),
            None => Ok(()),
        }
    }

    fn ensure_layout(&self, parameters: &ParameterSet) -> Result<(), ModelError> {
        if parameters.layout() == self.buffer.layout() {
            Ok(())
        } else {
            Err(ModelError::LayoutMismatch {
                expected: self.buffer.layout(),
                actual: parameters.layout(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe() -> (ParameterModel, EditSession) {
        let model = ParameterModel::new(Layout::Shoe);
        let session = EditSession::new(model.get());
        (model, session)
    }

    #[test]
    fn test_open_field_seeds_buffer() {
        let (model, mut session) = shoe();
        session.open_field(model.get(), "media_corte").unwrap();
        assert_eq!(session.state(), EditState::EditingField("media_corte"));
        assert_eq!(session.buffer().get("media_corte"), Some("4.4"));
    }

    #[test]
    fn test_change_text_is_verbatim() {
        let (model, mut session) = shoe();
        session.open_field(model.get(), "std_corte").unwrap();
        session.change_text("std_corte", "0.2x").unwrap();
        assert_eq!(session.buffer().get("std_corte"), Some("0.2x"));
    }

    #[test]
    fn test_change_text_requires_open_dialog() {
        let (_, mut session) = shoe();
        assert_eq!(
            session.change_text("std_corte", "1").unwrap_err(),
            EditError::NoDialogOpen
        );
    }

    #[test]
    fn test_second_dialog_is_rejected() {
        let (model, mut session) = shoe();
        session.open_machine_group(model.get(), Machine::Corte).unwrap();
        let err = session.open_field(model.get(), "estoque_inicial").unwrap_err();
        assert_eq!(
            err,
            EditError::DialogAlreadyOpen(EditTarget::Machine(Machine::Corte))
        );
    }

    #[test]
    fn test_foreign_machine_is_rejected() {
        let (model, mut session) = shoe();
        let err = session
            .open_machine_group(model.get(), Machine::Injetora)
            .unwrap_err();
        assert!(matches!(
            err,
            EditError::Model(ModelError::ForeignMachine { .. })
        ));
        assert!(!session.is_open());
    }

    #[test]
    fn test_commit_parses_invalid_text_as_nan() {
        let (mut model, mut session) = shoe();
        session.open_field(model.get(), "tempo_simulacao").unwrap();
        session.change_text("tempo_simulacao", "abc").unwrap();
        session.commit(&mut model).unwrap();
        assert!(model.get().get("tempo_simulacao").unwrap().is_nan());
        assert_eq!(session.buffer().get("tempo_simulacao"), Some("NaN"));
    }

    #[test]
    fn test_commit_without_dialog_fails() {
        let (mut model, mut session) = shoe();
        assert_eq!(
            session.commit(&mut model).unwrap_err(),
            EditError::NoDialogOpen
        );
    }

    #[test]
    fn test_machine_commit_updates_triple() {
        let mut model = ParameterModel::new(Layout::Car);
        let mut session = EditSession::new(model.get());
        session
            .open_machine_group(model.get(), Machine::Flamagem)
            .unwrap();
        session.change_text("media_flamagem", "30").unwrap();
        session.change_text("std_flamagem", "1.5").unwrap();
        session.change_text("tempo_setup_flamagem", "4").unwrap();
        session.commit(&mut model).unwrap();
        assert_eq!(model.get().get("media_flamagem"), Some(30.0));
        assert_eq!(model.get().get("std_flamagem"), Some(1.5));
        assert_eq!(model.get().get("tempo_setup_flamagem"), Some(4.0));
        assert_eq!(model.get().get("media_injetora"), Some(44.08));
    }

    #[test]
    fn test_cancel_drops_edits_from_later_commit() {
        let (mut model, mut session) = shoe();
        session.open_machine_group(model.get(), Machine::Costura).unwrap();
        session.change_text("media_costura", "99").unwrap();
        session.cancel(&model);

        session.open_field(model.get(), "estoque_inicial").unwrap();
        session.change_text("estoque_inicial", "10").unwrap();
        session.commit(&mut model).unwrap();

        assert_eq!(model.get().get("estoque_inicial"), Some(10.0));
        assert_eq!(model.get().get("media_costura"), Some(4.5));
    }
}
