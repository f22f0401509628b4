//! Error types for the parameter model and edit session.

use thiserror::Error;

use crate::edit::EditTarget;
use crate::layout::Layout;
use crate::machine::Machine;

/// Errors raised when building or replacing a parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error("unknown layout: {0}")]
    UnknownLayout(String),

    #[error("unknown machine: {0}")]
    UnknownMachine(String),

    /// The name is not part of the layout's vocabulary.
    #[error("parameter '{name}' does not exist in the {layout} layout")]
    UnknownParameter { layout: Layout, name: String },

    /// A complete set was required but a key was absent.
    #[error("parameter '{name}' is missing from the {layout} parameter set")]
    MissingParameter { layout: Layout, name: &'static str },

    /// A JSON parameter value was not a number.
    #[error("parameter '{name}' must be a number")]
    NotANumber { name: String },

    #[error("expected a JSON object of {layout} parameters")]
    NotAnObject { layout: Layout },

    /// Parameter sets of different layouts are never mixed.
    #[error("cannot replace {expected} parameters with a {actual} parameter set")]
    LayoutMismatch { expected: Layout, actual: Layout },

    #[error("machine '{machine}' does not belong to the {layout} layout")]
    ForeignMachine { layout: Layout, machine: Machine },
}

/// Errors raised by edit-session transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EditError {
    /// Only one dialog may be open at a time.
    #[error("a dialog is already open for {0}")]
    DialogAlreadyOpen(EditTarget),

    #[error("no edit dialog is open")]
    NoDialogOpen,

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
