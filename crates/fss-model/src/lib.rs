//! Parameter model for the factory simulation front-end.
//!
//! # Module Organization
//!
//! - [`layout`]: the two plant layouts and their parameter tables
//! - [`machine`]: machine identities and their mean/std/setup triples
//! - [`parameters`]: [`ParameterSet`], the complete values of one layout
//! - [`model`]: [`ParameterModel`], the committed values of one screen
//! - [`edit`]: [`EditSession`], the dialog state machine and text buffer
//! - [`number`]: `parseFloat`-compatible parsing and round-trip formatting
//! - [`result`]: [`SimulationResult`], the untyped service response

pub mod edit;
pub mod error;
pub mod layout;
pub mod machine;
pub mod model;
pub mod number;
pub mod parameters;
pub mod result;

pub use edit::{EditBuffer, EditSession, EditState, EditTarget};
pub use error::{EditError, ModelError, Result};
pub use layout::{Layout, ParameterSpec};
pub use machine::{Machine, MachineFields};
pub use model::ParameterModel;
pub use number::{format_number, parse_float};
pub use parameters::ParameterSet;
pub use result::SimulationResult;
