//! Committed parameter values of one screen.

use crate::error::{ModelError, Result};
use crate::layout::Layout;
use crate::parameters::ParameterSet;

/// Holds the committed parameter set for one layout.
///
/// Each screen owns its own instance; there is no shared store. Values are
/// only ever replaced as a whole and no numeric validation happens here.
#[derive(Debug, Clone)]
pub struct ParameterModel {
    current: ParameterSet,
}

impl ParameterModel {
    /// Model seeded with the layout defaults.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            current: ParameterSet::defaults(layout),
        }
    }

    /// Model seeded with an explicit set.
    #[must_use]
    pub fn with_parameters(parameters: ParameterSet) -> Self {
        Self {
            current: parameters,
        }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.current.layout()
    }

    /// Current committed values.
    #[must_use]
    pub fn get(&self) -> &ParameterSet {
        &self.current
    }

    /// Replace every value at once.
    ///
    /// Fails only when the new set belongs to another layout.
    pub fn replace(&mut self, parameters: ParameterSet) -> Result<()> {
        if parameters.layout() != self.layout() {
            return Err(ModelError::LayoutMismatch {
                expected: self.layout(),
                actual: parameters.layout(),
            });
        }
        tracing::debug!(layout = %self.layout(), "replacing parameter set");
        self.current = parameters;
        Ok(())
    }
}
