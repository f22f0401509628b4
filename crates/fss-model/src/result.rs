//! Raw simulation output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured response of the simulation service.
///
/// Kept as untyped JSON: the service's shape differs per layout and is not
/// validated. Object key order is the order the service sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationResult(Value);

impl SimulationResult {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for SimulationResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
