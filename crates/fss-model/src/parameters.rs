//! Named numeric parameter sets.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::{ModelError, Result};
use crate::layout::{Layout, ParameterSpec};

/// The complete parameter set of one layout.
///
/// Values are stored in the layout's canonical order, so a set always holds
/// exactly one value for every key of its vocabulary and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    layout: Layout,
    values: Vec<f64>,
}

impl ParameterSet {
    /// Default values for a layout.
    #[must_use]
    pub fn defaults(layout: Layout) -> Self {
        Self {
            layout,
            values: layout.parameters().iter().map(|spec| spec.default).collect(),
        }
    }

    /// Build a set from `(name, value)` pairs.
    ///
    /// Every key of the layout must be supplied and no foreign key is
    /// accepted. A repeated name keeps the last value.
    pub fn from_pairs<'a, I>(layout: Layout, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut values: Vec<Option<f64>> = vec![None; layout.parameters().len()];
        for (name, value) in pairs {
            let index = layout
                .index_of(name)
                .ok_or_else(|| ModelError::UnknownParameter {
                    layout,
                    name: name.to_string(),
                })?;
            values[index] = Some(value);
        }

        let values = values
            .into_iter()
            .zip(layout.parameters())
            .map(|(value, spec)| {
                value.ok_or(ModelError::MissingParameter {
                    layout,
                    name: spec.name,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { layout, values })
    }

    /// Build a set from a JSON object such as a saved `parametros` body.
    ///
    /// `null` reads back as NaN, the value it was written from.
    pub fn from_json(layout: Layout, value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or(ModelError::NotAnObject { layout })?;
        let pairs = object
            .iter()
            .map(|(name, value)| match value {
                Value::Null => Ok((name.as_str(), f64::NAN)),
                _ => value
                    .as_f64()
                    .map(|number| (name.as_str(), number))
                    .ok_or_else(|| ModelError::NotANumber { name: name.clone() }),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_pairs(layout, pairs)
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Value of a named parameter, `None` if the name is foreign to the layout.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.layout.index_of(name).map(|index| self.values[index])
    }

    /// Iterate `(spec, value)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static ParameterSpec, f64)> + '_ {
        self.layout
            .parameters()
            .iter()
            .zip(self.values.iter().copied())
    }

    /// Bitwise equality, treating NaN payloads as values.
    #[must_use]
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.layout == other.layout
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }

    /// JSON object in canonical key order.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .iter()
            .map(|(spec, value)| {
                let json = match as_integer(value) {
                    Some(integer) => Value::from(integer),
                    None => serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number),
                };
                (spec.name.to_string(), json)
            })
            .collect();
        Value::Object(map)
    }
}

impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (spec, value) in self.iter() {
            match as_integer(value) {
                Some(integer) => map.serialize_entry(spec.name, &integer)?,
                None => map.serialize_entry(spec.name, &value)?,
            }
        }
        map.end()
    }
}

/// Whole finite values go on the wire as integers (`95`, not `95.0`).
fn as_integer(value: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < LIMIT {
        Some(value as i64)
    } else {
        None
    }
}
