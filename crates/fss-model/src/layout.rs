//! Plant layouts and their parameter vocabularies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::machine::Machine;

/// Physical process topology targeted by a parameter set and a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Shoe factory: cutting and sewing cells.
    Shoe,
    /// Car-assembly line: injection, flaming, gluing and finishing.
    Car,
}

impl Layout {
    /// All layouts, in presentation order.
    pub const ALL: [Layout; 2] = [Layout::Shoe, Layout::Car];

    /// Wire discriminator sent as `layout` in a simulation request.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shoe => "shoe",
            Self::Car => "car",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Shoe => "Shoe Factory",
            Self::Car => "Car Assembly",
        }
    }

    /// Parameter table in canonical order.
    #[must_use]
    pub const fn parameters(&self) -> &'static [ParameterSpec] {
        match self {
            Self::Shoe => SHOE_PARAMETERS,
            Self::Car => CAR_PARAMETERS,
        }
    }

    /// Machines whose mean/std/setup triple is edited as one group.
    #[must_use]
    pub const fn machines(&self) -> &'static [Machine] {
        match self {
            Self::Shoe => &[Machine::Corte, Machine::Costura],
            Self::Car => &[Machine::Injetora, Machine::Flamagem, Machine::Colagem],
        }
    }

    /// Look up a parameter definition by wire name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&'static ParameterSpec> {
        self.parameters().iter().find(|spec| spec.name == name)
    }

    /// Position of a parameter in the canonical table.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.parameters().iter().position(|spec| spec.name == name)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shoe" => Ok(Self::Shoe),
            "car" => Ok(Self::Car),
            _ => Err(ModelError::UnknownLayout(s.to_string())),
        }
    }
}

/// Static definition of one named parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    /// Wire name, as sent in `parametros`.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Unit suffix shown next to the value.
    pub unit: &'static str,
    /// Value at session start.
    pub default: f64,
}

const fn spec(
    name: &'static str,
    label: &'static str,
    unit: &'static str,
    default: f64,
) -> ParameterSpec {
    ParameterSpec {
        name,
        label,
        unit,
        default,
    }
}

const SHOE_PARAMETERS: &[ParameterSpec] = &[
    spec("estoque_inicial", "Initial leather stock", "und", 95.0),
    spec("estoque_seg_costura", "Sewing buffer stock", "und", 50.0),
    spec("tempo_simulacao", "Simulation time", "min", 480.0),
    spec("media_corte", "Cutting mean time", "min", 4.4),
    spec("std_corte", "Cutting std deviation", "min", 0.2),
    spec("tempo_setup_corte", "Cutting setup time", "min", 0.3),
    spec("media_costura", "Sewing mean time", "min", 4.5),
    spec("std_costura", "Sewing std deviation", "min", 0.3),
    spec("tempo_setup_costura", "Sewing setup time", "min", 0.2),
];

const CAR_PARAMETERS: &[ParameterSpec] = &[
    spec("estoque_inicial", "Initial stock", "und", 100.0),
    spec("estoque_seg_flamagem", "Flaming buffer stock", "und", 50.0),
    spec("tempo_simulacao", "Simulation time", "seg", 28800.0),
    spec("media_injetora", "Injection mean time", "seg", 44.08),
    spec("std_injetora", "Injection std deviation", "seg", 0.87),
    spec("tempo_setup_injetora", "Injection setup time", "seg", 2.4),
    spec("media_flamagem", "Flaming mean time", "seg", 34.8),
    spec("std_flamagem", "Flaming std deviation", "seg", 0.97),
    spec("tempo_setup_flamagem", "Flaming setup time", "seg", 3.84),
    spec("media_colagem", "Gluing mean time", "seg", 82.3),
    spec("std_colagem", "Gluing std deviation", "seg", 1.1),
    spec("tempo_setup_colagem", "Gluing setup time", "seg", 3.06),
    spec("media_acabamento", "Finishing mean time", "seg", 50.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_table_sizes() {
        assert_eq!(Layout::Shoe.parameters().len(), 9);
        assert_eq!(Layout::Car.parameters().len(), 13);
    }

    #[test]
    fn test_vocabularies_only_share_common_keys() {
        let shared: Vec<&str> = Layout::Shoe
            .parameters()
            .iter()
            .filter(|spec| Layout::Car.parameter(spec.name).is_some())
            .map(|spec| spec.name)
            .collect();
        assert_eq!(shared, vec!["estoque_inicial", "tempo_simulacao"]);
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("shoe".parse::<Layout>().unwrap(), Layout::Shoe);
        assert_eq!(" CAR ".parse::<Layout>().unwrap(), Layout::Car);
        assert!("boat".parse::<Layout>().is_err());
    }

    #[test]
    fn test_machine_fields_belong_to_layout() {
        for layout in Layout::ALL {
            for machine in layout.machines() {
                assert_eq!(machine.layout(), layout);
                for name in machine.fields().names() {
                    assert!(layout.parameter(name).is_some(), "{name} missing");
                }
            }
        }
    }
}
