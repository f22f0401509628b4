//! Machine identities and their grouped timing parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::layout::Layout;

/// A machine whose mean, standard deviation and setup time are edited together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Machine {
    /// Shoe cutting machine.
    Corte,
    /// Shoe sewing machine.
    Costura,
    /// Car injection moulding machine.
    Injetora,
    /// Car flaming machine.
    Flamagem,
    /// Car gluing machine.
    Colagem,
}

impl Machine {
    /// Layout this machine belongs to.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        match self {
            Self::Corte | Self::Costura => Layout::Shoe,
            Self::Injetora | Self::Flamagem | Self::Colagem => Layout::Car,
        }
    }

    /// Identifier used in parameter names (`media_<id>`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Corte => "corte",
            Self::Costura => "costura",
            Self::Injetora => "injetora",
            Self::Flamagem => "flamagem",
            Self::Colagem => "colagem",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Corte => "Cutting",
            Self::Costura => "Sewing",
            Self::Injetora => "Injection",
            Self::Flamagem => "Flaming",
            Self::Colagem => "Gluing",
        }
    }

    /// Parameter names of this machine's timing triple.
    #[must_use]
    pub const fn fields(&self) -> MachineFields {
        match self {
            Self::Corte => MachineFields {
                mean: "media_corte",
                std_dev: "std_corte",
                setup_time: "tempo_setup_corte",
            },
            Self::Costura => MachineFields {
                mean: "media_costura",
                std_dev: "std_costura",
                setup_time: "tempo_setup_costura",
            },
            Self::Injetora => MachineFields {
                mean: "media_injetora",
                std_dev: "std_injetora",
                setup_time: "tempo_setup_injetora",
            },
            Self::Flamagem => MachineFields {
                mean: "media_flamagem",
                std_dev: "std_flamagem",
                setup_time: "tempo_setup_flamagem",
            },
            Self::Colagem => MachineFields {
                mean: "media_colagem",
                std_dev: "std_colagem",
                setup_time: "tempo_setup_colagem",
            },
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Machine {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "corte" => Ok(Self::Corte),
            "costura" => Ok(Self::Costura),
            "injetora" => Ok(Self::Injetora),
            "flamagem" => Ok(Self::Flamagem),
            "colagem" => Ok(Self::Colagem),
            _ => Err(ModelError::UnknownMachine(s.to_string())),
        }
    }
}

/// Parameter names of one machine's `{mean, std_dev, setup_time}` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineFields {
    pub mean: &'static str,
    pub std_dev: &'static str,
    pub setup_time: &'static str,
}

impl MachineFields {
    /// The three names in dialog order.
    #[must_use]
    pub const fn names(&self) -> [&'static str; 3] {
        [self.mean, self.std_dev, self.setup_time]
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names().contains(&name)
    }
}
