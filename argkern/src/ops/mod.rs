use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

pub mod cpu;
pub mod registry;

/// Operation kinds served by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    ArgmaxAxis,
    ArgminAxis,
}

impl OpKind {
    /// String identifier for the op kind.
    pub fn as_str(self) -> &'static str {
        match self {
            OpKind::ArgmaxAxis => "argmax_axis",
            OpKind::ArgminAxis => "argmin_axis",
        }
    }

    /// Parse an op kind from its string name.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse()
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OpKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "argmax_axis" | "argmax" => Ok(OpKind::ArgmaxAxis),
            "argmin_axis" | "argmin" => Ok(OpKind::ArgminAxis),
            _ => Err(anyhow!("unsupported op {}", value)),
        }
    }
}
