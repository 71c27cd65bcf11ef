use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AxisError;

/// Axis addressed by a tuning call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// The `x` axis.
    Horizontal,
    /// The `y` axis.
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    #[must_use]
    pub fn designator(self) -> &'static str {
        match self {
            Self::Horizontal => "x",
            Self::Vertical => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.designator())
    }
}

impl FromStr for Axis {
    type Err = AxisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "x" | "horizontal" => Ok(Self::Horizontal),
            "y" | "vertical" => Ok(Self::Vertical),
            _ => Err(AxisError::InvalidAxis(value.to_owned())),
        }
    }
}
