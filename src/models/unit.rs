use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ComPriceError;

/// Measurement family a unit belongs to.
///
/// Normalized prices are only meaningful between units of the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeasureFamily {
    Count,
    Mass,
    Liquid,
}

impl MeasureFamily {
    /// Label of the base unit normalized prices are expressed in.
    pub fn base_label(self) -> &'static str {
        match self {
            MeasureFamily::Count => "pcs",
            MeasureFamily::Mass => "g",
            MeasureFamily::Liquid => "ml",
        }
    }

    /// The larger unit prices are shown per (kg, L), with its size in base units.
    pub fn display_unit(self) -> (&'static str, f64) {
        match self {
            MeasureFamily::Count => ("pcs", 1.0),
            MeasureFamily::Mass => ("kg", 1000.0),
            MeasureFamily::Liquid => ("L", 1000.0),
        }
    }
}

impl fmt::Display for MeasureFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeasureFamily::Count => "count",
            MeasureFamily::Mass => "mass",
            MeasureFamily::Liquid => "liquid",
        };
        f.write_str(name)
    }
}

/// Unit an item's volume is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "pcs")]
    Pcs,
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "ml")]
    Ml,
}

impl Unit {
    /// Every unit, in the order the unit picker lists them.
    pub const ALL: [Unit; 5] = [Unit::Pcs, Unit::Kg, Unit::G, Unit::L, Unit::Ml];

    pub fn family(self) -> MeasureFamily {
        match self {
            Unit::Pcs => MeasureFamily::Count,
            Unit::Kg | Unit::G => MeasureFamily::Mass,
            Unit::L | Unit::Ml => MeasureFamily::Liquid,
        }
    }

    /// Multiplier converting a volume in this unit into its family's base unit.
    #[inline]
    pub fn multiplier(self) -> f64 {
        match self {
            Unit::Pcs => 1.0,
            Unit::Kg => 1000.0,
            Unit::G => 1.0,
            Unit::L => 1000.0,
            Unit::Ml => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Pcs => "pcs",
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::L => "L",
            Unit::Ml => "ml",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses user input; case-insensitive so `l` and `ML` are accepted.
impl FromStr for Unit {
    type Err = ComPriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Unit::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ComPriceError::UnknownUnit(trimmed.to_string()))
    }
}
