//! Legend metadata for a scatter series.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLegendTypeError;
use crate::style::Color;
use crate::symbol::SymbolKind;

/// Icon used for the series in a legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LegendType {
    /// The series' own symbol.
    #[default]
    Scatter,
    /// A horizontal line.
    Line,
    /// A filled rectangle.
    Rect,
    /// A specific built-in symbol.
    Symbol(SymbolKind),
    /// No legend entry.
    None,
}

impl FromStr for LegendType {
    type Err = ParseLegendTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scatter" => Ok(Self::Scatter),
            "line" => Ok(Self::Line),
            "rect" => Ok(Self::Rect),
            "none" => Ok(Self::None),
            other => other
                .parse()
                .map(Self::Symbol)
                .map_err(|_| ParseLegendTypeError(s.to_string())),
        }
    }
}

impl fmt::Display for LegendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scatter => f.write_str("scatter"),
            Self::Line => f.write_str("line"),
            Self::Rect => f.write_str("rect"),
            Self::Symbol(kind) => write!(f, "{kind}"),
            Self::None => f.write_str("none"),
        }
    }
}

impl TryFrom<String> for LegendType {
    type Error = ParseLegendTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LegendType> for String {
    fn from(value: LegendType) -> Self {
        value.to_string()
    }
}

/// What a legend needs to draw one scatter series.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Requested icon type.
    pub legend_type: LegendType,
    /// Series fill color, if painted.
    pub color: Option<Color>,
    /// Symbol for the icon when the legend type is `scatter`.
    pub symbol: SymbolKind,
}
