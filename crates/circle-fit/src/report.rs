//! Human-readable rendering of a fit.
//!
//! Units never change the numbers, only how many decimals are shown.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::result::FitResult;

/// Shown in place of any value that is missing or not finite.
pub const PLACEHOLDER: &str = "—";

/// Display unit for lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "mm")]
    Millimeter,
}

impl LengthUnit {
    /// Decimal places used when displaying values in this unit.
    pub fn decimals(self) -> usize {
        match self {
            LengthUnit::Inch => 4,
            LengthUnit::Millimeter => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LengthUnit::Inch => "in",
            LengthUnit::Millimeter => "mm",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown length unit '{0}' (expected 'in' or 'mm')")]
pub struct ParseUnitError(pub String);

impl FromStr for LengthUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(LengthUnit::Inch),
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Ok(LengthUnit::Millimeter)
            }
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

/// Format `value` at the unit's precision, or the placeholder when it is not
/// finite.
pub fn format_value(value: f64, unit: LengthUnit) -> String {
    if value.is_finite() {
        format!("{:.*}", unit.decimals(), value)
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Display-ready summary of one fit. Fields are `None` when the fit failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    pub unit: LengthUnit,
    pub point_count: usize,
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
    pub radius: Option<f64>,
    pub diameter: Option<f64>,
    pub rmse: Option<f64>,
}

impl FitReport {
    pub fn new(result: &FitResult, point_count: usize, unit: LengthUnit) -> Self {
        let circle = result.circle();
        Self {
            unit,
            point_count,
            center_x: circle.map(|c| c.center.x),
            center_y: circle.map(|c| c.center.y),
            radius: circle.map(|c| c.radius),
            diameter: circle.map(|c| c.diameter()),
            rmse: circle.map(|c| c.rmse),
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.radius.is_some()
    }

    fn field(&self, value: Option<f64>) -> String {
        value.map_or_else(|| PLACEHOLDER.to_string(), |v| format_value(v, self.unit))
    }

    /// Label next to the center marker of an overlay, e.g. `C = (1.0000, 2.0000) in`.
    pub fn center_label(&self) -> Option<String> {
        let (x, y) = (self.center_x?, self.center_y?);
        Some(format!(
            "C = ({}, {}) {}",
            format_value(x, self.unit),
            format_value(y, self.unit),
            self.unit
        ))
    }

    /// Label for the radius, e.g. `R = 1.0000 in`.
    pub fn radius_label(&self) -> Option<String> {
        let r = self.radius?;
        Some(format!("R = {} {}", format_value(r, self.unit), self.unit))
    }
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit;
        writeln!(f, "Points:          {}", self.point_count)?;
        writeln!(f, "Center X ({unit}):   {}", self.field(self.center_x))?;
        writeln!(f, "Center Y ({unit}):   {}", self.field(self.center_y))?;
        writeln!(f, "Radius ({unit}):     {}", self.field(self.radius))?;
        writeln!(f, "Diameter ({unit}):   {}", self.field(self.diameter))?;
        write!(f, "RMSE ({unit}):       {}", self.field(self.rmse))
    }
}
