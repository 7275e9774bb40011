// Unit conversion for the floor dimensions entered by the user

use crate::grid::traits::{GridError, GridResult};
use serde::{Deserialize, Serialize};

/// Measurement unit for the entered width and length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Meters,
    Centimeters,
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Meters
    }
}

impl Unit {
    pub const ALL: [Unit; 2] = [Unit::Meters, Unit::Centimeters];

    /// Multiplier that converts a value in this unit to meters
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Meters => 1.0,
            Unit::Centimeters => 0.01,
        }
    }

    /// Smallest value the input boundary accepts
    pub fn min_value(&self) -> f64 {
        match self {
            Unit::Meters => 1.0,
            Unit::Centimeters => 10.0,
        }
    }

    /// Largest value the input boundary accepts
    pub fn max_value(&self) -> f64 {
        match self {
            Unit::Meters => 100.0,
            Unit::Centimeters => 10_000.0,
        }
    }

    pub fn default_width(&self) -> f64 {
        match self {
            Unit::Meters => 4.0,
            Unit::Centimeters => 400.0,
        }
    }

    pub fn default_length(&self) -> f64 {
        match self {
            Unit::Meters => 6.0,
            Unit::Centimeters => 600.0,
        }
    }

    /// Increment used by the numeric inputs
    pub fn step(&self) -> f64 {
        1.0
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Meters => "metros",
            Unit::Centimeters => "centímetros",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Meters => "m",
            Unit::Centimeters => "cm",
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min_value(), self.max_value())
    }

    pub fn to_meters(&self, value: f64) -> f64 {
        value * self.factor()
    }

    /// The other unit, for single-key toggling
    pub fn toggled(&self) -> Unit {
        match self {
            Unit::Meters => Unit::Centimeters,
            Unit::Centimeters => Unit::Meters,
        }
    }

    /// Parse a unit from a symbol or label ("m", "cm", "metros", ...)
    pub fn parse(s: &str) -> Option<Unit> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meters" | "metros" => Some(Unit::Meters),
            "cm" | "centimeters" | "centímetros" | "centimetros" => Some(Unit::Centimeters),
            _ => None,
        }
    }
}

/// Width ("ancho") and length ("largo") of the floor in a chosen unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub length: f64,
    pub unit: Unit,
}

impl Dimension {
    /// Build a dimension, enforcing the unit's range at the input boundary
    pub fn new(width: f64, length: f64, unit: Unit) -> GridResult<Self> {
        for value in [width, length] {
            // NaN and -inf fail this comparison
            if !(value >= unit.min_value()) {
                return Err(GridError::DimensionBelowMinimum {
                    value,
                    minimum: unit.min_value(),
                    unit,
                });
            }
            if !value.is_finite() || value > unit.max_value() {
                return Err(GridError::DimensionAboveMaximum {
                    value,
                    maximum: unit.max_value(),
                    unit,
                });
            }
        }
        Ok(Self {
            width,
            length,
            unit,
        })
    }

    /// The starting dimension shown for a unit
    pub fn defaults(unit: Unit) -> Self {
        Self {
            width: unit.default_width(),
            length: unit.default_length(),
            unit,
        }
    }

    /// Switching unit resets both inputs to that unit's defaults
    pub fn with_unit(&self, unit: Unit) -> Self {
        if unit == self.unit {
            *self
        } else {
            Self::defaults(unit)
        }
    }

    pub fn width_m(&self) -> f64 {
        self.unit.to_meters(self.width)
    }

    pub fn length_m(&self) -> f64 {
        self.unit.to_meters(self.length)
    }

    /// Floor area in square meters, rounded to 2 decimals
    pub fn area_m2(&self) -> f64 {
        round_to_cents(self.width_m() * self.length_m())
    }

    /// Width adjusted by `steps` input increments, clamped to the unit's range
    pub fn step_width(&self, steps: i32) -> Self {
        Self {
            width: self.unit.clamp(self.width + steps as f64 * self.unit.step()),
            ..*self
        }
    }

    /// Length adjusted by `steps` input increments, clamped to the unit's range
    pub fn step_length(&self, steps: i32) -> Self {
        Self {
            length: self.unit.clamp(self.length + steps as f64 * self.unit.step()),
            ..*self
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::defaults(Unit::default())
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_conversion_and_area() {
        let dim = Dimension::new(4.0, 6.0, Unit::Meters).unwrap();
        assert_eq!(dim.width_m(), 4.0);
        assert_eq!(dim.length_m(), 6.0);
        assert_eq!(dim.area_m2(), 24.0);
    }

    #[test]
    fn test_centimeters_conversion_and_area() {
        let dim = Dimension::new(250.0, 300.0, Unit::Centimeters).unwrap();
        assert!((dim.width_m() - 2.5).abs() < 1e-9);
        assert!((dim.length_m() - 3.0).abs() < 1e-9);
        assert_eq!(dim.area_m2(), 7.5);
    }

    #[test]
    fn test_area_rounds_to_two_decimals() {
        let dim = Dimension::new(1.234, 1.0, Unit::Meters).unwrap();
        assert_eq!(dim.area_m2(), 1.23);
    }

    #[test]
    fn test_minimum_enforced_per_unit() {
        assert!(Dimension::new(0.5, 2.0, Unit::Meters).is_err());
        assert!(Dimension::new(2.0, 0.99, Unit::Meters).is_err());
        assert!(Dimension::new(9.0, 50.0, Unit::Centimeters).is_err());
        assert!(Dimension::new(10.0, 10.0, Unit::Centimeters).is_ok());
        assert!(Dimension::new(f64::NAN, 2.0, Unit::Meters).is_err());
    }

    #[test]
    fn test_unit_switch_resets_to_defaults() {
        let dim = Dimension::new(7.0, 8.0, Unit::Meters).unwrap();
        assert_eq!(dim.with_unit(Unit::Meters), dim);
        let cm = dim.with_unit(Unit::Centimeters);
        assert_eq!(cm.width, 400.0);
        assert_eq!(cm.length, 600.0);
        assert_eq!(cm.unit, Unit::Centimeters);
    }

    #[test]
    fn test_step_clamps_at_minimum() {
        let dim = Dimension::defaults(Unit::Meters);
        assert_eq!(dim.step_width(1).width, 5.0);
        assert_eq!(dim.step_width(-10).width, 1.0);
        assert_eq!(dim.step_length(-1).length, 5.0);
        assert_eq!(dim.step_width(1_000).width, 100.0);
    }

    #[test]
    fn test_maximum_enforced_per_unit() {
        assert!(Dimension::new(100.0, 100.0, Unit::Meters).is_ok());
        assert!(matches!(
            Dimension::new(1e18, 1e18, Unit::Meters),
            Err(GridError::DimensionAboveMaximum { maximum, .. }) if maximum == 100.0
        ));
        assert!(Dimension::new(4.0, 100.5, Unit::Meters).is_err());
        assert!(Dimension::new(10_001.0, 600.0, Unit::Centimeters).is_err());
    }

    #[test]
    fn test_infinite_extent_rejected() {
        assert!(matches!(
            Dimension::new(f64::INFINITY, 6.0, Unit::Meters),
            Err(GridError::DimensionAboveMaximum { .. })
        ));
        assert!(matches!(
            Dimension::new(4.0, f64::NEG_INFINITY, Unit::Centimeters),
            Err(GridError::DimensionBelowMinimum { .. })
        ));
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!(Unit::parse("cm"), Some(Unit::Centimeters));
        assert_eq!(Unit::parse("Metros"), Some(Unit::Meters));
        assert_eq!(Unit::parse("ft"), None);
    }
}
