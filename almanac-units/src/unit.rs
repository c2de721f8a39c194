//! Unit representation with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Dimension;

/// Represents a physical unit with its dimension and conversion factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit symbol (e.g., "m", "kg", "s")
    pub symbol: String,
    /// The unit name (e.g., "meter", "kilogram", "second")
    pub name: String,
    /// The dimensional signature
    pub dimension: Dimension,
    /// Factor to convert to SI base unit (value_si = value * to_si_factor + to_si_offset)
    pub to_si_factor: f64,
    /// Offset for non-proportional units like temperature (Celsius)
    pub to_si_offset: f64,
    /// Category for organization (e.g., "length", "mass", "time")
    pub category: String,
}

impl Unit {
    /// Create a new unit with proportional conversion (no offset)
    pub fn new(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        to_si_factor: f64,
        category: &str,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            to_si_factor,
            to_si_offset: 0.0,
            category: category.to_string(),
        }
    }

    /// Create a unit with offset (for temperature conversions)
    pub fn with_offset(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        to_si_factor: f64,
        to_si_offset: f64,
        category: &str,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            to_si_factor,
            to_si_offset,
            category: category.to_string(),
        }
    }

    /// The dimensionless unit "1", used in quotients like "1/fm"
    pub fn one() -> Self {
        Unit::new("1", "one", Dimension::DIMENSIONLESS, 1.0, "dimensionless")
    }

    /// Check if this is a base SI unit
    pub fn is_si_base(&self) -> bool {
        self.to_si_factor == 1.0 && self.to_si_offset == 0.0
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn has_offset(&self) -> bool {
        self.to_si_offset != 0.0
    }

    /// Check if two units are dimensionally compatible (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Convert a value from this unit to SI base unit
    pub fn to_si(&self, value: f64) -> f64 {
        // value_si = value * factor + offset
        value * self.to_si_factor + self.to_si_offset
    }

    /// Convert a value from SI base unit to this unit
    pub fn from_si(&self, value_si: f64) -> f64 {
        // value = (value_si - offset) / factor
        (value_si - self.to_si_offset) / self.to_si_factor
    }

    /// Convert a value from this unit to another unit
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::IncompatibleDimensions {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_dim: self.dimension,
                to_dim: target.dimension,
            });
        }

        // Convert to SI, then from SI to target
        let si_value = self.to_si(value);
        Ok(target.from_si(si_value))
    }

    /// Multiply two units (e.g., m * m -> m^2)
    pub fn multiply(&self, other: &Unit) -> Unit {
        Unit {
            symbol: format!("{}*{}", self.symbol, other.symbol),
            name: format!("{} {}", self.name, other.name),
            dimension: self.dimension.multiply(&other.dimension),
            to_si_factor: self.to_si_factor * other.to_si_factor,
            // Products of offset units lose meaning
            to_si_offset: 0.0,
            category: "derived".to_string(),
        }
    }

    /// Divide two units (e.g., m / s -> m/s)
    pub fn divide(&self, other: &Unit) -> Unit {
        Unit {
            symbol: format!("{}/{}", self.symbol, other.symbol),
            name: format!("{} per {}", self.name, other.name),
            dimension: self.dimension.divide(&other.dimension),
            to_si_factor: self.to_si_factor / other.to_si_factor,
            to_si_offset: 0.0,
            category: "derived".to_string(),
        }
    }

    /// Raise unit to an integer power (e.g., m^2, s^-1)
    pub fn power(&self, exp: i32) -> Unit {
        let symbol = if exp == 1 {
            self.symbol.clone()
        } else {
            format!("{}^{}", self.symbol, exp)
        };

        Unit {
            symbol,
            name: format!("{} to the {}", self.name, exp),
            dimension: self.dimension.power(exp),
            to_si_factor: self.to_si_factor.powi(exp),
            to_si_offset: 0.0,
            category: self.category.clone(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors that can occur during unit parsing and conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Units have incompatible dimensions
    IncompatibleDimensions {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },
    /// Unknown unit symbol
    UnknownUnit(String),
    /// Malformed unit expression
    Malformed(String),
    /// Empty unit string where one was required
    EmptyUnit,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::IncompatibleDimensions { from, to, from_dim, to_dim } => {
                write!(f, "cannot convert {} ({}) to {} ({}): incompatible dimensions",
                    from, from_dim, to, to_dim)
            }
            ConversionError::UnknownUnit(unit) => {
                write!(f, "unknown unit: {}", unit)
            }
            ConversionError::Malformed(expr) => {
                write!(f, "malformed unit expression: {}", expr)
            }
            ConversionError::EmptyUnit => {
                write!(f, "empty unit string")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("m", "meter", Dimension::LENGTH, 1.0, "length")
    }

    fn kilometer() -> Unit {
        Unit::new("km", "kilometer", Dimension::LENGTH, 1000.0, "length")
    }

    fn second() -> Unit {
        Unit::new("s", "second", Dimension::TIME, 1.0, "time")
    }

    fn celsius() -> Unit {
        Unit::with_offset("degC", "degree Celsius", Dimension::TEMPERATURE, 1.0, 273.15, "temperature")
    }

    #[test]
    fn test_si_base_unit() {
        assert!(meter().is_si_base());
        assert!(!kilometer().is_si_base());
        assert!(!celsius().is_si_base());
    }

    #[test]
    fn test_compatible_units() {
        let m = meter();
        let km = kilometer();
        let s = second();

        assert!(m.is_compatible(&km));
        assert!(!m.is_compatible(&s));
    }

    #[test]
    fn test_unit_conversion() {
        let m = meter();
        let km = kilometer();

        let converted = m.convert_to(5000.0, &km).unwrap();
        assert_eq!(converted, 5.0);
    }

    #[test]
    fn test_offset_conversion() {
        let k = Unit::new("K", "kelvin", Dimension::TEMPERATURE, 1.0, "temperature");
        let converted = celsius().convert_to(25.0, &k).unwrap();
        assert_eq!(converted, 298.15);
    }

    #[test]
    fn test_incompatible_conversion() {
        let err = meter().convert_to(1.0, &second()).unwrap_err();
        assert!(matches!(err, ConversionError::IncompatibleDimensions { .. }));
    }

    #[test]
    fn test_unit_power() {
        let m2 = meter().power(2);
        assert_eq!(m2.symbol, "m^2");
        assert_eq!(m2.dimension, Dimension::AREA);
    }

    #[test]
    fn test_unit_divide() {
        let velocity = meter().divide(&second());
        assert_eq!(velocity.dimension, Dimension::VELOCITY);
        assert_eq!(velocity.symbol, "m/s");
    }
}
