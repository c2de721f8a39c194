//! Value conversion between unit strings

use tracing::debug;
use crate::{parse_unit, UnitRegistry};
use crate::unit::ConversionError;

/// The conversion seam: turn a value in one unit string into another.
///
/// Consumers hold this as a trait object so the conversion backend can be
/// swapped out (or stubbed in tests) without touching the caller.
pub trait UnitConverter {
    fn convert(&self, from: &str, to: &str, value: f64) -> Result<f64, ConversionError>;
}

/// Converter backed by dimensional analysis over a [`UnitRegistry`]
pub struct DimensionalConverter {
    registry: UnitRegistry,
}

impl DimensionalConverter {
    /// Converter over the default unit set
    pub fn new() -> Self {
        DimensionalConverter {
            registry: UnitRegistry::new(),
        }
    }

    /// Converter over a caller-supplied registry
    pub fn with_registry(registry: UnitRegistry) -> Self {
        DimensionalConverter { registry }
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }
}

impl Default for DimensionalConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitConverter for DimensionalConverter {
    fn convert(&self, from: &str, to: &str, value: f64) -> Result<f64, ConversionError> {
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(ConversionError::EmptyUnit);
        }

        let from_unit = parse_unit(&self.registry, from)?;
        let to_unit = parse_unit(&self.registry, to)?;

        match from_unit.convert_to(value, &to_unit) {
            Ok(converted) => {
                debug!(from, to, value, converted, "unit conversion");
                Ok(converted)
            }
            Err(e) => {
                debug!(from, to, error = %e, "unit conversion failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_length() {
        let converter = DimensionalConverter::new();
        let v = converter.convert("m", "cm", 1.0).unwrap();
        assert_eq!(v, 100.0);
    }

    #[test]
    fn test_convert_cgs_energy() {
        let converter = DimensionalConverter::new();
        let v = converter.convert("erg", "J", 1.0).unwrap();
        assert!((v - 1.0e-7).abs() < 1.0e-20);
    }

    #[test]
    fn test_convert_compound() {
        let converter = DimensionalConverter::new();
        let v = converter.convert("m/s", "cm/s", 2.99792458e8).unwrap();
        assert!((v - 2.99792458e10).abs() / 2.99792458e10 < 1.0e-12);
    }

    #[test]
    fn test_convert_multi_quotient() {
        let converter = DimensionalConverter::new();
        let v = converter.convert("m^3/kg/s^2", "cm^3/g/s^2", 6.6743e-11).unwrap();
        assert!((v - 6.6743e-8).abs() / 6.6743e-8 < 1.0e-12);
    }

    #[test]
    fn test_convert_incompatible() {
        let converter = DimensionalConverter::new();
        let err = converter.convert("kg", "m", 1.0).unwrap_err();
        assert!(matches!(err, ConversionError::IncompatibleDimensions { .. }));
    }

    #[test]
    fn test_convert_empty_unit() {
        let converter = DimensionalConverter::new();
        assert_eq!(converter.convert("", "m", 1.0), Err(ConversionError::EmptyUnit));
        assert_eq!(converter.convert("m", "", 1.0), Err(ConversionError::EmptyUnit));
    }

    #[test]
    fn test_convert_temperature_offset() {
        let converter = DimensionalConverter::new();
        let v = converter.convert("degC", "K", 0.0).unwrap();
        assert_eq!(v, 273.15);
    }
}
