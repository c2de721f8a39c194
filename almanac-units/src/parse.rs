//! Unit string parsing - parse expressions like "kg*m/s^2" or "1/fm"

use crate::{Unit, UnitRegistry};
use crate::unit::ConversionError;

/// Parse a unit string into a Unit
///
/// Supported formats:
/// - Simple: "m", "kg", "s"
/// - Powers: "m^2", "s^-1"
/// - Products: "MeV*fm", "kg*m^2"
/// - Quotients: "m/s", "1/fm", "m^3/kg/s^2" (each '/' divides what came before)
pub fn parse_unit(registry: &UnitRegistry, s: &str) -> Result<Unit, ConversionError> {
    let s = s.trim();

    if s.is_empty() {
        return Err(ConversionError::EmptyUnit);
    }

    // Try simple lookup first
    if let Some(unit) = registry.get(s) {
        return Ok(unit.clone());
    }

    // Chain of quotients: "kg*m^2/s^2/K" is (kg*m^2) / s^2 / K
    let mut segments = s.split('/');
    let numerator = segments.next().unwrap_or("");
    let mut result = parse_product(registry, numerator)?;

    for segment in segments {
        let denominator = parse_product(registry, segment)?;
        result = result.divide(&denominator);
    }

    Ok(result)
}

/// Parse a product of units like "kg*m" or "m^2*s"
fn parse_product(registry: &UnitRegistry, s: &str) -> Result<Unit, ConversionError> {
    let s = s.trim();

    if s.is_empty() {
        return Err(ConversionError::Malformed(s.to_string()));
    }

    // Split by '*' or '·' or ' '
    let factors: Vec<&str> = s.split(|c| c == '*' || c == '·' || c == ' ')
        .filter(|p| !p.is_empty())
        .collect();

    if factors.is_empty() {
        return Err(ConversionError::Malformed(s.to_string()));
    }

    let mut result = parse_power(registry, factors[0])?;

    for factor in &factors[1..] {
        let unit = parse_power(registry, factor)?;
        result = result.multiply(&unit);
    }

    Ok(result)
}

/// Parse a unit with optional power like "m^2" or "s^-1"
fn parse_power(registry: &UnitRegistry, s: &str) -> Result<Unit, ConversionError> {
    let s = s.trim();

    if let Some(caret_pos) = s.find('^') {
        let base = &s[..caret_pos];
        let exp_str = &s[caret_pos + 1..];

        let base_unit = lookup_base_unit(registry, base)?;
        let exponent: i32 = exp_str.parse()
            .map_err(|_| ConversionError::Malformed(format!("invalid exponent: {}", exp_str)))?;

        return Ok(base_unit.power(exponent));
    }

    lookup_base_unit(registry, s)
}

/// Look up a base unit by symbol or alias
fn lookup_base_unit(registry: &UnitRegistry, s: &str) -> Result<Unit, ConversionError> {
    let s = s.trim();

    if s == "1" {
        return Ok(Unit::one());
    }

    registry.get(s)
        .cloned()
        .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimension;

    #[test]
    fn test_parse_simple_unit() {
        let registry = UnitRegistry::new();
        let unit = parse_unit(&registry, "m").unwrap();
        assert_eq!(unit.symbol, "m");
        assert_eq!(unit.dimension, Dimension::LENGTH);
    }

    #[test]
    fn test_parse_unit_with_power() {
        let registry = UnitRegistry::new();
        let unit = parse_unit(&registry, "m^2").unwrap();
        assert_eq!(unit.dimension, Dimension::AREA);

        let unit = parse_unit(&registry, "s^-1").unwrap();
        assert_eq!(unit.dimension, Dimension::FREQUENCY);
    }

    #[test]
    fn test_parse_quotient() {
        let registry = UnitRegistry::new();
        let unit = parse_unit(&registry, "m/s").unwrap();
        assert_eq!(unit.dimension, Dimension::VELOCITY);
    }

    #[test]
    fn test_parse_multi_quotient() {
        // Newtonian G: m^3/kg/s^2
        let registry = UnitRegistry::new();
        let unit = parse_unit(&registry, "m^3/kg/s^2").unwrap();
        let expected = Dimension::new([3, -1, -2, 0, 0, 0, 0]);
        assert_eq!(unit.dimension, expected);
    }

    #[test]
    fn test_parse_reciprocal() {
        let registry = UnitRegistry::new();
        let unit = parse_unit(&registry, "1/fm").unwrap();
        assert_eq!(unit.dimension, Dimension::LENGTH.invert());
        assert!((unit.to_si_factor - 1.0e15).abs() / 1.0e15 < 1.0e-12);

        let unit = parse_unit(&registry, "1/GeV^2").unwrap();
        assert_eq!(unit.dimension, Dimension::ENERGY.power(-2));
    }

    #[test]
    fn test_parse_product() {
        let registry = UnitRegistry::new();
        let unit = parse_unit(&registry, "MeV*fm").unwrap();
        let expected = Dimension::ENERGY.multiply(&Dimension::LENGTH);
        assert_eq!(unit.dimension, expected);
    }

    #[test]
    fn test_parse_complex() {
        // Boltzmann: kg*m^2/s^2/K
        let registry = UnitRegistry::new();
        let unit = parse_unit(&registry, "kg*m^2/s^2/K").unwrap();
        let expected = Dimension::new([2, 1, -2, -1, 0, 0, 0]);
        assert_eq!(unit.dimension, expected);
    }

    #[test]
    fn test_parse_empty() {
        let registry = UnitRegistry::new();
        assert_eq!(parse_unit(&registry, ""), Err(ConversionError::EmptyUnit));
        assert_eq!(parse_unit(&registry, "   "), Err(ConversionError::EmptyUnit));
    }

    #[test]
    fn test_unknown_unit() {
        let registry = UnitRegistry::new();
        let result = parse_unit(&registry, "unknown_xyz");
        assert!(matches!(result, Err(ConversionError::UnknownUnit(_))));
    }

    #[test]
    fn test_bad_exponent() {
        let registry = UnitRegistry::new();
        let result = parse_unit(&registry, "m^x");
        assert!(matches!(result, Err(ConversionError::Malformed(_))));
    }
}
