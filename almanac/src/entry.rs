//! Constant entries and their unit-system classification

use serde::{Serialize, Deserialize};
use almanac_units::Dimension;

/// Which unit system an entry's value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI / meter-kilogram-second
    Mks,
    /// centimeter-gram-second
    Cgs,
    /// Dimensionless, or no unit system applies
    None,
    /// A meaningful unit outside MKS/CGS (GeV, MeV*fm, ...)
    Other,
}

impl UnitSystem {
    /// Short tag used in listings
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Mks => "MKS",
            UnitSystem::Cgs => "CGS",
            UnitSystem::None => "none",
            UnitSystem::Other => "other",
        }
    }
}

/// One physical constant: value, unit, provenance, and every name it
/// answers to.
///
/// Entries are immutable; unit conversion produces a modified copy via
/// [`with_converted`](ConstantEntry::with_converted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantEntry {
    /// Ordered names; `names[0]` is canonical, the rest are aliases
    pub names: Vec<String>,
    /// Unit the value is expressed in; may be empty
    pub unit: String,
    /// Unit-system flag
    pub unit_system: UnitSystem,
    /// Magnitude in `unit`
    pub value: f64,
    /// Provenance (citation or derivation note)
    pub source: String,
    /// SI dimensional signature; informational, never consulted by matching
    pub dimension: Dimension,
}

impl ConstantEntry {
    pub fn new(
        names: &[&str],
        unit: &str,
        unit_system: UnitSystem,
        value: f64,
        source: &str,
        exponents: [i32; 7],
    ) -> Self {
        ConstantEntry {
            names: names.iter().map(|n| n.to_string()).collect(),
            unit: unit.to_string(),
            unit_system,
            value,
            source: source.to_string(),
            dimension: Dimension::new(exponents),
        }
    }

    /// Canonical (display) name
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("")
    }

    /// Copy of this entry with value and unit replaced after conversion
    pub fn with_converted(&self, value: f64, unit: &str) -> Self {
        ConstantEntry {
            value,
            unit: unit.to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name() {
        let entry = ConstantEntry::new(
            &["speed of light", "c"],
            "m/s",
            UnitSystem::Mks,
            2.99792458e8,
            "exact",
            [1, 0, -1, 0, 0, 0, 0],
        );
        assert_eq!(entry.name(), "speed of light");
    }

    #[test]
    fn test_with_converted_leaves_original_alone() {
        let entry = ConstantEntry::new(
            &["x"],
            "m",
            UnitSystem::Mks,
            1.0,
            "",
            [1, 0, 0, 0, 0, 0, 0],
        );
        let converted = entry.with_converted(100.0, "cm");
        assert_eq!(converted.value, 100.0);
        assert_eq!(converted.unit, "cm");
        assert_eq!(converted.names, entry.names);
        assert_eq!(entry.value, 1.0);
        assert_eq!(entry.unit, "m");
    }
}
