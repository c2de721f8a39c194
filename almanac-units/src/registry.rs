//! Unit definitions organized by category

use std::collections::HashMap;
use crate::{Unit, Dimension};

/// Registry of all known units
///
/// Owned by whoever needs to resolve unit strings (typically a
/// [`DimensionalConverter`](crate::DimensionalConverter)); there is no
/// global instance, so callers can carry bespoke registries side by side.
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    /// Registry pre-loaded with the default unit set
    pub fn new() -> Self {
        let mut registry = UnitRegistry::empty();
        registry.register_all_units();
        registry
    }

    /// Registry with no units at all
    pub fn empty() -> Self {
        UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        // Try direct lookup first
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        // Try alias lookup
        if let Some(canonical) = self.aliases.get(symbol) {
            return self.units.get(canonical);
        }
        None
    }

    /// Get all units in a category
    pub fn by_category(&self, category: &str) -> Vec<&Unit> {
        self.units.values()
            .filter(|u| u.category == category)
            .collect()
    }

    /// Get all unit symbols
    pub fn symbols(&self) -> Vec<&str> {
        self.units.keys().map(|s| s.as_str()).collect()
    }

    /// Register a unit under its symbol
    pub fn register(&mut self, unit: Unit) {
        self.units.insert(unit.symbol.clone(), unit);
    }

    /// Register an alternate spelling for an existing symbol
    pub fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_all_units(&mut self) {
        self.register_si_base_units();
        self.register_si_derived_units();
        self.register_length_units();
        self.register_mass_units();
        self.register_time_units();
        self.register_temperature_units();
        self.register_energy_units();
        self.register_force_and_pressure_units();
        self.register_frequency_units();
        self.register_electromagnetic_units();
        self.register_angle_units();
        self.register_astronomy_units();
    }

    fn register_si_base_units(&mut self) {
        self.register(Unit::new("m", "meter", Dimension::LENGTH, 1.0, "length"));
        self.register(Unit::new("kg", "kilogram", Dimension::MASS, 1.0, "mass"));
        self.register(Unit::new("s", "second", Dimension::TIME, 1.0, "time"));
        self.register(Unit::new("K", "kelvin", Dimension::TEMPERATURE, 1.0, "temperature"));
        self.register(Unit::new("A", "ampere", Dimension::CURRENT, 1.0, "current"));
        self.register(Unit::new("mol", "mole", Dimension::AMOUNT, 1.0, "amount"));
        self.register(Unit::new("cd", "candela", Dimension::LUMINOSITY, 1.0, "luminosity"));

        self.alias("meter", "m");
        self.alias("meters", "m");
        self.alias("kilogram", "kg");
        self.alias("kilograms", "kg");
        self.alias("second", "s");
        self.alias("seconds", "s");
        self.alias("kelvin", "K");
        self.alias("ampere", "A");
        self.alias("amp", "A");
        self.alias("mole", "mol");
        self.alias("candela", "cd");
    }

    fn register_si_derived_units(&mut self) {
        self.register(Unit::new("N", "newton", Dimension::FORCE, 1.0, "force"));
        self.register(Unit::new("J", "joule", Dimension::ENERGY, 1.0, "energy"));
        self.register(Unit::new("W", "watt", Dimension::POWER, 1.0, "power"));
        self.register(Unit::new("Pa", "pascal", Dimension::PRESSURE, 1.0, "pressure"));
        self.register(Unit::new("Hz", "hertz", Dimension::FREQUENCY, 1.0, "frequency"));
        self.register(Unit::new("C", "coulomb", Dimension::CHARGE, 1.0, "charge"));
        self.register(Unit::new("T", "tesla", Dimension::MAGNETIC_FLUX_DENSITY, 1.0, "magnetic"));
        self.register(Unit::new("F", "farad", Dimension::CAPACITANCE, 1.0, "capacitance"));

        self.alias("newton", "N");
        self.alias("joule", "J");
        self.alias("joules", "J");
        self.alias("watt", "W");
        self.alias("pascal", "Pa");
        self.alias("hertz", "Hz");
        self.alias("coulomb", "C");
        self.alias("tesla", "T");
        self.alias("farad", "F");
    }

    fn register_length_units(&mut self) {
        self.register(Unit::new("km", "kilometer", Dimension::LENGTH, 1.0e3, "length"));
        self.register(Unit::new("cm", "centimeter", Dimension::LENGTH, 1.0e-2, "length"));
        self.register(Unit::new("mm", "millimeter", Dimension::LENGTH, 1.0e-3, "length"));
        self.register(Unit::new("um", "micrometer", Dimension::LENGTH, 1.0e-6, "length"));
        self.register(Unit::new("nm", "nanometer", Dimension::LENGTH, 1.0e-9, "length"));
        self.register(Unit::new("pm", "picometer", Dimension::LENGTH, 1.0e-12, "length"));
        self.register(Unit::new("fm", "femtometer", Dimension::LENGTH, 1.0e-15, "length"));
        self.register(Unit::new("angstrom", "angstrom", Dimension::LENGTH, 1.0e-10, "length"));

        self.alias("kilometer", "km");
        self.alias("centimeter", "cm");
        self.alias("millimeter", "mm");
        self.alias("micrometer", "um");
        self.alias("nanometer", "nm");
        self.alias("femtometer", "fm");
        self.alias("fermi", "fm");
    }

    fn register_mass_units(&mut self) {
        self.register(Unit::new("g", "gram", Dimension::MASS, 1.0e-3, "mass"));
        self.register(Unit::new("mg", "milligram", Dimension::MASS, 1.0e-6, "mass"));
        self.register(Unit::new("u", "atomic mass unit", Dimension::MASS, 1.660_539_066_60e-27, "mass"));

        self.alias("gram", "g");
        self.alias("grams", "g");
        self.alias("amu", "u");
        self.alias("Da", "u");
    }

    fn register_time_units(&mut self) {
        self.register(Unit::new("ms", "millisecond", Dimension::TIME, 1.0e-3, "time"));
        self.register(Unit::new("us", "microsecond", Dimension::TIME, 1.0e-6, "time"));
        self.register(Unit::new("ns", "nanosecond", Dimension::TIME, 1.0e-9, "time"));
        self.register(Unit::new("min", "minute", Dimension::TIME, 60.0, "time"));
        self.register(Unit::new("h", "hour", Dimension::TIME, 3600.0, "time"));
        self.register(Unit::new("d", "day", Dimension::TIME, 86400.0, "time"));
        // Julian year
        self.register(Unit::new("yr", "year", Dimension::TIME, 3.155_76e7, "time"));

        self.alias("hour", "h");
        self.alias("day", "d");
        self.alias("year", "yr");
        self.alias("years", "yr");
    }

    fn register_temperature_units(&mut self) {
        self.register(Unit::with_offset("degC", "degree Celsius", Dimension::TEMPERATURE, 1.0, 273.15, "temperature"));
        self.alias("celsius", "degC");
    }

    fn register_energy_units(&mut self) {
        self.register(Unit::new("erg", "erg", Dimension::ENERGY, 1.0e-7, "energy"));
        self.register(Unit::new("eV", "electronvolt", Dimension::ENERGY, 1.602_176_634e-19, "energy"));
        self.register(Unit::new("keV", "kiloelectronvolt", Dimension::ENERGY, 1.602_176_634e-16, "energy"));
        self.register(Unit::new("MeV", "megaelectronvolt", Dimension::ENERGY, 1.602_176_634e-13, "energy"));
        self.register(Unit::new("GeV", "gigaelectronvolt", Dimension::ENERGY, 1.602_176_634e-10, "energy"));

        self.alias("electronvolt", "eV");
    }

    fn register_force_and_pressure_units(&mut self) {
        self.register(Unit::new("dyn", "dyne", Dimension::FORCE, 1.0e-5, "force"));
        self.register(Unit::new("bar", "bar", Dimension::PRESSURE, 1.0e5, "pressure"));
        self.register(Unit::new("atm", "atmosphere", Dimension::PRESSURE, 101_325.0, "pressure"));

        self.alias("dyne", "dyn");
    }

    fn register_frequency_units(&mut self) {
        self.register(Unit::new("kHz", "kilohertz", Dimension::FREQUENCY, 1.0e3, "frequency"));
        self.register(Unit::new("MHz", "megahertz", Dimension::FREQUENCY, 1.0e6, "frequency"));
        self.register(Unit::new("GHz", "gigahertz", Dimension::FREQUENCY, 1.0e9, "frequency"));
    }

    fn register_electromagnetic_units(&mut self) {
        self.register(Unit::new("G", "gauss", Dimension::MAGNETIC_FLUX_DENSITY, 1.0e-4, "magnetic"));
        self.alias("gauss", "G");
    }

    fn register_angle_units(&mut self) {
        self.register(Unit::new("rad", "radian", Dimension::DIMENSIONLESS, 1.0, "angle"));
        self.register(Unit::new("sr", "steradian", Dimension::DIMENSIONLESS, 1.0, "angle"));
        self.register(Unit::new("deg", "degree", Dimension::DIMENSIONLESS, std::f64::consts::PI / 180.0, "angle"));

        self.alias("radian", "rad");
        self.alias("steradian", "sr");
        self.alias("degree", "deg");
    }

    fn register_astronomy_units(&mut self) {
        // IAU 2012 exact definition
        self.register(Unit::new("AU", "astronomical unit", Dimension::LENGTH, 1.495_978_707e11, "astronomy"));
        // Julian year times the speed of light
        self.register(Unit::new("ly", "light year", Dimension::LENGTH, 9.460_730_472_580_8e15, "astronomy"));
        self.register(Unit::new("pc", "parsec", Dimension::LENGTH, 3.085_677_581_491_367_3e16, "astronomy"));
        self.register(Unit::new("Msun", "solar mass", Dimension::MASS, 1.988_409_9e30, "astronomy"));

        self.alias("au", "AU");
        self.alias("lightyear", "ly");
        self.alias("parsec", "pc");
        self.alias("solarmass", "Msun");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
