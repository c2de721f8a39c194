//! Almanac: a unit-aware catalog of physical and astronomical constants.
//!
//! The catalog maps names and aliases to values, resolves requested units
//! against each entry's unit system, and falls back to unit conversion
//! through an injected [`UnitConverter`]. Companion crates supply the
//! dimensional converter ([`almanac_units`]), an expression parser with
//! function-object wrappers ([`almanac_expr`]), and shared text utilities
//! ([`almanac_core`]).
//!
//! ```
//! use almanac::ConstantCatalog;
//! use almanac_units::DimensionalConverter;
//!
//! let catalog = ConstantCatalog::new(Box::new(DimensionalConverter::new()));
//! let c = catalog.find_unique("speed of light", "km/s").unwrap();
//! assert!((c - 2.99792458e5).abs() < 1e-9);
//! ```

pub mod builtin;
pub mod catalog;
pub mod entry;
pub mod error;
pub mod listing;
pub mod status;

pub use builtin::seed_entries;
pub use catalog::{ConstantCatalog, FindResult};
pub use entry::{ConstantEntry, UnitSystem};
pub use error::CatalogError;
pub use status::FindStatus;

pub use almanac_core;
pub use almanac_expr;
pub use almanac_units;
pub use almanac_units::UnitConverter;

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_units::DimensionalConverter;

    fn catalog() -> ConstantCatalog {
        ConstantCatalog::new(Box::new(DimensionalConverter::new()))
    }

    #[test]
    fn test_builtin_speed_of_light() {
        let cat = catalog();

        let mks = cat.find("speed of light", "mks", 0);
        assert_eq!(mks.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(mks.entries[0].value, 2.99792458e8);
        assert_eq!(mks.entries[0].unit, "m/s");

        let cgs = cat.find("c", "cgs", 0);
        assert_eq!(cgs.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(cgs.entries[0].value, 2.99792458e10);
        assert_eq!(cgs.entries[0].unit, "cm/s");
    }

    #[test]
    fn test_builtin_conversion_fallback() {
        let cat = catalog();
        let c = cat.find_unique("speed of light", "km/s").unwrap();
        assert!((c - 2.99792458e5).abs() / c < 1e-12);
    }

    #[test]
    fn test_avogadro_mass_request_mismatches() {
        let cat = catalog();
        let result = cat.find("avogadro", "kg", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitMismatch);
        assert_eq!(result.entries[0].value, 6.02214076e23);
    }

    #[test]
    fn test_unknown_name() {
        let cat = catalog();
        let result = cat.find("zzz", "any", 0);
        assert_eq!(result.status, FindStatus::NoMatches);
    }

    #[test]
    fn test_electron_mass_in_mev() {
        // m_e c^2 is about 0.511 MeV, but m_e itself in MeV/c^2 units is
        // not convertible by a dimensional converter; kg works directly
        let cat = catalog();
        let me = cat.find_unique("electron mass", "kg").unwrap();
        assert_eq!(me, 9.1093837015e-31);
    }

    #[test]
    fn test_planet_listing_present() {
        let cat = catalog();
        let result = cat.find("mass jupiter", "kg", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(result.entries[0].value, 1.8981246e27);
    }

    #[test]
    fn test_wildcard_over_builtin_table() {
        let cat = catalog();
        let result = cat.find("zeta*", "none", 0);
        assert_eq!(result.status, FindStatus::MultiPatternMatchUnitOk);
        assert_eq!(result.entries.len(), 6);
    }
}
