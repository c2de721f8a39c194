//! Almanac Units - dimensional analysis and unit conversion
//!
//! A registry of named units, each carrying a dimensional signature and an
//! SI conversion factor, plus a parser for compound unit expressions like
//! "kg*m^2/s^2/K" and a converter that moves values between compatible
//! units. The converter is exposed behind the [`UnitConverter`] trait so
//! consumers can inject their own.

mod convert;
mod dimension;
mod parse;
mod registry;
mod unit;

pub use convert::{DimensionalConverter, UnitConverter};
pub use dimension::Dimension;
pub use parse::parse_unit;
pub use registry::UnitRegistry;
pub use unit::{ConversionError, Unit};
