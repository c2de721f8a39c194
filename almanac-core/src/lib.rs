//! Almanac Core - shared text utilities
//!
//! Small helpers used across the workspace: name normalization for catalog
//! lookups and word wrapping for formatted listings. No domain types live
//! here.

pub mod text;

pub use text::{rewrap, squash_name};
