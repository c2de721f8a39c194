//! Catalog errors

use thiserror::Error;
use crate::FindStatus;

/// Errors from catalog lookups and mutation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("no constant named {0}")]
    NotFound(String),

    #[error("no unique value for name \"{name}\" and unit \"{unit}\": {status}")]
    AmbiguousOrNotFound {
        name: String,
        unit: String,
        status: FindStatus,
    },

    #[error("{count} entries answer to \"{name}\"; not deleting any")]
    AmbiguousDelete { name: String, count: usize },

    #[error("name \"{0}\" is already in the catalog")]
    DuplicateName(String),

    #[error("constant entries need at least one name")]
    EmptyNames,
}
