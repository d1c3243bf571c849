//! Error types for Stockroom
//!
//! Provides a unified error type for all index operations.

use std::fmt;

use thiserror::Error;

/// Result type alias using StockError
pub type Result<T> = std::result::Result<T, StockError>;

/// Unified error type for Stockroom operations
///
/// Both variants are recoverable: the index is left unchanged whenever
/// one of them is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    // -------------------------------------------------------------------------
    // Primary Key Errors
    // -------------------------------------------------------------------------
    /// `add` was given a record whose ID is already stored
    #[error("Item with ID {0} already exists!")]
    DuplicateKey(String),

    /// `find_by_id` or `remove` was given an ID that is not stored
    #[error("{lookup}: {id}")]
    ItemNotFound { id: String, lookup: Lookup },
}

/// Operation that missed on the primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Find,
    Remove,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Find => write!(f, "Item not found"),
            Lookup::Remove => write!(f, "Cannot remove non-existent item"),
        }
    }
}

impl StockError {
    /// `ItemNotFound` raised by a lookup
    pub fn not_found(id: impl Into<String>) -> Self {
        StockError::ItemNotFound {
            id: id.into(),
            lookup: Lookup::Find,
        }
    }

    /// `ItemNotFound` raised by a removal
    pub fn cannot_remove(id: impl Into<String>) -> Self {
        StockError::ItemNotFound {
            id: id.into(),
            lookup: Lookup::Remove,
        }
    }

    /// The offending item ID
    pub fn key(&self) -> &str {
        match self {
            StockError::DuplicateKey(id) | StockError::ItemNotFound { id, .. } => id,
        }
    }
}
