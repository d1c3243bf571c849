//! Inventory record
//!
//! The immutable value stored by the index.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A stored inventory item
///
/// Fields are fixed at construction. The index never hands out a mutable
/// reference, so a record's ID and description always match the keys it
/// is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// Primary key, unique within an index
    id: String,

    /// Secondary key, used for ordered listing (not unique)
    description: String,

    /// Free-form storage location
    location: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            location: location.into(),
        }
    }

    /// Primary key
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Secondary key used for listing order
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Where the item is stored
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Renders the listing line: `- LED Light: Aisle 3, Shelf 1`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.description, self.location)
    }
}

/// Error parsing an `ID=DESCRIPTION@LOCATION` string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRecordError {
    #[error("expected ID=DESCRIPTION@LOCATION, got `{0}`")]
    MissingId(String),

    #[error("missing @LOCATION in `{0}`")]
    MissingLocation(String),
}

/// Parses `ID=DESCRIPTION@LOCATION`.
///
/// Splits on the first `=` and then the first `@`, so the location may
/// itself contain `@` and `=`.
impl FromStr for Record {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, rest) = s
            .split_once('=')
            .ok_or_else(|| ParseRecordError::MissingId(s.to_string()))?;
        let (description, location) = rest
            .split_once('@')
            .ok_or_else(|| ParseRecordError::MissingLocation(s.to_string()))?;
        Ok(Record::new(id, description, location))
    }
}
