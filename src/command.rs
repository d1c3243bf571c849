//! Command definitions
//!
//! Index operations as values, so a caller can drive an [`Index`] from a
//! script of commands.
//!
//! [`Index`]: crate::index::Index

use crate::record::Record;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Add,
    Find,
    Remove,
    List,
}

/// A single index operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a record
    Add(Record),

    /// Look up a record by ID
    Find { id: String },

    /// Remove a record by ID
    Remove { id: String },

    /// List all records by description
    List,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Add(_) => CommandType::Add,
            Command::Find { .. } => CommandType::Find,
            Command::Remove { .. } => CommandType::Remove,
            Command::List => CommandType::List,
        }
    }

    pub fn find(id: impl Into<String>) -> Self {
        Command::Find { id: id.into() }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Command::Remove { id: id.into() }
    }
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Record was inserted
    Added,

    /// Record found by `Find`
    Found(Record),

    /// Record taken out by `Remove`
    Removed(Record),

    /// Snapshot produced by `List`
    Listed(Vec<Record>),
}
