//! Index implementation
//!
//! HashMap primary index plus ordered description index.

use std::collections::HashMap;

use crate::command::{Command, Outcome};
use crate::config::Config;
use crate::error::{Result, StockError};
use crate::record::Record;

use super::{DescriptionIndex, Listing};

/// In-memory inventory index
///
/// ## Consistency
///
/// - `by_id` is the only owner of records
/// - `by_description` files every stored ID under that record's own
///   description, and holds nothing else
/// - Every check that can fail runs before the first mutation, so a
///   failed operation leaves both structures untouched
///
/// Mutation takes `&mut self`; sharing an index across threads requires
/// the caller to wrap it in a lock.
#[derive(Debug, Default)]
pub struct Index {
    /// Primary index: ID → record
    by_id: HashMap<String, Record>,

    /// Secondary index: description → IDs
    by_description: DescriptionIndex,
}

impl Index {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index sized from the config
    pub fn with_config(config: &Config) -> Self {
        Self {
            by_id: HashMap::with_capacity(config.initial_capacity),
            by_description: DescriptionIndex::new(),
        }
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add(record) => {
                self.add(record)?;
                Ok(Outcome::Added)
            }
            Command::Find { id } => self.find_by_id(&id).cloned().map(Outcome::Found),
            Command::Remove { id } => self.remove(&id).map(Outcome::Removed),
            Command::List => Ok(Outcome::Listed(self.list_by_description().collect())),
        }
    }

    /// Insert a record under its ID and description
    ///
    /// Fails with `DuplicateKey` if the ID is already stored.
    pub fn add(&mut self, record: Record) -> Result<()> {
        tracing::debug!(id = record.id(), description = record.description(), "adding item");

        if self.by_id.contains_key(record.id()) {
            return Err(StockError::DuplicateKey(record.id().to_string()));
        }

        self.by_description.insert(record.description(), record.id());
        self.by_id.insert(record.id().to_string(), record);
        Ok(())
    }

    /// Add each record in turn, continuing past failures
    ///
    /// Returns the errors in input order; an empty vec means every record
    /// was stored.
    pub fn add_all(
        &mut self,
        records: impl IntoIterator<Item = Record>,
    ) -> Vec<StockError> {
        records
            .into_iter()
            .filter_map(|record| self.add(record).err())
            .collect()
    }

    /// Look up a record by ID
    pub fn find_by_id(&self, id: &str) -> Result<&Record> {
        tracing::debug!(id, "retrieving item");

        self.by_id
            .get(id)
            .ok_or_else(|| StockError::not_found(id))
    }

    /// Remove a record by ID, returning it
    ///
    /// The description entry is unfiled using the removed record's own
    /// description, which always matches where `add` filed it.
    pub fn remove(&mut self, id: &str) -> Result<Record> {
        tracing::debug!(id, "removing item");

        let record = self
            .by_id
            .remove(id)
            .ok_or_else(|| StockError::cannot_remove(id))?;

        let unfiled = self.by_description.remove(record.description(), record.id());
        debug_assert!(unfiled, "description index out of step for {}", record.id());

        Ok(record)
    }

    /// Snapshot of all records, ascending by description then ID
    pub fn list_by_description(&self) -> Listing {
        let records = self
            .by_description
            .iter()
            .filter_map(|(_, id)| self.by_id.get(id).cloned())
            .collect();
        Listing::new(records)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Whether a record with this ID is stored
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Records filed under an exact description, ascending by ID
    pub fn find_by_description<'a>(
        &'a self,
        description: &str,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        let ids: Vec<&'a str> = self.by_description.get(description).collect();
        ids.into_iter().filter_map(move |id| self.by_id.get(id))
    }

    /// Number of distinct descriptions
    pub fn description_count(&self) -> usize {
        self.by_description.key_count()
    }
}
