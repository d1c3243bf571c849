//! Secondary index
//!
//! Ordered multimap from description to the IDs filed under it.

use std::collections::{BTreeMap, BTreeSet};

/// Description → IDs, ordered by description then ID
#[derive(Debug, Default)]
pub struct DescriptionIndex {
    tree: BTreeMap<String, BTreeSet<String>>,
}

impl DescriptionIndex {
    pub fn new() -> Self {
        Self {
            tree: BTreeMap::new(),
        }
    }

    /// File `id` under `description`
    pub fn insert(&mut self, description: &str, id: &str) {
        self.tree
            .entry(description.to_string())
            .or_default()
            .insert(id.to_string());
    }

    /// Unfile `id` from `description`.
    ///
    /// Drops the description key once its last ID is gone. Returns whether
    /// the ID was present.
    pub fn remove(&mut self, description: &str, id: &str) -> bool {
        let Some(ids) = self.tree.get_mut(description) else {
            return false;
        };
        let removed = ids.remove(id);
        if ids.is_empty() {
            self.tree.remove(description);
        }
        removed
    }

    /// IDs filed under an exact description, in ascending order
    pub fn get(&self, description: &str) -> impl Iterator<Item = &str> {
        self.tree
            .get(description)
            .into_iter()
            .flat_map(|ids| ids.iter().map(String::as_str))
    }

    /// All `(description, id)` pairs in listing order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tree.iter().flat_map(|(description, ids)| {
            ids.iter().map(move |id| (description.as_str(), id.as_str()))
        })
    }

    /// Number of distinct descriptions
    pub fn key_count(&self) -> usize {
        self.tree.len()
    }

    /// Total number of filed IDs
    pub fn len(&self) -> usize {
        self.tree.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
