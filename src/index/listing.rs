//! Description-ordered listing

use crate::record::Record;

/// Snapshot of the index in description order
///
/// Owns its records, so later mutation of the index is not reflected.
/// Consumed front to back, once.
#[derive(Debug)]
pub struct Listing {
    records: std::vec::IntoIter<Record>,
}

impl Listing {
    pub(crate) fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into_iter(),
        }
    }
}

impl Iterator for Listing {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for Listing {}
