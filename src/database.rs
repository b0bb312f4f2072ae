//! A database: an ordered sequence of record-sets.

use crate::rset::RecordSet;

#[derive(Debug, Clone, Default)]
pub struct Database {
    rsets: Vec<RecordSet>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rset: RecordSet) {
        self.rsets.push(rset);
    }

    pub fn len(&self) -> usize {
        self.rsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rsets.is_empty()
    }

    pub fn rsets(&self) -> impl Iterator<Item = &RecordSet> {
        self.rsets.iter()
    }

    pub fn get(&self, index: usize) -> Option<&RecordSet> {
        self.rsets.get(index)
    }

    /// The record-set whose descriptor names `rec_name`, if any.
    pub fn rset_named(&self, rec_name: &str) -> Option<&RecordSet> {
        self.rsets
            .iter()
            .find(|r| r.descriptor().is_some_and(|d| d.rec_name() == rec_name))
    }
}

impl IntoIterator for Database {
    type Item = RecordSet;
    type IntoIter = std::vec::IntoIter<RecordSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.rsets.into_iter()
    }
}
