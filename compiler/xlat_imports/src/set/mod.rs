//! Deduplicated, insertion-ordered collection of imports.

use rustc_hash::FxHashMap;

use crate::ImportRecord;

/// Imports keyed by type name, iterated in insertion order.
///
/// Inserting a record whose type name is already present is a no-op; the
/// first record wins.
#[derive(Clone, Debug, Default)]
pub struct ImportSet {
    records: Vec<ImportRecord>,
    /// Type name to position in `records`.
    index: FxHashMap<String, usize>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`. Returns `false` if its type name was already present.
    pub fn insert(&mut self, record: ImportRecord) -> bool {
        if self.index.contains_key(record.type_name()) {
            return false;
        }
        self.index
            .insert(record.type_name().to_owned(), self.records.len());
        self.records.push(record);
        true
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.index.contains_key(type_name)
    }

    pub fn get(&self, type_name: &str) -> Option<&ImportRecord> {
        self.index.get(type_name).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ImportRecord> {
        self.records.iter()
    }

    /// Records sorted by type name, the order include directives are emitted in.
    pub fn sorted(&self) -> Vec<&ImportRecord> {
        let mut sorted: Vec<_> = self.records.iter().collect();
        sorted.sort_unstable();
        sorted
    }

    /// Consume the set into records sorted by type name.
    pub fn into_sorted(self) -> Vec<ImportRecord> {
        let mut records = self.records;
        records.sort_unstable();
        records
    }
}

/// Set equality: same type names, regardless of insertion order.
impl PartialEq for ImportSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.records.iter().all(|r| other.contains(r.type_name()))
    }
}

impl Eq for ImportSet {}

impl Extend<ImportRecord> for ImportSet {
    fn extend<I: IntoIterator<Item = ImportRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<ImportRecord> for ImportSet {
    fn from_iter<I: IntoIterator<Item = ImportRecord>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ImportSet {
    type Item = ImportRecord;
    type IntoIter = std::vec::IntoIter<ImportRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ImportSet {
    type Item = &'a ImportRecord;
    type IntoIter = std::slice::Iter<'a, ImportRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests;
