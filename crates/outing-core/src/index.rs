//! Flat, sorted character index built from the per-category dataset

use std::sync::Arc;

use crate::collation::compare_names;
use crate::search::Matcher;
use crate::types::{Category, CategoryFilter, CharacterEntry, CharacterRecord};

/// Every character of the dataset, tagged with its category and sorted by
/// name. Cheap to clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterIndex {
    records: Arc<[CharacterRecord]>,
}

impl CharacterIndex {
    /// Flatten `(category, entries)` groups into one sorted index.
    ///
    /// Categories are concatenated in the given order before a stable sort,
    /// so equal names keep that relative order.
    pub fn build<I, E>(groups: I) -> Self
    where
        I: IntoIterator<Item = (Category, E)>,
        E: IntoIterator<Item = CharacterEntry>,
    {
        let mut records: Vec<CharacterRecord> = groups
            .into_iter()
            .flat_map(|(category, entries)| {
                entries
                    .into_iter()
                    .map(move |entry| entry.into_record(category))
            })
            .collect();

        records.sort_by(|a, b| compare_names(&a.name, &b.name));

        Self {
            records: records.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CharacterRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.records.iter()
    }

    /// Position of the record with this identity
    pub fn position_of(&self, record: &CharacterRecord) -> Option<usize> {
        self.records.iter().position(|r| r.is_same(record))
    }

    /// Positions of the records accepted by `filter` whose name matches
    pub fn filter(&self, filter: CategoryFilter, matcher: &Matcher) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.accepts(r.category) && matcher.matches(&r.name))
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of records per category, in display order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.records.iter().filter(|r| r.category == c).count()))
            .collect()
    }
}
