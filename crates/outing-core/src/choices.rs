//! Choice table lookup for preference identifiers

use std::collections::BTreeMap;

use crate::types::{Choice, ChoiceId, PreferenceGroup};

/// Shared table of preference choices, keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceTable {
    entries: BTreeMap<ChoiceId, Choice>,
}

impl ChoiceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a choice; a repeated id keeps the first entry
    pub fn insert(&mut self, id: ChoiceId, choice: Choice) -> bool {
        if self.entries.contains_key(&id) {
            tracing::warn!("Duplicate choice id {} ignored", id);
            return false;
        }
        self.entries.insert(id, choice);
        true
    }

    pub fn resolve(&self, id: &ChoiceId) -> Option<&Choice> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChoiceId, &Choice)> {
        self.entries.iter()
    }

    /// Resolve every id of a group; unknown ids are dropped
    pub fn resolve_group<'a>(&'a self, group: &'a PreferenceGroup) -> ResolvedGroup<'a> {
        ResolvedGroup {
            liked: self.resolve_ids(&group.liked),
            disliked: self.resolve_ids(&group.disliked),
        }
    }

    fn resolve_ids<'a>(&'a self, ids: &'a [ChoiceId]) -> Vec<ResolvedChoice<'a>> {
        ids.iter()
            .filter_map(|id| match self.resolve(id) {
                Some(choice) => Some(ResolvedChoice {
                    id,
                    text: &choice.text,
                    location: choice.location.qualifier(),
                }),
                None => {
                    tracing::debug!("Unknown choice id {} omitted", id);
                    None
                }
            })
            .collect()
    }
}

impl FromIterator<(ChoiceId, Choice)> for ChoiceTable {
    fn from_iter<T: IntoIterator<Item = (ChoiceId, Choice)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (id, choice) in iter {
            table.insert(id, choice);
        }
        table
    }
}

/// A choice ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedChoice<'a> {
    pub id: &'a ChoiceId,
    pub text: &'a str,
    /// Location qualifier; `None` for choices available anywhere
    pub location: Option<&'a str>,
}

/// Liked/disliked choices of one tier with unknown ids removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedGroup<'a> {
    pub liked: Vec<ResolvedChoice<'a>>,
    pub disliked: Vec<ResolvedChoice<'a>>,
}
