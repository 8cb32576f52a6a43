//! Dataset document loading.
//!
//! The document has two top-level sections: `mapping_tables.choices` (the
//! shared choice table) and `character_preferences` (category label → list of
//! characters). Loading is tolerant: a malformed unit is skipped and counted in
//! the [`LoadReport`], and only a document that is not JSON or has neither
//! section is rejected.

use std::path::Path;

use serde_json::{Map, Value};

use crate::choices::ChoiceTable;
use crate::error::{Error, Result};
use crate::index::CharacterIndex;
use crate::types::{
    Category, CharacterEntry, Choice, ChoiceId, Location, PreferenceGroup, Preferences, Tier,
};

const BUNDLED_DATASET: &str = include_str!("../data/preferences.json");

/// Units skipped or defaulted while loading a dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub choices: usize,
    pub characters: usize,
    pub skipped_categories: usize,
    pub skipped_characters: usize,
    pub skipped_choices: usize,
    pub absent_tiers: usize,
    pub skipped_ids: usize,
}

impl LoadReport {
    /// True when nothing was skipped
    pub fn is_clean(&self) -> bool {
        self.skipped_categories == 0
            && self.skipped_characters == 0
            && self.skipped_choices == 0
            && self.skipped_ids == 0
    }
}

/// Parsed dataset: the choice table plus characters grouped by category
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub choices: ChoiceTable,
    pub categories: Vec<(Category, Vec<CharacterEntry>)>,
    pub report: LoadReport,
}

impl Dataset {
    /// The demo dataset compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    /// Load a dataset document from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::dataset_not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded dataset from {}: {} characters, {} choices",
            path.display(),
            dataset.report.characters,
            dataset.report.choices
        );
        Ok(dataset)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)?;
        let root = root
            .as_object()
            .ok_or_else(|| Error::dataset("document root is not an object"))?;

        let choices_section = root
            .get("mapping_tables")
            .and_then(|tables| tables.get("choices"))
            .and_then(Value::as_object);
        let characters_section = root.get("character_preferences").and_then(Value::as_object);

        if choices_section.is_none() && characters_section.is_none() {
            return Err(Error::dataset(
                "missing both mapping_tables.choices and character_preferences",
            ));
        }

        let mut report = LoadReport::default();
        let choices = choices_section
            .map(|section| parse_choices(section, &mut report))
            .unwrap_or_default();
        let categories = characters_section
            .map(|section| parse_categories(section, &mut report))
            .unwrap_or_default();

        if !report.is_clean() {
            tracing::warn!("Dataset loaded with skipped entries: {:?}", report);
        }

        Ok(Self {
            choices,
            categories,
            report,
        })
    }

    /// Build the sorted character index
    pub fn index(&self) -> CharacterIndex {
        CharacterIndex::build(self.categories.iter().cloned())
    }
}

fn parse_choices(section: &Map<String, Value>, report: &mut LoadReport) -> ChoiceTable {
    let mut table = ChoiceTable::new();
    for (id, entry) in section {
        let Some(text) = entry.get("choice").and_then(Value::as_str) else {
            tracing::warn!("Choice {} has no text, skipped", id);
            report.skipped_choices += 1;
            continue;
        };
        let location = entry
            .get("location")
            .and_then(Value::as_str)
            .map(Location::from_label)
            .unwrap_or(Location::Anywhere);

        if table.insert(ChoiceId::new(id.trim()), Choice::new(text, location)) {
            report.choices += 1;
        } else {
            report.skipped_choices += 1;
        }
    }
    table
}

/// Categories in display order regardless of the document's key order
fn parse_categories(
    section: &Map<String, Value>,
    report: &mut LoadReport,
) -> Vec<(Category, Vec<CharacterEntry>)> {
    for label in section.keys() {
        if Category::from_label(label).is_none() {
            tracing::warn!("Unknown category {:?} skipped", label);
            report.skipped_categories += 1;
        }
    }

    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let list = section.get(category.label())?;
            let Some(list) = list.as_array() else {
                tracing::warn!("Category {} is not a list, skipped", category);
                report.skipped_categories += 1;
                return None;
            };
            let entries = list
                .iter()
                .filter_map(|value| parse_character(value, report))
                .collect();
            Some((category, entries))
        })
        .collect()
}

fn parse_character(value: &Value, report: &mut LoadReport) -> Option<CharacterEntry> {
    let Some(name) = value.get("character_name").and_then(Value::as_str) else {
        tracing::warn!("Character record without a name skipped");
        report.skipped_characters += 1;
        return None;
    };

    let mut entry = CharacterEntry::new(name);
    entry.source_url = value
        .get("url")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string);
    entry.preferences = parse_preferences(value.get("preferences"), report);

    report.characters += 1;
    Some(entry)
}

fn parse_preferences(value: Option<&Value>, report: &mut LoadReport) -> Preferences {
    let mut preferences = Preferences::default();
    for tier in Tier::ALL {
        let group = value
            .and_then(|prefs| prefs.get(tier.key()))
            .and_then(|group| parse_group(group, report));
        if group.is_none() {
            report.absent_tiers += 1;
        }
        preferences.set(tier, group);
    }
    preferences
}

/// A tier missing either list is absent, not empty
fn parse_group(value: &Value, report: &mut LoadReport) -> Option<PreferenceGroup> {
    let liked = value.get("liked")?.as_array()?;
    let disliked = value.get("disliked")?.as_array()?;
    Some(PreferenceGroup {
        liked: parse_ids(liked, report),
        disliked: parse_ids(disliked, report),
    })
}

fn parse_ids(values: &[Value], report: &mut LoadReport) -> Vec<ChoiceId> {
    values
        .iter()
        .filter_map(|value| {
            let id = match value {
                Value::String(s) if !s.trim().is_empty() => Some(ChoiceId::new(s.trim())),
                Value::Number(n) => n.as_u64().map(ChoiceId::from),
                _ => None,
            };
            if id.is_none() {
                report.skipped_ids += 1;
            }
            id
        })
        .collect()
}
