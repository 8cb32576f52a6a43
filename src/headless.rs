//! Headless mode - answer one query without a terminal
//!
//! Drives the same state machine as the TUI: the category and search term are
//! applied as messages, so auto-selection behaves exactly as it does on
//! screen. The outcome is printed once, as plain text or as one JSON line:
//!
//! ```json
//! {"event":"results","count":2,"characters":[{"name":"라헬","category":"천악혼"},...]}
//! {"event":"character","name":"유리","category":"인간형","source_url":null,"tiers":[...]}
//! {"event":"no_results","term":"없는정령","category":"전체"}
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use outing_app::message::Message;
use outing_app::process::apply;
use outing_app::AppState;
use outing_core::prelude::*;
use outing_core::{CategoryFilter, CharacterRecord, ChoiceTable, ResolvedChoice};
use serde::Serialize;

/// What to look up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub term: String,
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Outcome of a headless query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Several characters match
    Results {
        count: usize,
        characters: Vec<ListedCharacter>,
    },
    /// Exactly one character is selected
    Character(CharacterView),
    /// Nothing matches
    NoResults { term: String, category: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedCharacter {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterView {
    pub name: String,
    pub category: String,
    pub source_url: Option<String>,
    pub tiers: Vec<TierView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierView {
    pub tier: String,
    pub title: String,
    pub liked: Vec<ChoiceView>,
    pub disliked: Vec<ChoiceView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    pub text: String,
    /// `None` for choices available anywhere
    pub location: Option<String>,
}

impl From<&ResolvedChoice<'_>> for ChoiceView {
    fn from(choice: &ResolvedChoice<'_>) -> Self {
        Self {
            text: choice.text.to_string(),
            location: choice.location.map(str::to_string),
        }
    }
}

impl CharacterView {
    fn new(record: &CharacterRecord, choices: &ChoiceTable) -> Self {
        let tiers = record
            .preferences
            .tiers()
            .map(|(tier, group)| {
                let resolved = choices.resolve_group(group);
                TierView {
                    tier: tier.key().to_string(),
                    title: tier.title().to_string(),
                    liked: resolved.liked.iter().map(ChoiceView::from).collect(),
                    disliked: resolved.disliked.iter().map(ChoiceView::from).collect(),
                }
            })
            .collect();

        Self {
            name: record.name.clone(),
            category: record.category.to_string(),
            source_url: record.source_url.clone(),
            tiers,
        }
    }
}

/// Apply `query` to `state` and describe what the screen would show
pub fn answer(state: &mut AppState, query: &Query) -> HeadlessEvent {
    apply(state, Message::SetCategory(query.category));
    apply(state, Message::SetSearchTerm(query.term.clone()));

    if let Some(record) = state.selected() {
        return HeadlessEvent::Character(CharacterView::new(record, &state.choices));
    }

    let characters: Vec<ListedCharacter> = state
        .filtered_records()
        .map(|record| ListedCharacter {
            name: record.name.clone(),
            category: record.category.to_string(),
        })
        .collect();

    if characters.is_empty() {
        HeadlessEvent::NoResults {
            term: query.term.clone(),
            category: query.category.label().to_string(),
        }
    } else {
        HeadlessEvent::Results {
            count: characters.len(),
            characters,
        }
    }
}

impl HeadlessEvent {
    /// Human-readable rendering
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match self {
            HeadlessEvent::Results { characters, .. } => {
                for c in characters {
                    let _ = writeln!(out, "{}\t{}", c.name, c.category);
                }
            }
            HeadlessEvent::Character(view) => {
                let _ = writeln!(out, "{} [{}]", view.name, view.category);
                if let Some(url) = &view.source_url {
                    let _ = writeln!(out, "출처: {url}");
                }
                for tier in &view.tiers {
                    let _ = writeln!(out, "\n[{}]", tier.title);
                    for choice in &tier.liked {
                        let _ = writeln!(out, "  ❤️ {}", choice_text(choice));
                    }
                    for choice in &tier.disliked {
                        let _ = writeln!(out, "  💛 {}", choice_text(choice));
                    }
                }
            }
            HeadlessEvent::NoResults { .. } => {
                out.push_str("검색 결과가 없습니다.\n");
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn choice_text(choice: &ChoiceView) -> String {
    match &choice.location {
        Some(location) => format!("{} ({location})", choice.text),
        None => choice.text.clone(),
    }
}

/// Answer `query` and print the outcome to stdout
pub fn run_headless(mut state: AppState, query: &Query, format: OutputFormat) -> Result<()> {
    let event = answer(&mut state, query);
    debug!("Headless query {:?} -> {:?}", query, event);

    let output = match format {
        OutputFormat::Text => event.to_text(),
        OutputFormat::Json => event.to_json()? + "\n",
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use outing_app::config::Settings;
    use outing_core::{Category, Dataset};

    fn state() -> AppState {
        let dataset = Dataset::bundled().unwrap();
        AppState::new(dataset.index(), dataset.choices, Settings::default())
    }

    fn query(term: &str, category: CategoryFilter) -> Query {
        Query {
            term: term.to_string(),
            category,
        }
    }

    #[test]
    fn test_category_lists_members() {
        let event = answer(
            &mut state(),
            &query("", CategoryFilter::Only(Category::AngelDemon)),
        );
        match event {
            HeadlessEvent::Results { count, characters } => {
                assert_eq!(count, 2);
                assert!(characters.iter().all(|c| c.category == "천악혼"));
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn test_single_match_is_selected() {
        let event = answer(&mut state(), &query("수영복", CategoryFilter::All));
        match event {
            HeadlessEvent::Character(view) => {
                assert_eq!(view.name, "카렌(수영복)");
                assert_eq!(view.tiers.len(), 3);
                assert_eq!(view.tiers[0].title, "커먼");
            }
            other => panic!("expected character, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_tier_is_omitted() {
        let event = answer(&mut state(), &query("아이리스", CategoryFilter::All));
        let HeadlessEvent::Character(view) = event else {
            panic!("expected character");
        };
        let tiers: Vec<&str> = view.tiers.iter().map(|t| t.tier.as_str()).collect();
        assert_eq!(tiers, vec!["rare_day", "rare_night"]);
    }

    #[test]
    fn test_no_results() {
        let event = answer(&mut state(), &query("없는정령", CategoryFilter::All));
        assert_eq!(event.to_text(), "검색 결과가 없습니다.\n");
        assert_eq!(
            event.to_json().unwrap(),
            r#"{"event":"no_results","term":"없는정령","category":"전체"}"#
        );
    }

    #[test]
    fn test_json_is_tagged() {
        let event = answer(&mut state(), &query("ㄹㅎ", CategoryFilter::All));
        let json: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(json["event"], "character");
        assert_eq!(json["name"], "라헬");
    }

    #[test]
    fn test_text_shows_location_only_when_bound() {
        let event = answer(&mut state(), &query("유리", CategoryFilter::All));
        let text = event.to_text();
        assert!(text.starts_with("유리 [인간형]\n"));
        assert!(text.contains("출처: "));
        assert!(!text.contains("어디서나"));
        assert!(text.contains("[레어 (낮)]"));
    }
}
