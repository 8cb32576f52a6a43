//! Integration tests for headless queries against a dataset file

use std::fs;

use outing_app::config::Settings;
use outing_app::AppState;
use outing_core::{Category, CategoryFilter, Dataset};
use outing_guide::headless::answer;
use outing_guide::{HeadlessEvent, Query};
use tempfile::TempDir;

const DATASET: &str = r#"{
  "mapping_tables": {
    "choices": {
      "1": { "choice": "산책한다", "location": "어디서나" },
      "2": { "choice": "모래성", "location": "낮의 해변가" },
      "3": { "choice": "별 보기", "location": "밤의 언덕" }
    }
  },
  "character_preferences": {
    "야수형": [
      { "character_name": "가다",
        "preferences": { "common": { "liked": ["1"], "disliked": ["2"] } } },
      { "character_name": "가나" }
    ],
    "인간형": [
      { "character_name": "B",
        "preferences": { "rare_day": { "liked": [2], "disliked": [3] } } },
      { "character_name": "A",
        "url": "https://example.com/a",
        "preferences": {
          "common": { "liked": ["1", "999"], "disliked": ["3"] },
          "rare_night": { "liked": ["3"] }
        } }
    ]
  }
}"#;

fn state_from_file() -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, DATASET).unwrap();

    let dataset = Dataset::from_path(&path).unwrap();
    let state = AppState::new(dataset.index(), dataset.choices, Settings::default())
        .with_dataset_path(Some(path));
    (dir, state)
}

fn query(term: &str, category: CategoryFilter) -> Query {
    Query {
        term: term.to_string(),
        category,
    }
}

#[test]
fn test_lists_sorted_by_name() {
    let (_dir, mut state) = state_from_file();
    let HeadlessEvent::Results { characters, .. } =
        answer(&mut state, &query("", CategoryFilter::All))
    else {
        panic!("expected a list");
    };

    let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["가나", "가다", "A", "B"]);
}

#[test]
fn test_category_filter_auto_selects_single_member() {
    let (_dir, mut state) = state_from_file();
    let event = answer(&mut state, &query("b", CategoryFilter::Only(Category::Human)));

    let HeadlessEvent::Character(view) = event else {
        panic!("expected a card");
    };
    assert_eq!(view.name, "B");
    assert_eq!(view.tiers.len(), 1);
    assert_eq!(view.tiers[0].title, "레어 (낮)");
    assert_eq!(view.tiers[0].liked[0].location.as_deref(), Some("낮의 해변가"));
}

#[test]
fn test_card_omits_unknown_ids_and_incomplete_tiers() {
    let (_dir, mut state) = state_from_file();
    let HeadlessEvent::Character(view) = answer(&mut state, &query("A", CategoryFilter::All))
    else {
        panic!("expected a card");
    };

    assert_eq!(view.source_url.as_deref(), Some("https://example.com/a"));
    // rare_night has no disliked list, so the tier is absent
    assert_eq!(view.tiers.len(), 1);
    let common = &view.tiers[0];
    assert_eq!(common.liked.len(), 1);
    assert_eq!(common.liked[0].text, "산책한다");
    assert_eq!(common.liked[0].location, None);
}

#[test]
fn test_initials_match_both_names() {
    let (_dir, mut state) = state_from_file();
    let event = answer(&mut state, &query("ㄱ", CategoryFilter::All));

    let HeadlessEvent::Results { count, .. } = event else {
        panic!("expected a list");
    };
    assert_eq!(count, 2);
}

#[test]
fn test_nothing_matches() {
    let (_dir, mut state) = state_from_file();
    let event = answer(&mut state, &query("ㅎ", CategoryFilter::Only(Category::Beast)));

    assert_eq!(
        event,
        HeadlessEvent::NoResults {
            term: "ㅎ".to_string(),
            category: "야수형".to_string(),
        }
    );
}
