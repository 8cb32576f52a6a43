//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use outing_core::{CategoryFilter, CharacterIndex, CharacterRecord, ChoiceTable, Matcher};

use crate::config::Settings;
use crate::page_view_state::PageViewState;
use crate::scroll_sync::ScrollSync;

// ─────────────────────────────────────────────────────────────────────────────
// ViewState
// ─────────────────────────────────────────────────────────────────────────────

/// Search, filter and selection state.
///
/// `selected.is_some()` implies `is_interacting`. The default value is the
/// initial state every session starts from and `ClearSelection` returns to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub category_filter: CategoryFilter,
    pub selected: Option<CharacterRecord>,
    /// Search/filter/selection session in progress; collapses the intro
    pub is_interacting: bool,
}

impl ViewState {
    pub fn is_initial(&self) -> bool {
        *self == ViewState::default()
    }

    pub fn matcher(&self) -> Matcher {
        Matcher::new(&self.search_term)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notice
// ─────────────────────────────────────────────────────────────────────────────

/// One-line status shown in the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub view: ViewState,

    /// Sorted character index, rebuilt only when the dataset changes
    pub index: CharacterIndex,

    pub choices: ChoiceTable,

    pub settings: Settings,

    /// Dataset document the index was loaded from; `None` for bundled data
    pub dataset_path: Option<PathBuf>,

    /// Positions in `index` passing the current term and filter, in order
    pub filtered: Vec<usize>,

    /// Cursor position within `filtered`
    pub cursor: usize,

    pub page: PageViewState,

    pub scroll_sync: ScrollSync,

    pub notice: Option<Notice>,

    quitting: bool,
}

impl AppState {
    pub fn new(index: CharacterIndex, choices: ChoiceTable, settings: Settings) -> Self {
        let mut state = Self {
            view: ViewState::default(),
            index,
            choices,
            settings,
            dataset_path: None,
            filtered: Vec::new(),
            cursor: 0,
            page: PageViewState::new(),
            scroll_sync: ScrollSync::Idle,
            notice: None,
            quitting: false,
        };
        state.refilter();
        state
    }

    pub fn with_dataset_path(mut self, path: Option<PathBuf>) -> Self {
        self.dataset_path = path;
        self
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    // ─────────────────────────────────────────────────────────
    // Derived Views
    // ─────────────────────────────────────────────────────────

    /// Records passing the current term and filter, in index order
    pub fn filtered_records(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.filtered.iter().filter_map(|&i| self.index.get(i))
    }

    pub fn selected(&self) -> Option<&CharacterRecord> {
        self.view.selected.as_ref()
    }

    /// Record under the results cursor
    pub fn cursor_record(&self) -> Option<&CharacterRecord> {
        self.filtered
            .get(self.cursor)
            .and_then(|&i| self.index.get(i))
    }

    // ─────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────

    /// Recompute `filtered` from the term, filter and index
    pub fn refilter(&mut self) {
        self.filtered = self
            .index
            .filter(self.view.category_filter, &self.view.matcher());

        self.cursor = match &self.view.selected {
            Some(selected) => self.position_in_filtered(selected).unwrap_or(0),
            None => 0,
        };
    }

    /// Select the only remaining record, if exactly one is listed.
    ///
    /// Returns `true` when it did, so the caller can request a scroll sync.
    pub fn auto_select(&mut self) -> bool {
        let &[only] = self.filtered.as_slice() else {
            return false;
        };
        let Some(record) = self.index.get(only) else {
            return false;
        };
        self.view.selected = Some(record.clone());
        self.view.is_interacting = true;
        self.cursor = 0;
        true
    }

    fn position_in_filtered(&self, record: &CharacterRecord) -> Option<usize> {
        self.filtered
            .iter()
            .position(|&i| self.index.get(i).is_some_and(|r| r.is_same(record)))
    }

    /// Move the cursor onto `record` if it is listed
    pub fn focus_cursor_on(&mut self, record: &CharacterRecord) {
        if let Some(position) = self.position_in_filtered(record) {
            self.cursor = position;
        }
    }
}
