//! # outing-core - Core Domain Types
//!
//! Foundation crate for Outing Guide. Provides the character and preference
//! domain types, Hangul initial-consonant search, name collation, dataset
//! loading and the sorted character index.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde_json, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Category`], [`CategoryFilter`] - Character archetypes and the filter chips
//! - [`CharacterRecord`] - A character tagged with its category
//! - [`Preferences`], [`PreferenceGroup`], [`Tier`] - Tiered likes and dislikes
//! - [`Choice`], [`ChoiceId`], [`Location`] - Entries of the shared choice table
//! - [`DisplayName`] - Name split into main part and `(variant)` qualifier
//!
//! ### Search (`hangul`, `search`)
//! - [`initial_of()`] / [`initials()`] - Initial-consonant class of a syllable
//! - [`matches()`], [`Matcher`] - Substring match with an initials fallback
//!
//! ### Dataset (`dataset`, `index`, `choices`)
//! - [`Dataset`] - Tolerant loader for the preference document
//! - [`CharacterIndex`] - Flattened index sorted by [`compare_names()`]
//! - [`ChoiceTable`] - Id lookup; unknown ids are omitted on resolution
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use outing_core::prelude::*;
//! ```

pub mod choices;
pub mod collation;
pub mod dataset;
pub mod error;
pub mod hangul;
pub mod index;
pub mod logging;
pub mod search;
pub mod types;

/// Prelude for common imports used throughout all Outing Guide crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use choices::{ChoiceTable, ResolvedChoice, ResolvedGroup};
pub use collation::compare_names;
pub use dataset::{Dataset, LoadReport};
pub use error::{Error, Result, ResultExt};
pub use hangul::{initial_of, initials, is_syllable};
pub use index::CharacterIndex;
pub use search::{matches, Matcher};
pub use types::{
    Category, CategoryFilter, CharacterEntry, CharacterRecord, Choice, ChoiceId, DisplayName,
    Location, PreferenceGroup, Preferences, Tier, ALL_CATEGORIES_LABEL, ANYWHERE_LOCATION,
};
