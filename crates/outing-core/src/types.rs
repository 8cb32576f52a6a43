//! Domain types for the character preference dataset

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

/// Location label the dataset uses for "anywhere" (no qualifier shown).
pub const ANYWHERE_LOCATION: &str = "어디서나";

/// Label of the "all categories" filter chip.
pub const ALL_CATEGORIES_LABEL: &str = "전체";

static QUALIFIED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\((.*?)\)$").expect("Invalid qualified name regex"));

// ─────────────────────────────────────────────────────────────────────────────
// Category
// ─────────────────────────────────────────────────────────────────────────────

/// Character archetype. The declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Human,
    Beast,
    Fairy,
    Undead,
    AngelDemon,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Human,
        Category::Beast,
        Category::Fairy,
        Category::Undead,
        Category::AngelDemon,
    ];

    /// Dataset label (also shown on the filter chip)
    pub fn label(self) -> &'static str {
        match self {
            Category::Human => "인간형",
            Category::Beast => "야수형",
            Category::Fairy => "요정형",
            Category::Undead => "불사형",
            Category::AngelDemon => "천악혼",
        }
    }

    /// ASCII alias accepted on the command line
    pub fn alias(self) -> &'static str {
        match self {
            Category::Human => "human",
            Category::Beast => "beast",
            Category::Fairy => "fairy",
            Category::Undead => "undead",
            Category::AngelDemon => "angel-demon",
        }
    }

    /// Look up a category by its dataset label or ASCII alias
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label || c.alias().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category filter: every category, or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter chips in display order, `All` first
    pub const CHIPS: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Human),
        CategoryFilter::Only(Category::Beast),
        CategoryFilter::Only(Category::Fairy),
        CategoryFilter::Only(Category::Undead),
        CategoryFilter::Only(Category::AngelDemon),
    ];

    pub fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }

    pub fn is_all(self) -> bool {
        self == CategoryFilter::All
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Next chip to the right, wrapping around
    pub fn next(self) -> Self {
        let pos = self.chip_position();
        Self::CHIPS[(pos + 1) % Self::CHIPS.len()]
    }

    /// Previous chip to the left, wrapping around
    pub fn prev(self) -> Self {
        let pos = self.chip_position();
        Self::CHIPS[(pos + Self::CHIPS.len() - 1) % Self::CHIPS.len()]
    }

    fn chip_position(self) -> usize {
        Self::CHIPS.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == ALL_CATEGORIES_LABEL || s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_label(s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| Error::unknown_category(s))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Choices
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque key into the choice table.
///
/// The dataset writes ids either as strings or integers; both normalize to
/// the same textual key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChoiceId(String);

impl ChoiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ChoiceId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ChoiceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a choice can be made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Available everywhere; no qualifier is displayed
    Anywhere,
    /// Only at the named place
    At(String),
}

impl Location {
    /// Parse a dataset location label; the anywhere sentinel maps to `Anywhere`
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label == ANYWHERE_LOCATION {
            Location::Anywhere
        } else {
            Location::At(label.to_string())
        }
    }

    /// Qualifier to display, if any
    pub fn qualifier(&self) -> Option<&str> {
        match self {
            Location::Anywhere => None,
            Location::At(place) => Some(place),
        }
    }
}

/// One entry of the shared choice table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub text: String,
    pub location: Location,
}

impl Choice {
    pub fn new(text: impl Into<String>, location: Location) -> Self {
        Self {
            text: text.into(),
            location,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Preferences
// ─────────────────────────────────────────────────────────────────────────────

/// Named sub-grouping of a character's preference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Common,
    RareDay,
    RareNight,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Common, Tier::RareDay, Tier::RareNight];

    /// Section title on the detail card
    pub fn title(self) -> &'static str {
        match self {
            Tier::Common => "커먼",
            Tier::RareDay => "레어 (낮)",
            Tier::RareNight => "레어 (밤)",
        }
    }

    /// Key used in the dataset document
    pub fn key(self) -> &'static str {
        match self {
            Tier::Common => "common",
            Tier::RareDay => "rare_day",
            Tier::RareNight => "rare_night",
        }
    }
}

/// Liked and disliked choices of one tier, in dataset order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceGroup {
    pub liked: Vec<ChoiceId>,
    pub disliked: Vec<ChoiceId>,
}

/// Up to three tiers of preferences. An absent tier is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub common: Option<PreferenceGroup>,
    pub rare_day: Option<PreferenceGroup>,
    pub rare_night: Option<PreferenceGroup>,
}

impl Preferences {
    pub fn get(&self, tier: Tier) -> Option<&PreferenceGroup> {
        match tier {
            Tier::Common => self.common.as_ref(),
            Tier::RareDay => self.rare_day.as_ref(),
            Tier::RareNight => self.rare_night.as_ref(),
        }
    }

    pub fn set(&mut self, tier: Tier, group: Option<PreferenceGroup>) {
        match tier {
            Tier::Common => self.common = group,
            Tier::RareDay => self.rare_day = group,
            Tier::RareNight => self.rare_night = group,
        }
    }

    /// Present tiers in display order
    pub fn tiers(&self) -> impl Iterator<Item = (Tier, &PreferenceGroup)> {
        Tier::ALL
            .into_iter()
            .filter_map(move |tier| self.get(tier).map(|group| (tier, group)))
    }

    pub fn is_empty(&self) -> bool {
        self.tiers().next().is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Characters
// ─────────────────────────────────────────────────────────────────────────────

/// A character as listed under one category in the dataset (no category yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterEntry {
    pub name: String,
    pub preferences: Preferences,
    pub source_url: Option<String>,
}

impl CharacterEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: Preferences::default(),
            source_url: None,
        }
    }

    /// Attach the category the entry was listed under
    pub fn into_record(self, category: Category) -> CharacterRecord {
        CharacterRecord {
            name: self.name,
            category,
            preferences: self.preferences,
            source_url: self.source_url,
        }
    }
}

/// A character tagged with its category. Identity is `(name, category)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub name: String,
    pub category: Category,
    pub preferences: Preferences,
    pub source_url: Option<String>,
}

impl CharacterRecord {
    pub fn display_name(&self) -> DisplayName<'_> {
        DisplayName::parse(&self.name)
    }

    pub fn is_same(&self, other: &CharacterRecord) -> bool {
        self.name == other.name && self.category == other.category
    }
}

/// A name split into its main part and an optional parenthesized qualifier,
/// e.g. `"Foo(variant)"` → `("Foo", Some("variant"))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayName<'a> {
    pub main: &'a str,
    pub qualifier: Option<&'a str>,
}

impl<'a> DisplayName<'a> {
    pub fn parse(name: &'a str) -> Self {
        match QUALIFIED_NAME.captures(name) {
            Some(caps) => {
                let main = caps.get(1).map_or("", |m| m.as_str());
                let qualifier = caps.get(2).map(|m| m.as_str());
                Self { main, qualifier }
            }
            None => Self {
                main: name,
                qualifier: None,
            },
        }
    }

    /// Qualifier wrapped back in parentheses, as displayed
    pub fn qualifier_label(&self) -> Option<String> {
        self.qualifier.map(|q| format!("({q})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
            assert_eq!(Category::from_label(category.alias()), Some(category));
        }
        assert_eq!(Category::from_label("로봇형"), None);
    }

    #[test]
    fn test_category_order_is_display_order() {
        let mut shuffled = vec![Category::Undead, Category::Human, Category::AngelDemon];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Category::Human, Category::Undead, Category::AngelDemon]
        );
    }

    #[test]
    fn test_filter_accepts() {
        assert!(CategoryFilter::All.accepts(Category::Beast));
        assert!(CategoryFilter::Only(Category::Beast).accepts(Category::Beast));
        assert!(!CategoryFilter::Only(Category::Beast).accepts(Category::Fairy));
    }

    #[test]
    fn test_filter_cycles_through_chips() {
        let mut filter = CategoryFilter::All;
        for _ in 0..CategoryFilter::CHIPS.len() {
            filter = filter.next();
        }
        assert_eq!(filter, CategoryFilter::All);
        assert_eq!(
            CategoryFilter::All.prev(),
            CategoryFilter::Only(Category::AngelDemon)
        );
        assert_eq!(
            CategoryFilter::All.next(),
            CategoryFilter::Only(Category::Human)
        );
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("전체".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "요정형".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Fairy)
        );
        assert!(matches!(
            "nope".parse::<CategoryFilter>(),
            Err(Error::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_choice_id_normalizes_integers() {
        assert_eq!(ChoiceId::from(101), ChoiceId::from("101"));
    }

    #[test]
    fn test_location_sentinel() {
        assert_eq!(Location::from_label("어디서나"), Location::Anywhere);
        assert_eq!(Location::from_label("").qualifier(), None);
        assert_eq!(
            Location::from_label("낮의 해변가").qualifier(),
            Some("낮의 해변가")
        );
    }

    #[test]
    fn test_preferences_tiers_skip_absent() {
        let prefs = Preferences {
            common: None,
            rare_day: Some(PreferenceGroup::default()),
            rare_night: Some(PreferenceGroup::default()),
        };
        let tiers: Vec<Tier> = prefs.tiers().map(|(t, _)| t).collect();
        assert_eq!(tiers, vec![Tier::RareDay, Tier::RareNight]);
        assert!(!prefs.is_empty());
        assert!(Preferences::default().is_empty());
    }

    #[test]
    fn test_display_name_with_qualifier() {
        let name = DisplayName::parse("카렌(수영복)");
        assert_eq!(name.main, "카렌");
        assert_eq!(name.qualifier, Some("수영복"));
        assert_eq!(name.qualifier_label().as_deref(), Some("(수영복)"));
    }

    #[test]
    fn test_display_name_without_qualifier() {
        let name = DisplayName::parse("유리");
        assert_eq!(name.main, "유리");
        assert_eq!(name.qualifier, None);
    }

    #[test]
    fn test_display_name_requires_trailing_paren() {
        let name = DisplayName::parse("Foo(bar) baz");
        assert_eq!(name.main, "Foo(bar) baz");
        assert_eq!(name.qualifier, None);
    }

    #[test]
    fn test_record_identity_includes_category() {
        let a = CharacterEntry::new("유리").into_record(Category::Human);
        let b = CharacterEntry::new("유리").into_record(Category::Fairy);
        assert!(!a.is_same(&b));
        assert!(a.is_same(&a.clone()));
    }
}
