//! Name search: case-insensitive substring match with an initial-consonant
//! fallback, so typing `ㅇㄹ` finds `유리`.

use std::ops::Range;

use crate::hangul;

/// A search term normalized once and reused across many names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matcher {
    term: String,
}

impl Matcher {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
        }
    }

    /// Normalized (trimmed, lower-cased) term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// An empty term matches every name
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        if self.term.is_empty() {
            return true;
        }

        let name = name.to_lowercase();
        if name.contains(&self.term) {
            return true;
        }

        hangul::initials(&name).contains(&self.term)
    }

    /// Character range of `name` covered by the first match, for highlighting.
    ///
    /// Direct matches win over initial-consonant matches. The range is in
    /// `char` positions of the original `name`. Returns `None` for an empty
    /// term or no match.
    pub fn find(&self, name: &str) -> Option<Range<usize>> {
        if self.term.is_empty() {
            return None;
        }

        // Same lowering as `matches` (context-aware final sigma). Each source
        // char expands to as many chars as `char::to_lowercase` yields, which
        // maps every lowered char back onto the original name.
        let lowered: Vec<char> = name.to_lowercase().chars().collect();
        let origin: Vec<usize> = name
            .chars()
            .enumerate()
            .flat_map(|(index, c)| std::iter::repeat(index).take(c.to_lowercase().count()))
            .collect();
        let needle: Vec<char> = self.term.chars().collect();

        let hit = find_chars(&lowered, &needle).or_else(|| {
            let initials: Vec<char> = lowered.iter().copied().map(hangul::initial_of).collect();
            find_chars(&initials, &needle)
        })?;

        let start = origin[hit.start];
        let end = origin[hit.end - 1] + 1;
        Some(start..end)
    }
}

/// Decide whether `name` matches the search `term`
pub fn matches(name: &str, term: &str) -> bool {
    Matcher::new(term).matches(name)
}

fn find_chars(haystack: &[char], needle: &[char]) -> Option<Range<usize>> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|start| start..start + needle.len())
}
