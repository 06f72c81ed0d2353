//! Category tokens and the filter bar.
//!
//! The gallery is filtered by exactly one category at a time. Categories are
//! drawn from a closed set held by [`FilterBar`], which always starts with the
//! distinguished `all` token.

use std::fmt;

/// Token of the distinguished "match everything" category.
pub const ALL_TOKEN: &str = "all";

/// A category filter token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Matches every item.
    All,
    /// Matches items whose year, rendered as text, equals the token exactly.
    Year(String),
}

impl Category {
    /// Parses a token. `"all"` maps to [`Category::All`], anything else is
    /// taken verbatim as a year token.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == ALL_TOKEN {
            Self::All
        } else {
            Self::Year(token.to_string())
        }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::All => ALL_TOKEN,
            Self::Year(year) => year,
        }
    }

    /// Label shown on the filter tab.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Year(year) => year,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Closed set of category tokens with exactly one active entry.
///
/// Activating an entry deactivates every sibling, like a row of radio
/// buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    categories: Vec<Category>,
    active: usize,
}

impl FilterBar {
    /// Builds a filter bar from tokens. `all` is always present at position 0;
    /// duplicates and a repeated `all` are dropped.
    #[must_use]
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories = vec![Category::All];
        for token in tokens {
            let category = Category::from_token(token.as_ref().trim());
            if category.token().is_empty() || categories.contains(&category) {
                continue;
            }
            categories.push(category);
        }
        Self {
            categories,
            active: 0,
        }
    }

    /// Builds the default bar: `all` followed by the given years, newest first.
    #[must_use]
    pub fn from_years(years: &[i32]) -> Self {
        let mut years = years.to_vec();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        Self::new(years.iter().map(ToString::to_string))
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn active(&self) -> &Category {
        &self.categories[self.active]
    }

    #[must_use]
    pub const fn active_position(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Activates the entry at `position`. Returns `false` (and changes
    /// nothing) when the position is out of range.
    pub fn activate(&mut self, position: usize) -> bool {
        if position >= self.categories.len() {
            return false;
        }
        self.active = position;
        true
    }

    /// Activates the entry with the given token. Returns `false` for unknown
    /// tokens.
    pub fn activate_token(&mut self, token: &str) -> bool {
        self.position_of(token)
            .is_some_and(|position| self.activate(position))
    }

    pub fn activate_next(&mut self) {
        self.active = (self.active + 1) % self.categories.len();
    }

    pub fn activate_prev(&mut self) {
        let len = self.categories.len();
        self.active = (self.active + len - 1) % len;
    }

    #[must_use]
    pub fn position_of(&self, token: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.token() == token)
    }
}

impl Default for FilterBar {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_always_first_and_active_by_default() {
        let bar = FilterBar::new(["2024", "all", "2023", "2024"]);
        let tokens: Vec<&str> = bar.categories().iter().map(Category::token).collect();
        assert_eq!(tokens, vec!["all", "2024", "2023"]);
        assert_eq!(bar.active(), &Category::All);
    }

    #[test]
    fn from_years_sorts_newest_first() {
        let bar = FilterBar::from_years(&[2022, 2024, 2023, 2024]);
        let tokens: Vec<&str> = bar.categories().iter().map(Category::token).collect();
        assert_eq!(tokens, vec!["all", "2024", "2023", "2022"]);
    }

    #[test]
    fn exactly_one_entry_is_active() {
        let mut bar = FilterBar::from_years(&[2024, 2023]);
        assert!(bar.activate_token("2023"));
        assert_eq!(bar.active().token(), "2023");
        assert!(bar.activate(1));
        assert_eq!(bar.active().token(), "2024");
        assert!(!bar.activate(9));
        assert!(!bar.activate_token("1999"));
        assert_eq!(bar.active().token(), "2024");
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut bar = FilterBar::from_years(&[2024, 2023]);
        bar.activate_prev();
        assert_eq!(bar.active().token(), "2023");
        bar.activate_next();
        assert_eq!(bar.active(), &Category::All);
    }
}
