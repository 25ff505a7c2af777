//! Category filter over rendered cards

use std::fmt;
use std::time::Duration;

use crate::card::Card;

/// Select value that shows every category
pub const ALL_CATEGORIES: &str = "all";

/// Delay between consecutive visible cards when a filter re-reveals them
pub const REENTRANCE_STAGGER: Duration = Duration::from_millis(40);

/// Which cards a filter lets through
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category match
    Only(String),
}

impl CategoryFilter {
    /// Interpret a category-select value
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    /// Value to put back into a category-select control
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// Update visibility of every card and restagger the visible ones.
    ///
    /// Returns the number of visible cards.
    pub fn apply(&self, cards: &mut [Card]) -> usize {
        let mut visible = 0;
        for card in cards.iter_mut() {
            let show = self.matches(card.category());
            card.set_visible(show);
            if show {
                card.set_entrance_delay(REENTRANCE_STAGGER * visible as u32);
                visible += 1;
            }
        }
        visible
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
