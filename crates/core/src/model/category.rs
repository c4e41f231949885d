use super::entry::VocabEntry;

/// Label of the catch-all filter.
pub const ALL_CATEGORIES: &str = "All";

/// Which entries the card navigator walks through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector label; `"All"` selects every entry.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_owned())
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(name) => name,
        }
    }

    /// Uncategorized entries only match `All`.
    #[must_use]
    pub fn matches(&self, entry: &VocabEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => entry.category() == Some(name.as_str()),
        }
    }
}
