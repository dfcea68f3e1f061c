//! Tag categories
//!
//! Tags are grouped under a handful of fixed labels. Catalogs and selections
//! stay keyed by the raw label so an unfamiliar label in a resource file is
//! carried through instead of rejected; `Category` is the typed view.

use std::collections::BTreeMap;
use std::fmt;

/// Category label → tags, in the order they were listed
pub type TagsByCategory = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Who is covered
    Who,
    /// What can go wrong
    Risk,
    /// What the customer cares about most
    Priority,
    /// Life events prompting the purchase
    Change,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Who,
        Category::Risk,
        Category::Priority,
        Category::Change,
    ];

    /// Label used as the map key in catalogs and selections
    pub fn label(self) -> &'static str {
        match self {
            Category::Who => "누구",
            Category::Risk => "위험",
            Category::Priority => "우선순위",
            Category::Change => "변화",
        }
    }

    /// Accepts the Korean label or the English name
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| {
            c.label() == label || c.english().eq_ignore_ascii_case(label)
        })
    }

    pub fn english(self) -> &'static str {
        match self {
            Category::Who => "who",
            Category::Risk => "risk",
            Category::Priority => "priority",
            Category::Change => "change",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flatten a category map into one tag list, ignoring category boundaries
pub fn flatten(tags: &TagsByCategory) -> Vec<&str> {
    tags.values()
        .flat_map(|list| list.iter().map(String::as_str))
        .collect()
}
