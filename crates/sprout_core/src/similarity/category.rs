//! Fixed activity categories for domain-aware duplicate detection
//!
//! Categories are a declarative rule table: a name, a keyword set matched by
//! substring containment over normalized text, and the reason shown when a
//! candidate collides with an existing habit in the same category. Matching
//! is a pure function over this data.

/// One activity category in the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable name, also used for equality between two classifications
    pub name: &'static str,
    /// Keywords matched by substring containment on normalized text
    pub keywords: &'static [&'static str],
    /// Reason reported when candidate and existing habit share this category
    pub reason: &'static str,
}

/// Categories in match priority order. First category with a keyword hit wins.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "exercise",
        keywords: &[
            "exercise", "workout", "gym", "run", "jog", "walk", "cardio", "fitness", "train",
            "sport", "stretch", "swim", "cycle", "lift",
        ],
        reason: "both are exercise activities",
    },
    Category {
        name: "reading",
        keywords: &[
            "read", "book", "study", "learn", "chapter", "pages", "course", "lesson",
        ],
        reason: "both are reading or study activities",
    },
    Category {
        name: "mindfulness",
        keywords: &[
            "meditat", "mindful", "breath", "journal", "gratitude", "relax", "calm",
        ],
        reason: "both are mindfulness activities",
    },
];

/// Classify normalized text, returning the first matching category.
pub fn categorize(normalized: &str) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|category| category.keywords.iter().any(|kw| normalized.contains(kw)))
}
