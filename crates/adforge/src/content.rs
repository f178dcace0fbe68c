use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker returned for a slot that could not be filled by the model or the generic pool.
pub const GENERATION_ERROR: &str = "Generation error";

/// Prefix applied to copies that could not be shortened below their limit.
pub const REVIEW_PREFIX: &str = "Review: ";

/// Category of generated ad copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Headline,
    Description,
    Path,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Headline,
        ContentKind::Description,
        ContentKind::Path,
    ];

    /// Maximum length of a single copy, counted in characters.
    pub fn max_chars(self) -> usize {
        self.limits().max_chars
    }

    pub fn limits(self) -> ValidationLimits {
        match self {
            ContentKind::Headline => ValidationLimits {
                min_items: 3,
                max_items: 15,
                min_chars: 5,
                max_chars: 30,
            },
            ContentKind::Description => ValidationLimits {
                min_items: 3,
                max_items: 4,
                min_chars: 5,
                max_chars: 90,
            },
            ContentKind::Path => ValidationLimits {
                min_items: 0,
                max_items: 2,
                min_chars: 1,
                max_chars: 15,
            },
        }
    }

    /// Field name used in logs and exported entries.
    pub fn field_name(self) -> &'static str {
        match self {
            ContentKind::Headline => "headlines",
            ContentKind::Description => "descriptions",
            ContentKind::Path => "paths",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentKind::Headline => "headline",
            ContentKind::Description => "description",
            ContentKind::Path => "path",
        };
        write!(f, "{}", s)
    }
}

/// Item count and per-item character bounds for one content kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub min_items: usize,
    pub max_items: usize,
    pub min_chars: usize,
    pub max_chars: usize,
}

/// Length of a copy as the ad platforms count it.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// True when a copy carries an "error" or "failed" marker (case-insensitive).
pub fn contains_failure_marker(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("error") || lower.contains("failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_chars_per_kind() {
        assert_eq!(ContentKind::Headline.max_chars(), 30);
        assert_eq!(ContentKind::Description.max_chars(), 90);
        assert_eq!(ContentKind::Path.max_chars(), 15);
    }

    #[test]
    fn test_failure_marker_is_case_insensitive() {
        assert!(contains_failure_marker("Generation ERROR"));
        assert!(contains_failure_marker("generation Failed"));
        assert!(contains_failure_marker(GENERATION_ERROR));
        assert!(!contains_failure_marker("Fresh coffee every day"));
    }

    #[test]
    fn test_char_len_counts_characters_not_bytes() {
        assert_eq!(char_len("Añadir"), 6);
        assert_eq!(char_len("Promoção"), 8);
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&ContentKind::Description).unwrap();
        assert_eq!(json, "\"description\"");
        assert_eq!(ContentKind::Path.field_name(), "paths");
    }
}
