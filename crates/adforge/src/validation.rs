use std::fmt;

use crate::content::{char_len, ContentKind, REVIEW_PREFIX};
use crate::entry::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    ItemCount {
        kind: ContentKind,
        count: usize,
        min: usize,
        max: usize,
    },
    ItemLength {
        kind: ContentKind,
        item: String,
        length: usize,
        min: usize,
        max: usize,
    },
    NeedsReview {
        kind: ContentKind,
        item: String,
    },
    Duplicate {
        kind: ContentKind,
        item: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::ItemCount {
                kind,
                count,
                min,
                max,
            } => write!(f, "{} {}s (expected {}-{})", count, kind, min, max),
            ValidationIssue::ItemLength {
                kind,
                item,
                length,
                min,
                max,
            } => write!(
                f,
                "{} '{}' has {} chars (expected {}-{})",
                kind, item, length, min, max
            ),
            ValidationIssue::NeedsReview { kind, item } => {
                write!(f, "{} '{}' needs manual review", kind, item)
            }
            ValidationIssue::Duplicate { kind, item } => {
                write!(f, "{} '{}' appears more than once", kind, item)
            }
        }
    }
}

/// Checks every generated field against its kind's limits.
/// Fields that were never generated are skipped. Repeated items are
/// reported once per extra occurrence.
pub fn validate_entry(entry: &Entry) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for kind in ContentKind::ALL {
        let Some(items) = entry.copies(kind) else {
            continue;
        };
        let limits = kind.limits();

        if items.len() < limits.min_items || items.len() > limits.max_items {
            issues.push(ValidationIssue::ItemCount {
                kind,
                count: items.len(),
                min: limits.min_items,
                max: limits.max_items,
            });
        }

        for (i, item) in items.iter().enumerate() {
            if items[..i].contains(item) {
                issues.push(ValidationIssue::Duplicate {
                    kind,
                    item: item.clone(),
                });
                continue;
            }
            if item.starts_with(REVIEW_PREFIX) {
                issues.push(ValidationIssue::NeedsReview {
                    kind,
                    item: item.clone(),
                });
                continue;
            }
            let length = char_len(item);
            if length < limits.min_chars || length > limits.max_chars {
                issues.push(ValidationIssue::ItemLength {
                    kind,
                    item: item.clone(),
                    length,
                    min: limits.min_chars,
                    max: limits.max_chars,
                });
            }
        }
    }

    issues
}
