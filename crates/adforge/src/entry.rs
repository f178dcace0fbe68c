//! One primary term, optionally paired with an associative term, and the ad copy generated for it.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{contains_failure_marker, ContentKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associative_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associative_term_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub association_reason: Option<String>,
    #[serde(default)]
    pub relationship: bool,
    #[serde(default)]
    pub headlines: Option<Vec<String>>,
    #[serde(default)]
    pub descriptions: Option<Vec<String>>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub paths: Option<Vec<String>>,

    #[serde(default)]
    has_been_cleared: bool,
}

impl Entry {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            term: term.into(),
            term_description: None,
            associative_term: None,
            associative_term_description: None,
            sku: None,
            url: None,
            image_url: None,
            association_reason: None,
            relationship: false,
            headlines: None,
            descriptions: None,
            keywords: None,
            paths: None,
            has_been_cleared: false,
        }
    }

    pub fn with_term_description(mut self, description: Option<String>) -> Self {
        self.term_description = non_empty(description);
        self
    }

    pub fn with_associative_term(
        mut self,
        term: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        self.associative_term = Some(term.into());
        self.associative_term_description = non_empty(description);
        self
    }

    pub fn with_sku(mut self, sku: Option<String>) -> Self {
        self.sku = non_empty(sku);
        self
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = non_empty(url);
        self
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = non_empty(image_url);
        self
    }

    pub fn has_associative_term(&self) -> bool {
        self.associative_term.is_some()
    }

    /// Whether content should be generated for this entry.
    ///
    /// Entries without an associative term always get content. Paired entries
    /// get content unless a relationship search was requested, in which case
    /// the resolved `relationship` decides.
    pub fn must_generate_content(&self, must_find_relationship: bool) -> bool {
        if !self.has_associative_term() || !must_find_relationship {
            return true;
        }
        self.relationship
    }

    /// Any generated item carries an "error" or "failed" marker.
    pub fn has_generation_errors(&self) -> bool {
        [
            &self.headlines,
            &self.descriptions,
            &self.keywords,
            &self.paths,
        ]
        .into_iter()
        .flatten()
        .flatten()
        .any(|item| contains_failure_marker(item))
    }

    pub fn has_been_cleared(&self) -> bool {
        self.has_been_cleared
    }

    /// Drops everything generated so far and marks the entry as cleared.
    ///
    /// Returns `false` (and leaves the entry untouched) if it was already
    /// cleared once.
    pub fn clear_for_requeue(&mut self) -> bool {
        if self.has_been_cleared {
            return false;
        }
        self.association_reason = None;
        self.relationship = false;
        self.headlines = None;
        self.descriptions = None;
        self.keywords = None;
        self.paths = None;
        self.has_been_cleared = true;
        true
    }

    pub fn set_copies(&mut self, kind: ContentKind, copies: Vec<String>) {
        match kind {
            ContentKind::Headline => self.headlines = Some(copies),
            ContentKind::Description => self.descriptions = Some(copies),
            ContentKind::Path => self.paths = Some(copies),
        }
    }

    pub fn copies(&self, kind: ContentKind) -> Option<&[String]> {
        match kind {
            ContentKind::Headline => self.headlines.as_deref(),
            ContentKind::Description => self.descriptions.as_deref(),
            ContentKind::Path => self.paths.as_deref(),
        }
    }

    /// Every output field is populated with at least one item.
    ///
    /// Paths only count when `require_paths` is set.
    pub fn must_be_exported(&self, require_paths: bool) -> bool {
        let filled = |field: &Option<Vec<String>>| field.as_ref().is_some_and(|v| !v.is_empty());
        filled(&self.headlines)
            && filled(&self.descriptions)
            && filled(&self.keywords)
            && (!require_paths || filled(&self.paths))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entry {}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[term: {}, associative_term: {}, association_reason: {}, headlines: {:?}, descriptions: {:?}, keywords: {:?}, paths: {:?}]",
            self.term,
            self.associative_term.as_deref().unwrap_or("-"),
            self.association_reason.as_deref().unwrap_or("-"),
            self.headlines,
            self.descriptions,
            self.keywords,
            self.paths,
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
