//! Prompt templates per locale and the selector that fills them for an entry.

mod en;
mod es;
mod pt;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::ContentKind;
use crate::entry::Entry;

/// Languages with a prompt table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "EN", alias = "en")]
    En,
    #[serde(rename = "ES", alias = "es")]
    Es,
    #[serde(rename = "PT", alias = "pt")]
    Pt,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Es => "ES",
            Locale::Pt => "PT",
        }
    }

    pub fn table(self) -> &'static PromptTable {
        match self {
            Locale::En => &en::TABLE,
            Locale::Es => &es::TABLE,
            Locale::Pt => &pt::TABLE,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EN" => Ok(Locale::En),
            "ES" => Ok(Locale::Es),
            "PT" => Ok(Locale::Pt),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}

/// Every template a locale must provide.
///
/// Placeholders are written as `{name}` and filled by [`render`].
pub struct PromptTable {
    pub association_both_descriptions: &'static str,
    pub association_term_description: &'static str,
    pub association_associative_description: &'static str,
    pub association_without_descriptions: &'static str,
    pub association_instructions: &'static str,

    pub generation_without_relationship: &'static str,
    pub generation_related_without_descriptions: &'static str,
    pub generation_related_term_description: &'static str,
    pub generation_related_associative_description: &'static str,
    pub generation_related_both_descriptions: &'static str,
    pub generation_single_with_description: &'static str,
    pub generation_single_without_description: &'static str,

    pub paths_with_description: &'static str,
    pub paths_without_description: &'static str,

    pub size_enforcement: &'static str,
    pub path_size_enforcement: &'static str,
    pub feature_extraction: &'static str,
    pub keywords: &'static str,
}

/// Which of the two optional descriptions an entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionPresence {
    Both,
    TermOnly,
    AssociativeOnly,
    Neither,
}

impl DescriptionPresence {
    pub fn of(entry: &Entry) -> Self {
        let term = has_text(entry.term_description.as_deref());
        let associative = has_text(entry.associative_term_description.as_deref());
        match (term, associative) {
            (true, true) => DescriptionPresence::Both,
            (true, false) => DescriptionPresence::TermOnly,
            (false, true) => DescriptionPresence::AssociativeOnly,
            (false, false) => DescriptionPresence::Neither,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Association(DescriptionPresence),
    AssociationInstructions,
    /// Paired terms when no relationship search was requested.
    GenerationWithoutRelationship,
    GenerationWithRelationship(DescriptionPresence),
    GenerationSingleTerm { with_description: bool },
    Paths { with_description: bool },
    SizeEnforcement,
    PathSizeEnforcement,
    FeatureExtraction,
    Keywords,
}

/// Values available for substitution. Unset fields leave their placeholder untouched.
#[derive(Debug, Default, Clone)]
pub struct PromptFields<'a> {
    pub term: Option<&'a str>,
    pub term_description: Option<&'a str>,
    pub associative_term: Option<&'a str>,
    pub associative_term_description: Option<&'a str>,
    pub association_reason: Option<&'a str>,
    pub company: Option<&'a str>,
    pub location: Option<&'a str>,
    pub description: Option<&'a str>,
    pub copy: Option<&'a str>,
    pub n: Option<usize>,
    pub length: Option<usize>,
    pub max_length: Option<usize>,
}

impl<'a> PromptFields<'a> {
    fn from_entry(entry: &'a Entry) -> Self {
        Self {
            term: Some(&entry.term),
            term_description: entry.term_description.as_deref(),
            associative_term: entry.associative_term.as_deref(),
            associative_term_description: entry.associative_term_description.as_deref(),
            association_reason: entry.association_reason.as_deref(),
            ..Default::default()
        }
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let text = [
            ("term", self.term),
            ("term_description", self.term_description),
            ("associative_term", self.associative_term),
            ("associative_term_description", self.associative_term_description),
            ("association_reason", self.association_reason),
            ("company", self.company),
            ("location", self.location),
            ("description", self.description),
            ("copy", self.copy),
        ];
        for (name, value) in text {
            if let Some(value) = value {
                pairs.push((name, value.to_string()));
            }
        }
        let numbers = [
            ("n", self.n),
            ("length", self.length),
            ("max_length", self.max_length),
        ];
        for (name, value) in numbers {
            if let Some(value) = value {
                pairs.push((name, value.to_string()));
            }
        }
        pairs
    }
}

/// Fills `{name}` placeholders in a template in a single pass.
///
/// Substituted values are never scanned again, so braces inside a term or
/// a copy reach the model verbatim. Unknown placeholders and literal
/// braces are left as they are.
pub fn render(template: &str, fields: &PromptFields<'_>) -> String {
    let pairs = fields.pairs();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Picks and fills templates for one locale, advertiser and country.
pub struct PromptSelector {
    locale: Locale,
    company: String,
    location: String,
}

impl PromptSelector {
    pub fn new(locale: Locale, company: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            locale,
            company: company.into(),
            location: location.into(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn template(&self, scenario: Scenario) -> &'static str {
        let table = self.locale.table();
        match scenario {
            Scenario::Association(presence) => match presence {
                DescriptionPresence::Both => table.association_both_descriptions,
                DescriptionPresence::TermOnly => table.association_term_description,
                DescriptionPresence::AssociativeOnly => table.association_associative_description,
                DescriptionPresence::Neither => table.association_without_descriptions,
            },
            Scenario::AssociationInstructions => table.association_instructions,
            Scenario::GenerationWithoutRelationship => table.generation_without_relationship,
            Scenario::GenerationWithRelationship(presence) => match presence {
                DescriptionPresence::Both => table.generation_related_both_descriptions,
                DescriptionPresence::TermOnly => table.generation_related_term_description,
                DescriptionPresence::AssociativeOnly => {
                    table.generation_related_associative_description
                }
                DescriptionPresence::Neither => table.generation_related_without_descriptions,
            },
            Scenario::GenerationSingleTerm { with_description } => {
                if with_description {
                    table.generation_single_with_description
                } else {
                    table.generation_single_without_description
                }
            }
            Scenario::Paths { with_description } => {
                if with_description {
                    table.paths_with_description
                } else {
                    table.paths_without_description
                }
            }
            Scenario::SizeEnforcement => table.size_enforcement,
            Scenario::PathSizeEnforcement => table.path_size_enforcement,
            Scenario::FeatureExtraction => table.feature_extraction,
            Scenario::Keywords => table.keywords,
        }
    }

    pub fn select(&self, scenario: Scenario, fields: &PromptFields<'_>) -> String {
        render(self.template(scenario), fields)
    }

    /// Description clause chosen by which descriptions exist, followed by the JSON instructions.
    pub fn association(&self, entry: &Entry) -> String {
        let fields = PromptFields::from_entry(entry);
        let mut prompt = self.select(
            Scenario::Association(DescriptionPresence::of(entry)),
            &fields,
        );
        prompt.push_str(&self.select(Scenario::AssociationInstructions, &fields));
        prompt
    }

    pub fn generation(
        &self,
        entry: &Entry,
        kind: ContentKind,
        n: usize,
        must_find_relationship: bool,
    ) -> String {
        let mut fields = PromptFields::from_entry(entry);
        fields.n = Some(n);
        fields.length = Some(kind.max_chars());
        fields.company = Some(&self.company);
        fields.location = Some(&self.location);

        let with_term_description = has_text(entry.term_description.as_deref());
        let scenario = if kind == ContentKind::Path {
            Scenario::Paths {
                with_description: with_term_description,
            }
        } else if !entry.has_associative_term() {
            Scenario::GenerationSingleTerm {
                with_description: with_term_description,
            }
        } else if !must_find_relationship {
            Scenario::GenerationWithoutRelationship
        } else {
            Scenario::GenerationWithRelationship(DescriptionPresence::of(entry))
        };
        self.select(scenario, &fields)
    }

    pub fn size_enforcement(&self, kind: ContentKind, copy: &str) -> String {
        let fields = PromptFields {
            copy: Some(copy),
            max_length: Some(kind.max_chars()),
            ..Default::default()
        };
        let scenario = match kind {
            ContentKind::Path => Scenario::PathSizeEnforcement,
            _ => Scenario::SizeEnforcement,
        };
        self.select(scenario, &fields)
    }

    pub fn feature_extraction(&self, description: &str) -> String {
        let fields = PromptFields {
            description: Some(description),
            ..Default::default()
        };
        self.select(Scenario::FeatureExtraction, &fields)
    }

    pub fn keywords(&self, term: &str) -> String {
        let fields = PromptFields {
            term: Some(term),
            ..Default::default()
        };
        self.select(Scenario::Keywords, &fields)
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> PromptSelector {
        PromptSelector::new(Locale::En, "Acme", "Mexico")
    }

    // ── Locale parsing ──

    #[test]
    fn test_locale_from_str_is_case_insensitive() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" Es ".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("PT".parse::<Locale>().unwrap(), Locale::Pt);
        assert!("FR".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_deserializes_upper_and_lower() {
        let upper: Locale = serde_json::from_str("\"ES\"").unwrap();
        let lower: Locale = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(upper, Locale::Es);
        assert_eq!(lower, Locale::Es);
    }

    // ── Rendering ──

    #[test]
    fn test_render_replaces_known_placeholders_only() {
        let fields = PromptFields {
            term: Some("Sneakers"),
            n: Some(3),
            ..Default::default()
        };
        let out = render("{n} ads for {term} by {company}", &fields);
        assert_eq!(out, "3 ads for Sneakers by {company}");
    }

    #[test]
    fn test_render_does_not_expand_placeholders_inside_values() {
        let fields = PromptFields {
            term: Some("Deal {company}"),
            company: Some("Acme"),
            copy: Some("{n} {length}"),
            n: Some(4),
            ..Default::default()
        };
        let out = render("Ads for {term} by {company}: {copy}", &fields);
        assert_eq!(out, "Ads for Deal {company} by Acme: {n} {length}");
    }

    #[test]
    fn test_render_keeps_literal_braces() {
        let fields = PromptFields {
            term: Some("Sneakers"),
            ..Default::default()
        };
        let out = render(r#"Answer {"relationship": true} about {term}{"#, &fields);
        assert_eq!(out, r#"Answer {"relationship": true} about Sneakers{"#);
    }

    #[test]
    fn test_description_presence_four_ways() {
        let base = Entry::new("Sneakers");
        assert_eq!(DescriptionPresence::of(&base), DescriptionPresence::Neither);

        let term_only = base.clone().with_term_description(Some("Running shoes".into()));
        assert_eq!(DescriptionPresence::of(&term_only), DescriptionPresence::TermOnly);

        let assoc_only = Entry::new("Sneakers").with_associative_term("Marathon", Some("Race".into()));
        assert_eq!(
            DescriptionPresence::of(&assoc_only),
            DescriptionPresence::AssociativeOnly
        );

        let both = term_only.with_associative_term("Marathon", Some("Race".into()));
        assert_eq!(DescriptionPresence::of(&both), DescriptionPresence::Both);
    }

    // ── Scenario selection ──

    #[test]
    fn test_association_prompt_includes_both_descriptions_and_instructions() {
        let entry = Entry::new("Sneakers")
            .with_term_description(Some("Running shoes".into()))
            .with_associative_term("Marathon", Some("A long race".into()));
        let prompt = selector().association(&entry);
        assert!(prompt.contains("'Sneakers'"));
        assert!(prompt.contains("Running shoes"));
        assert!(prompt.contains("A long race"));
        assert!(prompt.contains("\"relationship\": true/false"));
        assert!(!prompt.contains("{term}"));
    }

    #[test]
    fn test_generation_single_term_mentions_company() {
        let entry = Entry::new("Sneakers");
        let prompt = selector().generation(&entry, ContentKind::Headline, 5, false);
        assert!(prompt.contains("Generate 5 text ads of less than 30 characters"));
        assert!(prompt.contains("Acme"));
    }

    #[test]
    fn test_generation_pair_without_relationship_ignores_reason() {
        let mut entry = Entry::new("Sneakers").with_associative_term("Marathon", None);
        entry.association_reason = Some("runners need shoes".into());
        let prompt = selector().generation(&entry, ContentKind::Description, 2, false);
        assert!(prompt.contains("less than 90 characters"));
        assert!(!prompt.contains("runners need shoes"));
    }

    #[test]
    fn test_generation_pair_with_relationship_uses_reason() {
        let mut entry = Entry::new("Sneakers").with_associative_term("Marathon", None);
        entry.association_reason = Some("runners need shoes".into());
        let prompt = selector().generation(&entry, ContentKind::Headline, 2, true);
        assert!(prompt.contains("runners need shoes"));
    }

    #[test]
    fn test_paths_prompt_ignores_associative_term() {
        let entry = Entry::new("Sneakers")
            .with_term_description(Some("Nike Air".into()))
            .with_associative_term("Marathon", None);
        let prompt = selector().generation(&entry, ContentKind::Path, 2, true);
        assert!(prompt.contains("split into 2 parts"));
        assert!(prompt.contains("Nike Air"));
        assert!(!prompt.contains("Marathon"));
    }

    #[test]
    fn test_size_enforcement_prompts_per_kind() {
        let s = selector();
        let headline = s.size_enforcement(ContentKind::Headline, "A very long headline");
        assert!(headline.contains("shorter than 30 characters"));
        assert!(headline.contains("A very long headline"));

        let path = s.size_enforcement(ContentKind::Path, "[\"running-shoes-for-men\"]");
        assert!(path.contains("greater than 15 characters"));
    }

    #[test]
    fn test_every_locale_fills_placeholders() {
        let entry = Entry::new("Zapatillas")
            .with_term_description(Some("Calzado".into()))
            .with_associative_term("Maratón", Some("Carrera".into()));
        for locale in [Locale::En, Locale::Es, Locale::Pt] {
            let s = PromptSelector::new(locale, "Acme", "Mexico");
            let prompts = [
                s.association(&entry),
                s.generation(&entry, ContentKind::Headline, 4, true),
                s.generation(&entry, ContentKind::Headline, 4, false),
                s.generation(&Entry::new("Zapatillas"), ContentKind::Description, 4, false),
                s.generation(&entry, ContentKind::Path, 2, false),
                s.size_enforcement(ContentKind::Description, "texto"),
                s.size_enforcement(ContentKind::Path, "[\"a\"]"),
                s.feature_extraction("descripcion"),
                s.keywords("Zapatillas"),
            ];
            for prompt in prompts {
                for placeholder in ["{term}", "{n}", "{length}", "{max_length}", "{copy}"] {
                    assert!(
                        !prompt.contains(placeholder),
                        "{} prompt left {} unfilled: {}",
                        locale,
                        placeholder,
                        prompt
                    );
                }
            }
        }
    }
}
