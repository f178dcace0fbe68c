use regex::Regex;

use crate::config::Config;
use crate::content::ContentKind;
use crate::error::ConfigError;

/// Compiles a blacklist pattern so it only matches at the start of a copy.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})", pattern))
}

/// Phrases and patterns a copy must not contain.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    phrases: Vec<String>,
    patterns: Vec<Regex>,
}

impl Blacklist {
    pub fn new(phrases: &[String], patterns: &[String]) -> Result<Self, regex::Error> {
        let phrases = phrases
            .iter()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        let patterns = patterns
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { phrases, patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty() && self.patterns.is_empty()
    }

    /// Case-insensitive phrase containment, or a pattern matching at the start.
    pub fn is_blocked(&self, copy: &str) -> bool {
        let lower = copy.to_lowercase();
        self.phrases.iter().any(|phrase| lower.contains(phrase))
            || self.patterns.iter().any(|re| re.is_match(copy))
    }

    pub fn filter(&self, copies: Vec<String>) -> Vec<String> {
        if self.is_empty() {
            return copies;
        }
        copies
            .into_iter()
            .filter(|copy| {
                let blocked = self.is_blocked(copy);
                if blocked {
                    log::debug!("Dropping blacklisted copy: {}", copy);
                }
                !blocked
            })
            .collect()
    }
}

/// Per-kind blacklists. Paths are never filtered.
#[derive(Debug, Clone, Default)]
pub struct Blacklists {
    headlines: Blacklist,
    descriptions: Blacklist,
}

impl Blacklists {
    pub fn new(headlines: Blacklist, descriptions: Blacklist) -> Self {
        Self {
            headlines,
            descriptions,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let headlines = Blacklist::new(
            &config.headlines_blacklist,
            &config.headlines_regexp_blacklist,
        )
        .map_err(|e| invalid("headlines_regexp_blacklist", e))?;
        let descriptions = Blacklist::new(
            &config.descriptions_blacklist,
            &config.descriptions_regexp_blacklist,
        )
        .map_err(|e| invalid("descriptions_regexp_blacklist", e))?;
        Ok(Self::new(headlines, descriptions))
    }

    pub fn for_kind(&self, kind: ContentKind) -> Option<&Blacklist> {
        match kind {
            ContentKind::Headline => Some(&self.headlines),
            ContentKind::Description => Some(&self.descriptions),
            ContentKind::Path => None,
        }
    }
}

fn invalid(list: &str, e: regex::Error) -> ConfigError {
    ConfigError::InvalidPattern {
        list: list.to_string(),
        pattern: String::new(),
        reason: e.to_string(),
    }
}
