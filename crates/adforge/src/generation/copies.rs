use std::sync::Arc;

use log::{debug, info, warn};
use rand::seq::IndexedRandom;

use crate::config::GenericCopies;
use crate::content::{char_len, contains_failure_marker, ContentKind, GENERATION_ERROR, REVIEW_PREFIX};
use crate::entry::Entry;
use crate::oracle::Oracle;
use crate::prompts::PromptSelector;

use super::blacklist::Blacklists;

/// Copies with this many words or fewer are discarded (paths excepted).
const MIN_WORDS_EXCLUSIVE: usize = 2;

/// Produces exactly `count` copies of one kind for an entry.
pub struct CopyGenerator {
    oracle: Arc<Oracle>,
    prompts: Arc<PromptSelector>,
    blacklists: Blacklists,
    generic: GenericCopies,
    retries: u32,
    size_attempts: u32,
}

impl CopyGenerator {
    pub fn new(
        oracle: Arc<Oracle>,
        prompts: Arc<PromptSelector>,
        blacklists: Blacklists,
        generic: GenericCopies,
        retries: u32,
        size_attempts: u32,
    ) -> Self {
        Self {
            oracle,
            prompts,
            blacklists,
            generic,
            retries,
            size_attempts,
        }
    }

    /// Always returns exactly `count` items.
    ///
    /// The model is asked for the missing amount up to `1 + retries` times.
    /// Slots still empty afterwards are filled from the generic pool, then
    /// with [`GENERATION_ERROR`].
    pub fn generate(
        &self,
        entry: &Entry,
        kind: ContentKind,
        count: usize,
        must_find_relationship: bool,
    ) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }

        let mut accepted: Vec<String> = Vec::with_capacity(count);
        let mut retries_left = self.retries;

        loop {
            let missing = count - accepted.len();
            let prompt = self
                .prompts
                .generation(entry, kind, missing, must_find_relationship);
            let raw = self.oracle.complete_list(&prompt);

            let batch = self.refine(raw, kind, &accepted);
            accepted.extend(batch);

            if accepted.len() >= count {
                accepted.truncate(count);
                return accepted;
            }
            if retries_left == 0 {
                break;
            }
            retries_left -= 1;
            info!(
                "Got {}/{} {}s for '{}', asking again ({} retries left)",
                accepted.len(),
                count,
                kind,
                entry.term,
                retries_left
            );
        }

        self.fill_with_generic(accepted, kind, count)
    }

    /// Cleans one batch of candidates and drops the ones that are unusable,
    /// duplicated, blacklisted or too short.
    fn refine(&self, raw: Vec<String>, kind: ContentKind, accepted: &[String]) -> Vec<String> {
        let mut batch: Vec<String> = Vec::new();

        for candidate in raw {
            if contains_failure_marker(&candidate) {
                continue;
            }

            let mut copy = clean(&candidate, kind);
            if copy.is_empty() {
                continue;
            }
            if char_len(&copy) > kind.max_chars() {
                copy = clean(&self.enforce_size(&copy, kind), kind);
            }

            if !accepted.contains(&copy) && !batch.contains(&copy) {
                batch.push(copy);
            }
        }

        if let Some(blacklist) = self.blacklists.for_kind(kind) {
            batch = blacklist.filter(batch);
        }

        if kind != ContentKind::Path {
            batch.retain(|copy| copy.split_whitespace().count() > MIN_WORDS_EXCLUSIVE);
        }

        batch
    }

    /// Asks the model to shorten `copy` until it fits.
    ///
    /// Gives up after the configured number of attempts and returns the
    /// shortest attempt prefixed with [`REVIEW_PREFIX`].
    pub fn enforce_size(&self, copy: &str, kind: ContentKind) -> String {
        let max = kind.max_chars();
        let mut current = copy.to_string();
        let mut best = copy.to_string();

        for attempt in 1..=self.size_attempts {
            debug!(
                "Shortening {} ({} chars, max {}), attempt {}",
                kind,
                char_len(&current),
                max,
                attempt
            );
            let prompt = self.prompts.size_enforcement(kind, &prompt_copy(&current, kind));
            let shortened = match kind {
                ContentKind::Path => self.oracle.complete_list(&prompt).into_iter().next(),
                _ => self.oracle.run_prompt(&prompt),
            }
            .filter(|text| !contains_failure_marker(text));

            let Some(shortened) = shortened.map(|s| s.trim().trim_matches('"').trim().to_string())
            else {
                continue;
            };
            if shortened.is_empty() {
                continue;
            }

            if char_len(&shortened) <= max {
                return shortened;
            }
            if char_len(&shortened) < char_len(&best) {
                best = shortened.clone();
            }
            current = shortened;
        }

        warn!(
            "Could not shorten {} below {} chars, flagging for review: {}",
            kind, max, best
        );
        format!("{}{}", REVIEW_PREFIX, best)
    }

    fn fill_with_generic(&self, mut copies: Vec<String>, kind: ContentKind, count: usize) -> Vec<String> {
        let pool = self.generic.for_kind(kind);
        let mut rng = rand::rng();

        if copies.len() < count {
            warn!(
                "Filling {} missing {}s from the generic pool ({} available)",
                count - copies.len(),
                kind,
                pool.len()
            );
        }

        while copies.len() < count {
            match pool.choose(&mut rng) {
                Some(generic) => copies.push(generic.clone()),
                None => copies.push(GENERATION_ERROR.to_string()),
            }
        }
        copies
    }
}

fn clean(candidate: &str, kind: ContentKind) -> String {
    let trimmed = candidate.trim();
    let trimmed = if kind == ContentKind::Headline {
        trimmed.strip_suffix('.').unwrap_or(trimmed)
    } else {
        trimmed
    };
    trimmed.to_string()
}

/// Paths are sent as a one-element list so the path prompt gets the shape it describes.
fn prompt_copy(copy: &str, kind: ContentKind) -> String {
    match kind {
        ContentKind::Path => format!("[\"{}\"]", copy.replace('"', "'")),
        _ => copy.to_string(),
    }
}
