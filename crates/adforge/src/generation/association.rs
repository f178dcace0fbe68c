use std::sync::Arc;

use log::{info, warn};
use serde_json::{Map, Value};

use crate::entry::Entry;
use crate::oracle::Oracle;
use crate::prompts::PromptSelector;

/// Reason stored when the model gave no usable answer.
pub const NO_ASSOCIATION_REASON: &str = "No association found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub relationship: bool,
    pub reason: String,
}

impl Association {
    pub fn not_found() -> Self {
        Self {
            relationship: false,
            reason: NO_ASSOCIATION_REASON.to_string(),
        }
    }
}

/// Asks the model whether a term pair is related, and why.
pub struct AssociationResolver {
    oracle: Arc<Oracle>,
    prompts: Arc<PromptSelector>,
}

impl AssociationResolver {
    pub fn new(oracle: Arc<Oracle>, prompts: Arc<PromptSelector>) -> Self {
        Self { oracle, prompts }
    }

    pub fn resolve(&self, entry: &Entry) -> Association {
        let prompt = self.prompts.association(entry);
        let response = self.oracle.complete_structured(&prompt);

        match parse_association(&response) {
            Some(association) => {
                info!(
                    "Association '{}' / '{}': {}",
                    entry.term,
                    entry.associative_term.as_deref().unwrap_or("-"),
                    association.relationship
                );
                association
            }
            None => {
                warn!(
                    "No usable association for '{}' / '{}'",
                    entry.term,
                    entry.associative_term.as_deref().unwrap_or("-")
                );
                Association::not_found()
            }
        }
    }
}

/// Reads `relationship` (a bool or the strings "true"/"false") and `reason`.
/// Anything else counts as a failed answer.
pub fn parse_association(response: &Map<String, Value>) -> Option<Association> {
    let relationship = match response.get("relationship")? {
        Value::Bool(b) => *b,
        Value::String(s) if s.trim().eq_ignore_ascii_case("true") => true,
        Value::String(s) if s.trim().eq_ignore_ascii_case("false") => false,
        _ => return None,
    };
    let reason = response.get("reason")?.as_str()?.trim();
    if reason.is_empty() {
        return None;
    }
    Some(Association {
        relationship,
        reason: reason.to_string(),
    })
}
