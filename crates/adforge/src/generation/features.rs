use std::sync::Arc;

use log::{info, warn};

use crate::oracle::Oracle;
use crate::prompts::PromptSelector;

/// Rewrites product descriptions into short feature lists.
pub struct FeatureExtractor {
    oracle: Arc<Oracle>,
    prompts: Arc<PromptSelector>,
}

impl FeatureExtractor {
    pub fn new(oracle: Arc<Oracle>, prompts: Arc<PromptSelector>) -> Self {
        Self { oracle, prompts }
    }

    /// One output per input. Blank descriptions pass through, and a description
    /// the model could not summarize is kept as it was.
    pub fn extract(&self, descriptions: Vec<String>) -> Vec<String> {
        info!("Extracting main features from {} descriptions", descriptions.len());

        descriptions
            .into_iter()
            .map(|description| {
                if description.trim().is_empty() {
                    return description;
                }
                match self
                    .oracle
                    .run_prompt(&self.prompts.feature_extraction(&description))
                {
                    Some(features) => features,
                    None => {
                        warn!("Keeping original description, feature extraction failed");
                        description
                    }
                }
            })
            .collect()
    }
}
