use std::sync::Arc;

use log::info;

use crate::oracle::Oracle;
use crate::prompts::PromptSelector;

/// Most keywords kept per entry.
pub const MAX_KEYWORDS: usize = 10;

/// External keyword planner. Failures should come back as an empty list.
pub trait KeywordSupplier: Send + Sync {
    fn suggest(&self, term: &str) -> Vec<String>;
}

/// Supplier used when no keyword planner is configured.
pub struct NoKeywordSupplier;

impl KeywordSupplier for NoKeywordSupplier {
    fn suggest(&self, _term: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Supplier suggestions first, model-generated keywords when there are none.
pub struct KeywordGenerator {
    supplier: Arc<dyn KeywordSupplier>,
    oracle: Arc<Oracle>,
    prompts: Arc<PromptSelector>,
}

impl KeywordGenerator {
    pub fn new(
        supplier: Arc<dyn KeywordSupplier>,
        oracle: Arc<Oracle>,
        prompts: Arc<PromptSelector>,
    ) -> Self {
        Self {
            supplier,
            oracle,
            prompts,
        }
    }

    pub fn keywords_for(&self, term: &str) -> Vec<String> {
        let mut keywords = self.supplier.suggest(term);

        if keywords.is_empty() {
            info!("No keyword suggestions for '{}', asking the model", term);
            keywords = self.oracle.complete_list(&self.prompts.keywords(term));
        }

        let mut unique: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);
        for keyword in keywords {
            let keyword = keyword.trim().to_string();
            if keyword.is_empty() || unique.contains(&keyword) {
                continue;
            }
            unique.push(keyword);
        }
        unique.truncate(MAX_KEYWORDS);
        unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{ModelError, RetryPolicy, TextModel};
    use crate::prompts::Locale;

    struct Fixed(&'static str);

    impl TextModel for Fixed {
        fn complete(&self, _prompt: &str) -> Result<String, ModelError> {
            Ok(self.0.to_string())
        }
    }

    struct Planner(Vec<String>);

    impl KeywordSupplier for Planner {
        fn suggest(&self, _term: &str) -> Vec<String> {
            self.0.clone()
        }
    }

    fn generator(supplier: Arc<dyn KeywordSupplier>, reply: &'static str) -> KeywordGenerator {
        let oracle = Arc::new(Oracle::new(Arc::new(Fixed(reply)), RetryPolicy::immediate(1)));
        let prompts = Arc::new(PromptSelector::new(Locale::En, "Acme", "Mexico"));
        KeywordGenerator::new(supplier, oracle, prompts)
    }

    #[test]
    fn test_supplier_suggestions_are_capped() {
        let many: Vec<String> = (0..15).map(|i| format!("kw {}", i)).collect();
        let gen = generator(Arc::new(Planner(many)), "['unused']");
        let keywords = gen.keywords_for("Sneakers");
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "kw 0");
    }

    #[test]
    fn test_model_fallback_when_supplier_empty() {
        let gen = generator(Arc::new(NoKeywordSupplier), "['running shoes', 'sneakers', 'running shoes']");
        assert_eq!(gen.keywords_for("Sneakers"), vec!["running shoes", "sneakers"]);
    }

    #[test]
    fn test_failed_fallback_keeps_marker() {
        let gen = generator(Arc::new(NoKeywordSupplier), "no list");
        assert_eq!(gen.keywords_for("Sneakers"), vec!["Generation failed"]);
    }
}
