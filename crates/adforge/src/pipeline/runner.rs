use std::sync::Arc;
use std::thread;

use tracing::{debug, info, info_span, warn};

use crate::content::ContentKind;
use crate::entry::Entry;
use crate::generation::{
    AssociationResolver, CopyGenerator, FeatureExtractor, KeywordGenerator, KeywordSupplier,
    NoKeywordSupplier,
};
use crate::oracle::{Oracle, TextModel};
use crate::prompts::PromptSelector;
use crate::sources::{TermColumns, TermSource};
use crate::url_check::{HttpUrlProbe, UrlChecker, UrlProbe};
use crate::validation::validate_entry;

use super::config::PipelineConfig;
use super::context::{PipelineContext, RunOutput, RunRequest};
use super::error::{PipelineError, PipelineWarning};
use super::progress::{ProgressEvent, ProgressReporter, RunStage};

pub struct Pipeline {
    config: Arc<PipelineConfig>,
    oracle: Arc<Oracle>,
    prompts: Arc<PromptSelector>,
    associations: AssociationResolver,
    copies: CopyGenerator,
    keywords: KeywordGenerator,
    features: FeatureExtractor,
    url_probe: Option<Arc<dyn UrlProbe>>,
}

impl Pipeline {
    /// Production constructor. Builds all sub-components from config and
    /// probes URLs over HTTP when URL validation is enabled.
    pub fn from_config(
        config: Arc<PipelineConfig>,
        model: Arc<dyn TextModel>,
    ) -> Result<Self, PipelineError> {
        let mut pipeline = Self::with_model(config, model);
        if pipeline.config.url_validation.is_some() {
            let probe =
                HttpUrlProbe::new().map_err(|e| PipelineError::UrlChecker(e.to_string()))?;
            pipeline.url_probe = Some(Arc::new(probe));
        }
        Ok(pipeline)
    }

    /// Builds every component around `model` without touching the network.
    pub fn with_model(config: Arc<PipelineConfig>, model: Arc<dyn TextModel>) -> Self {
        let oracle = Arc::new(Oracle::new(model, config.retry));
        let prompts = Arc::new(PromptSelector::new(
            config.locale,
            config.advertiser.clone(),
            config.country.clone(),
        ));

        let associations = AssociationResolver::new(oracle.clone(), prompts.clone());
        let copies = CopyGenerator::new(
            oracle.clone(),
            prompts.clone(),
            config.blacklists.clone(),
            config.generic_copies.clone(),
            config.copy_retries,
            config.size_enforcement_attempts,
        );
        let keywords =
            KeywordGenerator::new(Arc::new(NoKeywordSupplier), oracle.clone(), prompts.clone());
        let features = FeatureExtractor::new(oracle.clone(), prompts.clone());

        Self {
            config,
            oracle,
            prompts,
            associations,
            copies,
            keywords,
            features,
            url_probe: None,
        }
    }

    pub fn with_keyword_supplier(mut self, supplier: Arc<dyn KeywordSupplier>) -> Self {
        self.keywords = KeywordGenerator::new(supplier, self.oracle.clone(), self.prompts.clone());
        self
    }

    pub fn with_url_probe(mut self, probe: Arc<dyn UrlProbe>) -> Self {
        self.url_probe = Some(probe);
        self
    }

    /// Run the full generation for one set of term sources.
    ///
    /// Either every entry comes back (possibly with degraded content) or the
    /// run fails as a whole.
    pub fn run(
        &self,
        terms: &dyn TermSource,
        associative: Option<&dyn TermSource>,
        request: RunRequest,
        progress: &dyn ProgressReporter,
    ) -> Result<RunOutput, PipelineError> {
        let _run_span = info_span!("run",
            locale = %self.config.locale,
            source = terms.name(),
            must_find_relationship = request.must_find_relationship,
        )
        .entered();

        match self.run_stages(terms, associative, request, progress) {
            Ok(output) => {
                progress.report(ProgressEvent::Finished {
                    entries: output.entries.len(),
                });
                info!(
                    entries = output.entries.len(),
                    requeued = output.requeued,
                    warnings = output.warnings.len(),
                    "Run finished"
                );
                Ok(output)
            }
            Err(e) => {
                progress.report(ProgressEvent::Failed {
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    fn run_stages(
        &self,
        terms: &dyn TermSource,
        associative: Option<&dyn TermSource>,
        request: RunRequest,
        progress: &dyn ProgressReporter,
    ) -> Result<RunOutput, PipelineError> {
        if request.must_find_relationship && associative.is_none() {
            return Err(PipelineError::InvalidRequest(
                "a relationship search needs an associative term source".to_string(),
            ));
        }

        // Step 1: Read terms
        let (mut primary, associative_columns) = {
            let _step = info_span!("read_terms").entered();
            progress.report(ProgressEvent::Stage {
                stage: RunStage::ReadingTerms,
                message: format!("Reading terms from {}...", terms.name()),
            });
            let primary = terms.read_terms()?;
            let associative_columns = match associative {
                Some(source) => source.read_terms()?,
                None => TermColumns::default(),
            };
            (primary, associative_columns)
        };

        // Step 2: Check URLs
        if let (Some(mode), Some(probe)) = (self.config.url_validation, &self.url_probe) {
            if !primary.urls.is_empty() {
                let _step = info_span!("check_urls").entered();
                progress.report(ProgressEvent::Stage {
                    stage: RunStage::CheckingUrls,
                    message: format!("Checking {} URLs...", primary.urls.len()),
                });
                let checker = UrlChecker::new(probe.clone(), mode, self.config.default_url.clone());
                primary.urls = checker.check_all(std::mem::take(&mut primary.urls));
            }
        }

        // Step 3: Extract features
        if self.config.enable_feature_extraction && !primary.descriptions.is_empty() {
            let _step = info_span!("extract_features").entered();
            progress.report(ProgressEvent::Stage {
                stage: RunStage::ExtractingFeatures,
                message: "Extracting main features from descriptions...".to_string(),
            });
            primary.descriptions = self
                .features
                .extract(std::mem::take(&mut primary.descriptions));
        }

        // Step 4: Build base entries
        let entries = {
            let _step = info_span!("build_entries").entered();
            progress.report(ProgressEvent::Stage {
                stage: RunStage::BuildingEntries,
                message: "Building entries...".to_string(),
            });
            build_base_entries(&primary, &associative_columns)
        };
        info!(
            entries = entries.len(),
            terms = primary.len(),
            associative_terms = associative_columns.len(),
            "Base entries built"
        );

        // Step 5: Generate
        let mut ctx = PipelineContext::new(request, entries);
        {
            let _step = info_span!("generate").entered();
            progress.report(ProgressEvent::Stage {
                stage: RunStage::Generating,
                message: "Generating content...".to_string(),
            });
            progress.report(ProgressEvent::Started { total: ctx.total() });
            self.populate_entries(&mut ctx, progress);
        }

        // Step 6: Validate
        {
            let _step = info_span!("validate").entered();
            progress.report(ProgressEvent::Stage {
                stage: RunStage::Validating,
                message: "Validating generated content...".to_string(),
            });
            self.step_validate(&mut ctx);
        }

        Ok(RunOutput {
            entries: ctx.completed,
            requeued: ctx.requeued,
            warnings: ctx.warnings,
        })
    }

    /// Drains the queue. An entry whose content carries failure markers is
    /// cleared and pushed to the back once; on its second pass it is
    /// accepted whatever it holds.
    pub fn populate_entries(&self, ctx: &mut PipelineContext, progress: &dyn ProgressReporter) {
        let must_find_relationship = ctx.request.must_find_relationship;

        while let Some(mut entry) = ctx.queue.pop_front() {
            let _entry_span = info_span!("entry",
                term = %entry.term,
                associative_term = entry.associative_term.as_deref().unwrap_or("-"),
                second_pass = entry.has_been_cleared(),
            )
            .entered();

            self.process_entry(&mut entry, must_find_relationship);

            if entry.has_generation_errors() && entry.clear_for_requeue() {
                warn!("Generation errors, moving entry to the back of the queue");
                ctx.requeued += 1;
                progress.report(ProgressEvent::EntryRequeued {
                    term: entry.term.clone(),
                });
                ctx.queue.push_back(entry);
            } else {
                if entry.has_generation_errors() {
                    warn!("Generation errors on second pass, keeping degraded content");
                    ctx.warnings.push(PipelineWarning::DegradedEntry {
                        term: entry.term.clone(),
                        associative_term: entry.associative_term.clone(),
                    });
                }
                progress.report(ProgressEvent::EntryCompleted {
                    term: entry.term.clone(),
                });
                ctx.completed.push(entry);
            }

            if let Some(delay) = self.config.entry_delay {
                thread::sleep(delay);
            }
        }
    }

    /// Association check (when requested) followed by content generation.
    pub fn process_entry(&self, entry: &mut Entry, must_find_relationship: bool) {
        if must_find_relationship && entry.has_associative_term() {
            let _step = info_span!("association").entered();
            let association = self.associations.resolve(entry);
            entry.relationship = association.relationship;
            entry.association_reason = Some(association.reason);
        }

        if !entry.must_generate_content(must_find_relationship) {
            debug!("No relationship found, skipping content generation");
            return;
        }

        let _step = info_span!("content").entered();
        let mut kinds = vec![
            (ContentKind::Headline, self.config.num_headlines),
            (ContentKind::Description, self.config.num_descriptions),
        ];
        if self.config.generate_paths {
            kinds.push((ContentKind::Path, self.config.num_paths));
        }

        for (kind, count) in kinds {
            if count == 0 {
                continue;
            }
            let copies = self
                .copies
                .generate(entry, kind, count, must_find_relationship);
            debug!(kind = %kind, copies = ?copies, "Copies generated");
            entry.set_copies(kind, copies);
        }

        let keywords = self.keywords.keywords_for(&entry.term);
        debug!(keywords = ?keywords, "Keywords generated");
        entry.keywords = Some(keywords);
    }

    fn step_validate(&self, ctx: &mut PipelineContext) {
        for entry in &ctx.completed {
            for issue in validate_entry(entry) {
                warn!(term = %entry.term, "{}", issue);
                ctx.warnings.push(PipelineWarning::Validation {
                    term: entry.term.clone(),
                    associative_term: entry.associative_term.clone(),
                    issue,
                });
            }
        }
    }
}

/// One entry per (primary, associative) pair, primary terms outermost, or
/// one per primary term when there are no associative terms.
///
/// Terms are capitalized; descriptions keep their casing so product names
/// and model numbers survive.
pub fn build_base_entries(primary: &TermColumns, associative: &TermColumns) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(primary.len() * associative.len().max(1));

    for (i, term) in primary.terms.iter().enumerate() {
        let base = Entry::new(normalize_term(term))
            .with_term_description(TermColumns::cell(&primary.descriptions, i).map(|d| normalize_text(&d)))
            .with_sku(TermColumns::cell(&primary.skus, i))
            .with_url(TermColumns::cell(&primary.urls, i))
            .with_image_url(TermColumns::cell(&primary.image_urls, i));

        if associative.is_empty() {
            entries.push(base);
            continue;
        }

        for (j, associative_term) in associative.terms.iter().enumerate() {
            let mut entry = base.clone().with_associative_term(
                normalize_term(associative_term),
                TermColumns::cell(&associative.descriptions, j).map(|d| normalize_text(&d)),
            );
            entry.id = uuid::Uuid::new_v4();
            entries.push(entry);
        }
    }

    entries
}

/// Trims, swaps double quotes for single quotes, and capitalizes: first
/// character upper case, the rest lower case.
pub fn normalize_term(term: &str) -> String {
    let text = normalize_text(term);
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn normalize_text(text: &str) -> String {
    text.trim().replace('"', "'")
}
