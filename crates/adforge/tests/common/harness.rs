//! Scripted model and file harness for running the pipeline without a network.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use adforge::oracle::{ModelError, TextModel};
use adforge::pipeline::{NoopProgress, Pipeline, RunOutput, RunRequest};
use adforge::sources::{FileTermSource, TermSource};

use super::builders::ConfigBuilder;

/// Marker that only appears in association prompts.
pub const ASSOCIATION_PROMPT: &str = "\"relationship\": true/false";
/// Marker that only appears in headline/description prompts.
pub const GENERATION_PROMPT: &str = "text ads of less than";
/// Marker that only appears in path prompts.
pub const PATHS_PROMPT: &str = "generate a url path split into";
/// Marker that only appears in keyword prompts.
pub const KEYWORDS_PROMPT: &str = "list of up to 10 keywords";
/// Marker that only appears in copy size enforcement prompts.
pub const SIZE_PROMPT: &str = "Make the following text ad shorter";
/// Marker that only appears in feature extraction prompts.
pub const FEATURES_PROMPT: &str = "Generate a short list of the main features";

type Handler = Box<dyn Fn(&str) -> Result<String, ModelError> + Send + Sync>;

/// Answers each prompt with the handler of the first rule whose needle it
/// contains. Every prompt is recorded.
pub struct ScriptedModel {
    rules: Vec<(String, Handler)>,
    fallback: Handler,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    /// Unmatched prompts get text that parses as nothing.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: Box::new(|_| Ok("I am not sure what you mean".to_string())),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Writes unique ads, keywords and paths; relates every pair.
    pub fn cooperative() -> Self {
        Self::new()
            .on(ASSOCIATION_PROMPT, |_| {
                Ok(r#"{"relationship": true, "reason": "Both are bought together"}"#.to_string())
            })
            .on(GENERATION_PROMPT, ad_writer())
            .on(PATHS_PROMPT, path_writer())
            .reply(KEYWORDS_PROMPT, r#"["running shoes", "sneakers", "trainers"]"#)
    }

    pub fn on<F>(mut self, needle: &str, handler: F) -> Self
    where
        F: Fn(&str) -> Result<String, ModelError> + Send + Sync + 'static,
    {
        self.rules.push((needle.to_string(), Box::new(handler)));
        self
    }

    pub fn reply(self, needle: &str, text: &str) -> Self {
        let text = text.to_string();
        self.on(needle, move |_| Ok(text.clone()))
    }

    /// Rules are matched in order, so this puts `needle` ahead of existing rules.
    pub fn reply_first(mut self, needle: &str, text: &str) -> Self {
        let text = text.to_string();
        self.rules
            .insert(0, (needle.to_string(), Box::new(move |_| Ok(text.clone()))));
        self
    }

    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) -> Result<String, ModelError> + Send + Sync + 'static,
    {
        self.fallback = Box::new(handler);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of recorded prompts containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.prompts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.contains(needle))
            .count()
    }
}

impl Default for ScriptedModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TextModel for ScriptedModel {
    fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let handler = self
            .rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, handler)| handler)
            .unwrap_or(&self.fallback);
        handler(prompt)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Reads the number right after `marker` in `prompt`.
pub fn number_after(prompt: &str, marker: &str) -> Option<usize> {
    let start = prompt.find(marker)? + marker.len();
    let digits: String = prompt[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Answers "Generate {n} text ads" with `n` distinct short ads.
pub fn ad_writer() -> impl Fn(&str) -> Result<String, ModelError> + Send + Sync + 'static {
    let counter = AtomicUsize::new(0);
    move |prompt| {
        let n = number_after(prompt, "Generate ").unwrap_or(1);
        let ads: Vec<String> = (0..n)
            .map(|_| format!("Great deal number {}", counter.fetch_add(1, Ordering::SeqCst)))
            .collect();
        Ok(serde_json::to_string(&ads).unwrap())
    }
}

/// Answers "split into {n} parts" with `n` distinct path parts.
pub fn path_writer() -> impl Fn(&str) -> Result<String, ModelError> + Send + Sync + 'static {
    let counter = AtomicUsize::new(0);
    move |prompt| {
        let n = number_after(prompt, "split into ").unwrap_or(1);
        let parts: Vec<String> = (0..n)
            .map(|_| format!("part-{}", counter.fetch_add(1, Ordering::SeqCst)))
            .collect();
        Ok(serde_json::to_string(&parts).unwrap())
    }
}

/// Builds a pipeline around a scripted model and keeps a handle on the model.
pub fn scripted_pipeline(builder: ConfigBuilder, model: ScriptedModel) -> (Pipeline, Arc<ScriptedModel>) {
    let model = Arc::new(model);
    let pipeline = Pipeline::with_model(Arc::new(builder.pipeline_config()), model.clone());
    (pipeline, model)
}

/// Temp directory holding config, term files and output.
pub struct TestHarness {
    temp_dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `content` to `name` inside the temp directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn write_config(&self, builder: &ConfigBuilder) -> PathBuf {
        self.write("config.json", &builder.to_json())
    }

    /// Runs `pipeline` over term files in the temp directory.
    pub fn run(
        &self,
        pipeline: &Pipeline,
        terms_file: &str,
        associative_file: Option<&str>,
        request: RunRequest,
    ) -> RunOutput {
        let terms = FileTermSource::new(self.temp_dir.path().join(terms_file));
        let associative = associative_file.map(|f| FileTermSource::new(self.temp_dir.path().join(f)));
        pipeline
            .run(
                &terms,
                associative.as_ref().map(|s| s as &dyn TermSource),
                request,
                &NoopProgress,
            )
            .expect("run should succeed")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
