use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, Registry};

use adforge::entry::Entry;
use adforge::error::TaskError;
use adforge::export::{EntrySink, JsonFileSink};
use adforge::oracle::gemini::resolve_api_key;
use adforge::oracle::GeminiModel;
use adforge::pipeline::{
    BarProgress, LogProgress, Pipeline, PipelineConfig, ProgressReporter, RunRequest,
};
use adforge::sources::{FileTermSource, TermSource};
use adforge::worker::{TaskRunner, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "adforge",
    version,
    about = "Generate search ad headlines, descriptions, keywords and paths for a list of terms"
)]
struct Cli {
    #[arg(short, long, env = "ADFORGE_CONFIG", help = "Configuration file (JSON or YAML)")]
    config: PathBuf,

    #[arg(
        short,
        long,
        help = "Primary terms: .json/.yaml rows or a text file with one term per line"
    )]
    terms: PathBuf,

    #[arg(short, long, help = "Associative terms, same formats as --terms")]
    associative_terms: Option<PathBuf>,

    #[arg(
        long,
        help = "Only generate content for term pairs the model finds related"
    )]
    find_relationship: bool,

    #[arg(short, long, default_value = "entries.json", help = "Output JSON file")]
    output: PathBuf,

    #[arg(long, default_value_t = 0, help = "Read at most this many primary terms (0 = all)")]
    limit: usize,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[arg(long, help = "Log progress instead of drawing a progress bar")]
    no_progress: bool,

    #[arg(long, help = "Skip entries with an empty headline, description or keyword list")]
    only_complete: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    info!("Starting adforge v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(format: LogFormat) {
    let env_filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Text => {
            let subscriber = Registry::default()
                .with(env_filter())
                .with(fmt::layer().with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        LogFormat::Json => {
            let subscriber = Registry::default()
                .with(env_filter())
                .with(fmt::layer().json().with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber).ok();
        }
    }

    // Route `log` records from library code into tracing
    tracing_log::LogTracer::init().ok();
}

fn run(cli: Cli) -> adforge::Result<()> {
    let config = adforge::load_config(&cli.config)?;
    info!(
        "Loaded config for '{}' ({}, {})",
        config.advertiser, config.language, config.country
    );

    let api_key = resolve_api_key(&config.model)?;
    let model = GeminiModel::new(&config.model, api_key)?;
    let require_paths = config.generate_paths;

    let pipeline_config = Arc::new(PipelineConfig::from_config(&config)?);
    let pipeline = Pipeline::from_config(pipeline_config, Arc::new(model))?;

    let terms = FileTermSource::new(&cli.terms).with_limit(cli.limit);
    let associative = cli.associative_terms.as_ref().map(FileTermSource::new);
    let request = RunRequest {
        must_find_relationship: cli.find_relationship,
    };

    let progress: Box<dyn ProgressReporter> =
        if cli.no_progress || !std::io::stderr().is_terminal() {
            Box::new(LogProgress)
        } else {
            Box::new(BarProgress::new())
        };

    let sink = JsonFileSink::new(&cli.output);
    let only_complete = cli.only_complete;

    let runner = TaskRunner::new();
    let task_id = runner.start(move || {
        let output = pipeline.run(
            &terms,
            associative.as_ref().map(|s| s as &dyn TermSource),
            request,
            progress.as_ref(),
        )?;

        let entries: Vec<Entry> = if only_complete {
            output
                .entries
                .into_iter()
                .filter(|entry| entry.must_be_exported(require_paths))
                .collect()
        } else {
            output.entries
        };

        sink.export(&entries)?;
        Ok(entries.len())
    })?;
    runner.wait_all();

    let record = runner.status(task_id)?;
    match record.status {
        TaskStatus::Completed { entries } => {
            info!(
                "Wrote {} entries to {}",
                entries,
                cli.output.display()
            );
            Ok(())
        }
        TaskStatus::Failed { error } => Err(TaskError::Failed { id: task_id, error }.into()),
        TaskStatus::Running => Err(TaskError::AlreadyRunning(task_id).into()),
    }
}
