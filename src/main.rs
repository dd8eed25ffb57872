//! TimelineSleuth: normalises macOS forensic artifacts into a timeline.
//!
//! Entry point: parses the command line, initialises structured logging,
//! runs the artifact reader on a background thread and writes every event
//! it produces to the selected sink.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::Layer as _;

use timelinesleuth::core::artifact_reader::{spawn_reader_thread, ReaderMessage};
use timelinesleuth::core::diagnostics::DiagnosticKind;
use timelinesleuth::core::emitter::EventSink;
use timelinesleuth::core::registry::PluginRegistry;
use timelinesleuth::export::csv_export::CsvSink;
use timelinesleuth::export::json_export::JsonLinesSink;
use timelinesleuth::export::validate_output_path;
use timelinesleuth::plugins::register_builtin;
use timelinesleuth::util::config::{OutputFormat, RunConfig};
use timelinesleuth::util::constants;
use timelinesleuth::util::error::{Result, TimelineSleuthError};
use timelinesleuth::util::time::format_duration;

#[derive(Debug, Parser)]
#[command(name = "timelinesleuth", version, about)]
struct Cli {
    /// Artifact files to process (KnowledgeC databases, Apple account plists).
    #[arg(required_unless_present = "list_plugins")]
    artifacts: Vec<PathBuf>,

    /// Output encoding.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the timeline to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON run configuration; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only run these plugins (comma separated).
    #[arg(long, value_delimiter = ',')]
    plugins: Vec<String>,

    /// Also write a debug-level log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the registered plugin names and exit.
    #[arg(long)]
    list_plugins: bool,
}

impl Cli {
    /// Resolve the effective configuration: file values, then flags.
    fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if !self.plugins.is_empty() {
            config.plugins = self.plugins.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.output.is_some() {
            config.output = self.output.clone();
        }
        if self.log_file.is_some() {
            config.log_file = self.log_file.clone();
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.run_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    init_logging(config.log_file.as_deref());
    tracing::info!("{} v{} starting", constants::APP_NAME, constants::APP_VERSION);

    let mut registry = PluginRegistry::new();
    register_builtin(&mut registry);
    if let Err(e) = registry.restrict_to(&config.plugins) {
        tracing::error!("{e}");
        return ExitCode::from(2);
    }

    if cli.list_plugins {
        for name in registry.plugin_names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    match run(cli.artifacts, registry, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Process every artifact and stream the timeline into the output sink.
///
/// Returns `Ok(false)` when at least one artifact failed fatally.
fn run(artifacts: Vec<PathBuf>, registry: PluginRegistry, config: &RunConfig) -> Result<bool> {
    let mut sink = open_sink(config)?;

    let cancel = Arc::new(AtomicBool::new(false));
    let (sender, receiver) = crossbeam_channel::bounded(constants::CHANNEL_BOUND);
    let handle = spawn_reader_thread(artifacts, Arc::new(registry), sender, Arc::clone(&cancel))?;

    let mut failed = 0usize;
    let mut diagnostics: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut sink_error = None;

    'drain: for message in receiver.iter() {
        match message {
            ReaderMessage::EventBatch(batch) => {
                for event in batch {
                    if let Err(e) = sink.accept(event) {
                        sink_error = Some(e);
                        break 'drain;
                    }
                }
            }
            ReaderMessage::Diagnostic(diagnostic) => {
                *diagnostics.entry(kind_name(diagnostic.kind)).or_default() += 1;
            }
            ReaderMessage::ArtifactDone(report) => {
                tracing::info!(
                    "{}: {:?} via {} ({} events, {} records, {} skipped)",
                    report.artifact,
                    report.state,
                    report.plugin.unwrap_or("no plugin"),
                    report.events,
                    report.records,
                    report.skipped_records
                );
            }
            ReaderMessage::Progress { count, artifact } => {
                tracing::debug!("{count} events after {artifact}");
            }
            ReaderMessage::Error { artifact, error } => {
                tracing::error!("{artifact}: {error}");
                failed += 1;
            }
            ReaderMessage::Complete { total, elapsed } => {
                tracing::info!("{} events in {}", total, format_duration(elapsed));
            }
        }
    }

    if sink_error.is_some() {
        cancel.store(true, Ordering::Relaxed);
    }
    // Dropping the receiver unblocks a reader waiting on a full channel.
    drop(receiver);
    if handle.join().is_err() {
        tracing::error!("Artifact reader thread panicked");
        failed += 1;
    }

    if let Some(e) = sink_error {
        return Err(e);
    }
    sink.finish()?;

    for (kind, count) in &diagnostics {
        tracing::info!("{count} {kind} diagnostic(s)");
    }
    Ok(failed == 0)
}

fn kind_name(kind: DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::UnsupportedSource => "unsupported source",
        DiagnosticKind::UnrecognizedRecord => "unrecognized record",
        DiagnosticKind::InvalidTimestamp => "invalid timestamp",
        DiagnosticKind::MalformedRecord => "malformed record",
    }
}

/// Build the output sink selected by `config`.
fn open_sink(config: &RunConfig) -> Result<Box<dyn EventSink>> {
    let writer: Box<dyn Write> = match &config.output {
        Some(path) => {
            validate_output_path(path)?;
            let file = std::fs::File::create(path).map_err(|e| {
                TimelineSleuthError::Export(format!("Failed to create {}: {e}", path.display()))
            })?;
            tracing::info!("Writing {:?} timeline to {}", config.format, path.display());
            Box::new(std::io::BufWriter::new(file))
        }
        None => Box::new(std::io::BufWriter::new(std::io::stdout().lock())),
    };

    Ok(match config.format {
        OutputFormat::Jsonl => Box::new(JsonLinesSink::new(writer)),
        OutputFormat::Csv => Box::new(CsvSink::new(writer)?),
    })
}

/// Rotate `path` to `<path>.old` once it exceeds the size limit.
fn rotate_log_file(path: &Path) {
    if let Ok(meta) = std::fs::metadata(path) {
        if meta.len() > constants::MAX_LOG_FILE_SIZE {
            let mut backup = path.as_os_str().to_owned();
            backup.push(".old");
            let _ = std::fs::rename(path, backup);
        }
    }
}

/// Initialise the dual-layer tracing subscriber.
///
/// - **stderr layer**: filtered by `RUST_LOG` env var (default: `info`).
/// - **file layer** (if `log_file` is `Some`): always writes at `debug`
///   level for post-mortem diagnostics.
fn init_logging(log_file: Option<&Path>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(constants::DEFAULT_LOG_FILTER));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(path) = log_file {
        rotate_log_file(path);
        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file))
                    .with_filter(tracing_subscriber::EnvFilter::new("debug"));

                tracing_subscriber::registry()
                    .with(stderr_layer.with_filter(env_filter))
                    .with(file_layer)
                    .init();
                return;
            }
            Err(e) => eprintln!("Cannot open log file {}: {e}", path.display()),
        }
    }

    // Fallback: stderr only
    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}
