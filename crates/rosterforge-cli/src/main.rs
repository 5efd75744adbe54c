mod atomic;
mod error;
mod logging;
mod runs;
mod settings;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use rosterforge_core::preset::{PresetLibrary, SkillPreset};
use rosterforge_core::IdSource;
use rosterforge_engine::{EngineOptions, RosterEngine, RunRequest};
use rosterforge_llm::OpenAiClient;
use rosterforge_sink::{DualSinkWriter, RecordSink, SqliteSink, WorkbookSink};

use error::{CliError, CliResult};

#[derive(Parser, Debug)]
#[command(name = "rosterforge", version, about = "Roster synthesis engine")]
struct Cli {
    /// Settings file location.
    #[arg(long, default_value = "rosterforge.toml")]
    settings: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize a batch of companies and wrestlers.
    Run(RunArgs),
    /// Manage skill presets.
    Preset(PresetArgs),
    /// Manage the settings file.
    Settings(SettingsArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Batch request file (TOML).
    batch: PathBuf,
    /// Output directory for run artifacts.
    #[arg(long, default_value = "runs")]
    run_dir: PathBuf,
}

#[derive(Args, Debug)]
struct PresetArgs {
    #[command(subcommand)]
    command: PresetCommand,
}

#[derive(Subcommand, Debug)]
enum PresetCommand {
    /// List the presets in the library.
    List,
    /// Add a preset from a JSON file.
    Add {
        /// JSON file holding one preset.
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
struct SettingsArgs {
    #[command(subcommand)]
    command: SettingsCommand,
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// Write a default settings file if none exists.
    Init,
    /// Print the effective settings.
    Show,
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run_batch(&cli.settings, args).await,
        Command::Preset(args) => run_preset(&cli.settings, args.command),
        Command::Settings(args) => run_settings(&cli.settings, args.command),
    }
}

async fn run_batch(settings_path: &Path, args: RunArgs) -> CliResult<()> {
    let settings = settings::load_or_create(settings_path)?;
    if !settings.has_api_key() {
        return Err(CliError::InvalidConfig(
            "no generation-service API key set; edit the settings file first".to_string(),
        ));
    }

    let batch_text = std::fs::read_to_string(&args.batch)?;
    let request: RunRequest = toml::from_str(&batch_text)?;
    if request.companies.is_empty() && request.wrestlers.is_empty() {
        return Err(CliError::InvalidConfig(
            "batch file requests no companies and no wrestlers".to_string(),
        ));
    }

    let run_id = Uuid::new_v4().to_string();
    let started_at = chrono::Utc::now();
    let config = runs::RunConfig {
        run_id: run_id.clone(),
        started_at: started_at.to_rfc3339(),
        batch_path: args.batch.display().to_string(),
        uid_floor: settings.uid_floor,
        campaign_start: settings.campaign_start.to_string(),
        seed: settings.seed,
        relational_sink: settings.database_path.is_some(),
        workbook_dir: settings.workbook_dir.display().to_string(),
    };
    let run_paths = runs::start_run(&args.run_dir, &run_id, started_at, &config)?;
    logging::init_run_logging(&run_paths.logs_path)?;

    tracing::info!(event = "run_started", run_id = %run_id);

    let library = PresetLibrary::load_or_create(&settings.presets_path)?;

    let relational = match &settings.database_path {
        Some(path) => Some(Arc::new(SqliteSink::open(path).await?)),
        None => None,
    };
    let workbook = Arc::new(WorkbookSink::open(&settings.workbook_dir)?);

    // The relational store is the authoritative identifier source when
    // it is configured; otherwise the workbook's maxima are scanned.
    let id_source: Arc<dyn IdSource> = match &relational {
        Some(sink) => sink.clone(),
        None => workbook.clone(),
    };

    let mut sinks: Vec<Arc<dyn RecordSink>> = Vec::new();
    if let Some(sink) = &relational {
        sinks.push(sink.clone());
    }
    sinks.push(workbook.clone());
    let writer = DualSinkWriter::new(sinks)?;

    let generator = Arc::new(OpenAiClient::new(
        settings.api_key.clone(),
        settings.model.clone(),
        settings.base_url.clone(),
    )?);
    let options = EngineOptions {
        campaign_start: settings.campaign_start,
        uid_floor: settings.uid_floor,
        bio_prompt: settings.bio_prompt.clone(),
        seed: settings.seed,
        llm_attempts: settings.llm_attempts,
        ..EngineOptions::default()
    };
    let engine = RosterEngine::new(generator, library, options);

    let (records, mut report) = engine.run(&request, id_source).await?;

    let commit = writer
        .commit(&records.companies, &records.wrestlers, &records.contracts)
        .await;
    for failure in &commit.failures {
        report.record_warning(
            "sink_failed",
            format!("{} sink failed: {}", failure.sink, failure.message),
            None,
        );
    }

    runs::write_report(&run_paths, &report)?;
    tracing::info!(
        event = "run_finished",
        report = %run_paths.report_path.display(),
        committed = ?commit.committed,
        failed = commit.failures.len(),
    );

    println!(
        "run {run_id}: {} companies, {} wrestlers, {} contracts ({} fallbacks, {} warnings)",
        report.companies,
        report.wrestlers,
        report.contracts,
        report.fallback_count,
        report.warnings.len()
    );
    for failure in &commit.failures {
        eprintln!("warning: {} sink failed: {}", failure.sink, failure.message);
    }

    if commit.all_failed() {
        return Err(CliError::InvalidConfig(
            "every configured sink failed; nothing was persisted".to_string(),
        ));
    }
    Ok(())
}

fn run_preset(settings_path: &Path, command: PresetCommand) -> CliResult<()> {
    let settings = settings::load_or_create(settings_path)?;
    let mut library = PresetLibrary::load_or_create(&settings.presets_path)?;

    match command {
        PresetCommand::List => {
            for name in library.names() {
                println!("{name}");
            }
        }
        PresetCommand::Add { file } => {
            let content = std::fs::read_to_string(&file)?;
            let preset: SkillPreset = serde_json::from_str(&content)?;
            let name = preset.name.clone();
            library.add(preset)?;
            library.save(&settings.presets_path)?;
            println!("added preset '{name}'");
        }
    }
    Ok(())
}

fn run_settings(settings_path: &Path, command: SettingsCommand) -> CliResult<()> {
    match command {
        SettingsCommand::Init => {
            let _ = settings::load_or_create(settings_path)?;
            println!("settings at {}", settings_path.display());
        }
        SettingsCommand::Show => {
            let settings = settings::load_or_create(settings_path)?;
            let mut shown = settings.clone();
            if shown.has_api_key() {
                shown.api_key = "<set>".to_string();
            }
            print!("{}", toml::to_string_pretty(&shown)?);
        }
    }
    Ok(())
}
