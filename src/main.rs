mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod recommendation;
mod shared;

use std::process;

use adapters::outbound::console::ConsoleProgressReporter;
use adapters::outbound::filesystem::{FileReportWriter, JsonRecordStore};
use adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use adapters::outbound::network::RegistryHttpClient;
use adapters::outbound::process::{DockerCli, SyftCli, TrivyCli};
use application::dto::{ReportRequest, ScanRequest};
use application::use_cases::{RenderReportUseCase, ScanImagesUseCase};
use cli::{Cli, Commands};
use config::{load_repository_config, RepositoryConfig};
use ports::outbound::RecordStore;
use shared::error::ExitCode;
use shared::Result;

fn main() {
    // Parse command-line arguments (clap exits with code 2 on usage errors)
    let args = Cli::parse_args();

    shared::logging::init(args.verbose, args.debug);

    match run(&args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{e}");

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {err}");
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: &Cli) -> Result<ExitCode> {
    match args.command {
        Commands::Scan {
            max_tags,
            comprehensive,
            no_cleanup,
            update_existing,
        } => run_scan(args, max_tags, comprehensive, no_cleanup, update_existing),
        Commands::Report => run_report(args),
        Commands::ResetDb => run_reset(args),
    }
}

fn run_scan(
    args: &Cli,
    max_tags: i32,
    comprehensive: bool,
    no_cleanup: bool,
    update_existing: bool,
) -> Result<ExitCode> {
    let config = load_repository_config(&args.config_dir)?;

    // Create adapters (Dependency Injection)
    let use_case = ScanImagesUseCase::new(
        RegistryHttpClient::new()?,
        DockerCli::new()?,
        SyftCli::new()?,
        TrivyCli::new(comprehensive)?,
        JsonRecordStore::new(&args.database),
        ConsoleProgressReporter::new(),
    );

    let request = ScanRequest::new(config.clone(), max_tags, !no_cleanup, update_existing);
    let summary = use_case.execute(request)?;

    tracing::info!("scan complete, generating report");
    generate_reports(args, config)?;

    if summary.has_failures() {
        return Ok(ExitCode::ScanFailures);
    }
    Ok(ExitCode::Success)
}

fn run_report(args: &Cli) -> Result<ExitCode> {
    // A report without a config still works, it just loses the
    // scanned-sources section.
    let config = match load_repository_config(&args.config_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "could not load repository config");
            RepositoryConfig::default()
        }
    };

    generate_reports(args, config)?;
    Ok(ExitCode::Success)
}

fn generate_reports(args: &Cli, config: RepositoryConfig) -> Result<()> {
    let use_case = RenderReportUseCase::new(
        JsonRecordStore::new(&args.database),
        MarkdownFormatter::new(),
        JsonFormatter::new(),
        FileReportWriter::new(),
        ConsoleProgressReporter::new(),
    );

    use_case.execute(ReportRequest::new(args.output.clone(), args.top_n, config))
}

fn run_reset(args: &Cli) -> Result<ExitCode> {
    let store = JsonRecordStore::new(&args.database);
    store.reset()?;

    tracing::info!(path = %args.database.display(), "image store cleared");
    println!("Database cleared successfully");

    Ok(ExitCode::Success)
}
