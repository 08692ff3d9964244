mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, Settings};
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::filter::LevelFilter;
use update_checker::adapters::outbound::console::{
    StderrProgressReporter, TracingDiagnosticsReporter,
};
use update_checker::adapters::outbound::filesystem::JsonInventoryReader;
use update_checker::application::dto::UpdateCheckRequest;
use update_checker::application::factories::{
    CatalogSourceFactory, FormatterFactory, FormatterOptions, PresenterFactory, PresenterType,
};
use update_checker::application::read_models::UpdateReportBuilder;
use update_checker::application::use_cases::CheckUpdatesUseCase;
use update_checker::ports::outbound::{OutputPresenter, ReportFormatter};
use update_checker::shared::error::ExitCode;
use update_checker::shared::Result;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr: warnings by default, `-v` for info, `-vv` for debug
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };
    let settings = Settings::resolve(&args, config)?;

    // Create adapters (Dependency Injection)
    let inventory_source = JsonInventoryReader::new(settings.inventory.clone());
    let catalog_source = CatalogSourceFactory::create(settings.catalog.clone())?;
    let progress_reporter = StderrProgressReporter::new();
    let diagnostics = TracingDiagnosticsReporter::new();

    let use_case = CheckUpdatesUseCase::new(
        inventory_source,
        catalog_source,
        progress_reporter,
        diagnostics,
    );

    let request = UpdateCheckRequest::new(settings.ignore_prefixes.clone());
    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let options = FormatterOptions {
        color: use_color(&settings),
        show_unknown: settings.show_unknown,
    };
    let report = UpdateReportBuilder::build(&response);
    let formatted_output = FormatterFactory::create(settings.format, options).format(&report)?;

    PresenterFactory::create(PresenterType::from_output(settings.output.clone()))
        .present(&formatted_output)?;

    if settings.fail_on_outdated && response.has_outdated() {
        eprintln!(
            "⚠️  {} outdated program(s) found",
            response.summary.outdated
        );
        return Ok(ExitCode::OutdatedSoftwareDetected);
    }

    Ok(ExitCode::Success)
}

/// Colour only for a terminal on stdout, honouring `--no-color` and `NO_COLOR`
fn use_color(settings: &Settings) -> bool {
    !settings.no_color
        && settings.output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}
