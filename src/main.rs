mod cli;

use cdx_harvest::config::{discover_config, load_config_from_path, Settings};
use cdx_harvest::logging::init_tracing;
use cdx_harvest::prelude::*;
use cli::Args;
use std::path::Path;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    let cancelled = Arc::new(AtomicBool::new(false));
    install_interrupt_handler(cancelled.clone());

    match run(args, cancelled).await {
        Ok(summary) if summary.interrupted => process::exit(ExitCode::Interrupted.as_i32()),
        Ok(_) => {}
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// First Ctrl-C drains the run gracefully; a second one exits immediately.
fn install_interrupt_handler(cancelled: Arc<AtomicBool>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        eprintln!("\n⚠️  Interrupted: finishing in-flight downloads. Press Ctrl-C again to abort.");
        cancelled.store(true, Ordering::Relaxed);

        if tokio::signal::ctrl_c().await.is_ok() {
            process::exit(ExitCode::Interrupted.as_i32());
        }
    });
}

async fn run(args: Args, cancelled: Arc<AtomicBool>) -> Result<HarvestSummary> {
    // Resolve settings: CLI > config file > defaults
    let file_config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(args.overrides(), file_config)?;

    init_tracing(&settings.log_level, settings.log_format)?;

    // Validate output directory before any network traffic
    validate_output_directory(&settings.output)?;

    info!(
        output = %settings.output.display(),
        min_components = settings.min_components,
        concurrency = settings.concurrency,
        version_policy = %settings.version_policy,
        dry_run = args.dry_run,
        "starting harvest"
    );

    // Create adapters (Dependency Injection)
    let fetcher = ReqwestFetcher::new(settings.max_retries)?;
    let search = MavenCentralSearch::with_base_url(fetcher.clone(), settings.search_url.clone());
    let repository = MavenRepository::with_base_url(fetcher, settings.repository_url.clone());
    let store = FileSystemSbomStore::new(settings.output.clone());
    let paginator = Paginator::new(settings.page_size, settings.max_pages)?;

    // Create use case with injected dependencies
    let use_case = HarvestSbomsUseCase::new(
        CollectCoordinatesUseCase::new(search, paginator),
        RetrieveSbomUseCase::new(repository, store),
        StderrProgressReporter::new(),
    )
    .with_cancellation(cancelled);

    let request = HarvestRequest::new(
        settings.version_policy,
        settings.min_components,
        settings.concurrency,
    )
    .with_queue_capacity(settings.queue_capacity)
    .with_dry_run(args.dry_run);

    let harvest: &dyn HarvestPort = &use_case;
    let mut summary = harvest.harvest(request).await?;

    if args.dry_run {
        summary.planned.sort_by_key(|gav| gav.to_string());
        for gav in &summary.planned {
            println!("{}", gav);
        }
    }

    Ok(summary)
}
