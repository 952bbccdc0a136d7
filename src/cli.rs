use clap::Parser;
use std::path::PathBuf;

use cdx_harvest::config::ConfigFile;
use cdx_harvest::logging::LogFormat;
use cdx_harvest::prelude::VersionPolicy;

/// Crawl Maven Central for artifacts publishing CycloneDX SBOMs
///
/// Values not given on the command line come from the config file
/// (`--config`, or `cdx-harvest.config.yml` in the working directory), then
/// from the built-in defaults shown below.
#[derive(Parser, Debug)]
#[command(name = "cdx-harvest")]
#[command(version)]
#[command(
    about = "Crawl Maven Central for artifacts publishing CycloneDX SBOMs and keep the substantial ones",
    long_about = None
)]
pub struct Args {
    /// Minimum number of components an SBOM needs to be kept [default: 10]
    #[arg(short, long, value_name = "N")]
    pub min_components: Option<usize>,

    /// Existing directory the accepted SBOMs are written into [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Number of parallel workers [default: 5]
    #[arg(short, long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Which versions to download: latest-only or all-versions [default: all-versions]
    #[arg(long, value_name = "POLICY")]
    pub version_policy: Option<VersionPolicy>,

    /// Rows requested per search page [default: 150]
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Upper bound on pages fetched for one search [default: 10000]
    #[arg(long, value_name = "N")]
    pub max_pages: Option<usize>,

    /// Capacity of the artifact queue feeding the workers [default: 1]
    #[arg(long, value_name = "N")]
    pub queue_capacity: Option<usize>,

    /// Retries for transient network failures [default: 3]
    #[arg(long, value_name = "N")]
    pub max_retries: Option<u32>,

    /// Search endpoint
    #[arg(long, value_name = "URL")]
    pub search_url: Option<String>,

    /// Repository root SBOMs are downloaded from
    #[arg(long, value_name = "URL")]
    pub repository_url: Option<String>,

    /// Path to a YAML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. info or cdx_harvest=debug (RUST_LOG takes precedence) [default: info]
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Log output format: pretty or json [default: pretty]
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Run both searches and list what would be downloaded, without downloading
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Settings given on the command line, in config-file shape
    pub fn overrides(&self) -> ConfigFile {
        ConfigFile {
            min_components: self.min_components,
            concurrency: self.concurrency,
            output: self.output.clone(),
            version_policy: self.version_policy.map(|p| p.to_string()),
            page_size: self.page_size,
            max_pages: self.max_pages,
            queue_capacity: self.queue_capacity,
            max_retries: self.max_retries,
            search_url: self.search_url.clone(),
            repository_url: self.repository_url.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.map(|f| f.to_string()),
            ..Default::default()
        }
    }
}
