/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (search index, repository, file system, console).
pub mod artifact_search;
pub mod http_fetcher;
pub mod progress_reporter;
pub mod sbom_source;
pub mod sbom_store;

pub use artifact_search::ArtifactSearch;
pub use http_fetcher::HttpFetcher;
pub use progress_reporter::ProgressReporter;
pub use sbom_source::SbomSource;
pub use sbom_store::SbomStore;
