//! cdx-harvest - Collects CycloneDX SBOMs published to Maven Central
//!
//! This library crawls the Maven Central search index for artifacts that
//! publish a CycloneDX JSON SBOM, downloads those SBOMs, and keeps the ones
//! with at least a minimum number of components. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`harvest`): Coordinates, SBOM documents, acceptance and version policies, pagination
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cdx_harvest::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! let fetcher = ReqwestFetcher::new(3)?;
//! let search = MavenCentralSearch::new(fetcher.clone());
//! let repository = MavenRepository::new(fetcher);
//! let store = FileSystemSbomStore::new(PathBuf::from("./sboms"));
//!
//! let use_case = HarvestSbomsUseCase::new(
//!     CollectCoordinatesUseCase::new(search, Paginator::default()),
//!     RetrieveSbomUseCase::new(repository, store),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = HarvestRequest::new(VersionPolicy::AllQualifying, 10, 5);
//! let summary = use_case.execute(request).await?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod harvest;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        validate_output_directory, FileSystemSbomStore,
    };
    pub use crate::adapters::outbound::network::{
        MavenCentralSearch, MavenRepository, ReqwestFetcher, DEFAULT_REPOSITORY_URL,
        DEFAULT_SEARCH_URL,
    };
    pub use crate::application::dto::{HarvestRequest, HarvestSummary};
    pub use crate::application::use_cases::{
        CollectCoordinatesUseCase, HarvestSbomsUseCase, RetrievalOutcome, RetrieveSbomUseCase,
    };
    pub use crate::harvest::domain::{
        ArtifactCoordinate, Gav, SbomDocument, VersionRecord, SBOM_EXTENSION_TAG,
    };
    pub use crate::harvest::policies::{AcceptanceDecision, ComponentThreshold, VersionPolicy};
    pub use crate::harvest::services::{
        CandidateSelector, PageRequest, Paginator, SearchPage, DEFAULT_MAX_PAGES,
        DEFAULT_PAGE_SIZE,
    };
    pub use crate::ports::inbound::HarvestPort;
    pub use crate::ports::outbound::{
        ArtifactSearch, HttpFetcher, ProgressReporter, SbomSource, SbomStore,
    };
    pub use crate::shared::error::{ExitCode, HarvestError};
    pub use crate::shared::Result;
}
