use crate::harvest::domain::{ArtifactCoordinate, VersionRecord};
use crate::harvest::services::{PageRequest, SearchPage};
use crate::shared::Result;
use async_trait::async_trait;

/// ArtifactSearch port for the repository's search index
///
/// Each call is exactly one round trip returning one page; pagination is
/// driven by the caller.
#[async_trait]
pub trait ArtifactSearch: Send + Sync {
    /// Fetches one page of artifacts that publish a CycloneDX SBOM
    async fn search_artifacts(&self, page: PageRequest) -> Result<SearchPage<ArtifactCoordinate>>;

    /// Fetches one page of published versions of `artifact`
    ///
    /// Every version is returned whether or not it carries an SBOM; picking
    /// the qualifying ones is the caller's job.
    async fn search_versions(
        &self,
        artifact: &ArtifactCoordinate,
        page: PageRequest,
    ) -> Result<SearchPage<VersionRecord>>;
}
