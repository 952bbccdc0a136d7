use crate::harvest::domain::{ArtifactCoordinate, Gav};
use crate::harvest::services::{CandidateSelector, Paginator};
use crate::ports::outbound::ArtifactSearch;
use crate::shared::Result;
use tracing::info;

/// CollectCoordinatesUseCase - Both search stages of a harvest
///
/// Drives the artifact search and the per-artifact version search to
/// exhaustion through the [`Paginator`], and narrows version listings down to
/// the GAVs that actually publish an SBOM.
pub struct CollectCoordinatesUseCase<A> {
    search: A,
    paginator: Paginator,
}

impl<A: ArtifactSearch> CollectCoordinatesUseCase<A> {
    pub fn new(search: A, paginator: Paginator) -> Self {
        Self { search, paginator }
    }

    pub fn search(&self) -> &A {
        &self.search
    }

    /// Collects every artifact that publishes a CycloneDX SBOM
    ///
    /// `stop` is checked before each page; once it returns true the
    /// artifacts found so far are returned.
    ///
    /// # Errors
    /// Any failing page fails the whole collection.
    pub async fn collect_artifacts(&self, stop: impl Fn() -> bool) -> Result<Vec<ArtifactCoordinate>> {
        info!("searching for artifacts with cdx sbom");
        let artifacts = self
            .paginator
            .collect_until(
                "artifacts with a CycloneDX SBOM",
                |page| self.search.search_artifacts(page),
                stop,
            )
            .await?;
        info!(count = artifacts.len(), "artifact search complete");
        Ok(artifacts)
    }

    /// Collects every version of `artifact` tagged with a CycloneDX SBOM
    ///
    /// # Errors
    /// Any failing page fails the collection for this artifact.
    pub async fn collect_qualifying_versions(&self, artifact: &ArtifactCoordinate) -> Result<Vec<Gav>> {
        info!(artifact = %artifact, "searching for versions with cdx sbom");
        let query = format!("versions of {}", artifact);
        let records = self
            .paginator
            .collect_all(&query, |page| self.search.search_versions(artifact, page))
            .await?;

        let published = records.len();
        let gavs = CandidateSelector::qualifying_versions(records);
        info!(
            artifact = %artifact,
            published,
            with_sbom = gavs.len(),
            "version search complete"
        );
        Ok(gavs)
    }
}
