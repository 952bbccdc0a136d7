use crate::harvest::domain::{Gav, SbomDocument};
use crate::harvest::policies::{AcceptanceDecision, ComponentThreshold};
use crate::ports::outbound::{SbomSource, SbomStore};
use crate::shared::Result;
use anyhow::Context;
use std::path::PathBuf;

/// Result of retrieving one SBOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalOutcome {
    /// Kept and written to `path`
    Accepted {
        path: PathBuf,
        component_count: usize,
    },
    /// Discarded for having too few components; nothing was written
    Rejected { component_count: usize },
}

/// RetrieveSbomUseCase - Download, decode, filter and persist one SBOM
///
/// The stored file is the downloaded body byte for byte; the decoded
/// document is only used to count components.
pub struct RetrieveSbomUseCase<S, W> {
    source: S,
    store: W,
}

impl<S: SbomSource, W: SbomStore> RetrieveSbomUseCase<S, W> {
    pub fn new(source: S, store: W) -> Self {
        Self { source, store }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn store(&self) -> &W {
        &self.store
    }

    /// Retrieves the SBOM for `gav` and keeps it if it meets `threshold`
    ///
    /// # Errors
    /// Returns an error if the download fails, the body is not a CycloneDX
    /// JSON document, or the file cannot be written. A rejection is not an
    /// error.
    pub async fn retrieve(&self, gav: &Gav, threshold: ComponentThreshold) -> Result<RetrievalOutcome> {
        let body = self
            .source
            .download_sbom(gav)
            .await
            .with_context(|| format!("Failed to download SBOM for {}", gav))?;

        let document = SbomDocument::from_slice(&body)
            .with_context(|| format!("Failed to decode SBOM for {}", gav))?;

        match threshold.evaluate(&document) {
            AcceptanceDecision::Rejected { component_count } => {
                Ok(RetrievalOutcome::Rejected { component_count })
            }
            AcceptanceDecision::Accepted { component_count } => {
                let path = self
                    .store
                    .store(gav, &body)
                    .with_context(|| format!("Failed to store SBOM for {}", gav))?;
                Ok(RetrievalOutcome::Accepted {
                    path,
                    component_count,
                })
            }
        }
    }
}
