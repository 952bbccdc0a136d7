use crate::harvest::domain::Gav;
use crate::shared::Result;
use async_trait::async_trait;

/// SbomSource port for downloading the raw SBOM of one release
#[async_trait]
pub trait SbomSource: Send + Sync {
    /// Downloads the CycloneDX JSON file published for `gav`, byte for byte
    async fn download_sbom(&self, gav: &Gav) -> Result<Vec<u8>>;
}
