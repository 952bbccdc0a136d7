use crate::application::dto::{HarvestRequest, HarvestSummary};
use crate::shared::Result;
use async_trait::async_trait;

/// HarvestPort - Inbound port for the crawl-and-filter run
///
/// This is the application's public entry point: the CLI builds a
/// `HarvestRequest` and hands it over here.
#[async_trait(?Send)]
pub trait HarvestPort {
    /// Runs a complete harvest
    ///
    /// # Errors
    /// Returns an error only for failures that abort the whole run: an
    /// invalid request or a failed artifact search. Failures of individual
    /// artifacts and downloads are counted in the summary instead.
    async fn harvest(&self, request: HarvestRequest) -> Result<HarvestSummary>;
}
