use crate::shared::Result;
use async_trait::async_trait;

/// HttpFetcher port for plain GET requests
///
/// Implementations must enforce the 2xx contract: any other status is an
/// error (`HarvestError::UnexpectedStatus`), never a body.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Fetches `url` and returns the complete response body
    ///
    /// # Errors
    /// Returns an error if the connection fails, the status is not 2xx, or
    /// the body cannot be read
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}
