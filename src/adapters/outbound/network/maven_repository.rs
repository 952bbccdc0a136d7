use crate::harvest::domain::Gav;
use crate::ports::outbound::{HttpFetcher, SbomSource};
use crate::shared::Result;
use async_trait::async_trait;

/// Default base URL of the Maven Central artifact repository
pub const DEFAULT_REPOSITORY_URL: &str = "https://repo1.maven.org/maven2";

/// MavenRepository adapter implementing the SbomSource port
///
/// Resolves SBOM files by the standard Maven layout, so no search round trip
/// is needed once the GAV is known.
pub struct MavenRepository<F: HttpFetcher> {
    fetcher: F,
    base_url: String,
}

impl<F: HttpFetcher> MavenRepository<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_base_url(fetcher, DEFAULT_REPOSITORY_URL)
    }

    pub fn with_base_url(fetcher: F, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Download URL of the CycloneDX JSON published for `gav`
    pub fn sbom_url(&self, gav: &Gav) -> String {
        format!("{}/{}", self.base_url, gav.sbom_path())
    }
}

#[async_trait]
impl<F: HttpFetcher> SbomSource for MavenRepository<F> {
    async fn download_sbom(&self, gav: &Gav) -> Result<Vec<u8>> {
        let url = self.sbom_url(gav);
        self.fetcher.get(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::HarvestError;
    use std::sync::Mutex;

    struct RecordingFetcher {
        body: Option<Vec<u8>>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl HttpFetcher for RecordingFetcher {
        async fn get(&self, url: &str) -> Result<Vec<u8>> {
            self.requested.lock().unwrap().push(url.to_string());
            match &self.body {
                Some(body) => Ok(body.clone()),
                None => Err(HarvestError::UnexpectedStatus {
                    url: url.to_string(),
                    status: 404,
                }
                .into()),
            }
        }
    }

    fn gav() -> Gav {
        Gav::new("com.example.tools", "lib", "2.0.0").unwrap()
    }

    #[test]
    fn test_sbom_url_default_base() {
        let repo = MavenRepository::new(RecordingFetcher {
            body: None,
            requested: Mutex::new(Vec::new()),
        });
        assert_eq!(
            repo.sbom_url(&gav()),
            "https://repo1.maven.org/maven2/com/example/tools/lib/2.0.0/lib-2.0.0-cyclonedx.json"
        );
    }

    #[test]
    fn test_sbom_url_trims_trailing_slash() {
        let repo = MavenRepository::with_base_url(
            RecordingFetcher {
                body: None,
                requested: Mutex::new(Vec::new()),
            },
            "http://mirror.local/maven2/",
        );
        assert_eq!(
            repo.sbom_url(&gav()),
            "http://mirror.local/maven2/com/example/tools/lib/2.0.0/lib-2.0.0-cyclonedx.json"
        );
    }

    #[tokio::test]
    async fn test_download_returns_body_verbatim() {
        let body = b"{ \"components\" : [ ] }\n".to_vec();
        let repo = MavenRepository::new(RecordingFetcher {
            body: Some(body.clone()),
            requested: Mutex::new(Vec::new()),
        });

        let downloaded = repo.download_sbom(&gav()).await.unwrap();
        assert_eq!(downloaded, body);
        assert_eq!(repo.fetcher.requested.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_download_propagates_missing_file() {
        let repo = MavenRepository::new(RecordingFetcher {
            body: None,
            requested: Mutex::new(Vec::new()),
        });

        let err = repo.download_sbom(&gav()).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HarvestError>(),
            Some(HarvestError::UnexpectedStatus { status: 404, .. })
        ));
    }
}
