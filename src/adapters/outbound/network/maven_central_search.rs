use crate::harvest::domain::{ArtifactCoordinate, Gav, VersionRecord};
use crate::harvest::services::{PageRequest, SearchPage};
use crate::ports::outbound::{ArtifactSearch, HttpFetcher};
use crate::shared::error::HarvestError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

/// Default Solr search endpoint of Maven Central
pub const DEFAULT_SEARCH_URL: &str = "https://search.maven.org/solrsearch/select";

/// Free-text query matching artifacts that publish a CycloneDX JSON file
const SBOM_QUERY: &str = "cyclonedx.json";

#[derive(Debug, Deserialize)]
struct ArtifactSearchResponse {
    response: ArtifactDocs,
}

#[derive(Debug, Deserialize)]
struct ArtifactDocs {
    #[serde(default)]
    docs: Vec<ArtifactDoc>,
}

#[derive(Debug, Deserialize)]
struct ArtifactDoc {
    g: String,
    a: String,
    #[serde(rename = "latestVersion", default)]
    latest_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VersionSearchResponse {
    response: VersionDocs,
}

#[derive(Debug, Deserialize)]
struct VersionDocs {
    #[serde(default)]
    docs: Vec<VersionDoc>,
}

#[derive(Debug, Deserialize)]
struct VersionDoc {
    g: String,
    a: String,
    v: String,
    /// Packaging: "jar", "pom", ...
    #[serde(default)]
    p: Option<String>,
    /// Available extensions: ".jar", "-sources.jar", "-cyclonedx.json", ...
    #[serde(default)]
    ec: Vec<String>,
}

/// MavenCentralSearch adapter implementing the ArtifactSearch port
///
/// Talks to the Solr-backed search API: the default core for the artifact
/// search and the `gav` core for per-artifact version listings.
///
/// Records whose coordinates fail validation are skipped with a warning but
/// still counted in the page's raw size.
pub struct MavenCentralSearch<F: HttpFetcher> {
    fetcher: F,
    base_url: String,
}

impl<F: HttpFetcher> MavenCentralSearch<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_base_url(fetcher, DEFAULT_SEARCH_URL)
    }

    pub fn with_base_url(fetcher: F, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of one page of the artifact search
    pub fn artifact_search_url(&self, page: PageRequest) -> String {
        format!(
            "{}?q={}&rows={}&start={}&wt=json",
            self.base_url,
            urlencoding::encode(SBOM_QUERY),
            page.rows,
            page.offset
        )
    }

    /// URL of one page of the version search for `artifact`
    pub fn version_search_url(&self, artifact: &ArtifactCoordinate, page: PageRequest) -> String {
        let query = format!(
            "g:{} AND a:{}",
            artifact.group_id(),
            artifact.artifact_id()
        );
        format!(
            "{}?q={}&core=gav&rows={}&start={}&wt=json",
            self.base_url,
            urlencoding::encode(&query),
            page.rows,
            page.offset
        )
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &[u8], what: &str) -> Result<T> {
        serde_json::from_slice(body).map_err(|e| {
            HarvestError::Decode {
                what: what.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl<F: HttpFetcher> ArtifactSearch for MavenCentralSearch<F> {
    async fn search_artifacts(&self, page: PageRequest) -> Result<SearchPage<ArtifactCoordinate>> {
        let url = self.artifact_search_url(page);
        let body = self.fetcher.get(&url).await?;
        let response: ArtifactSearchResponse = Self::decode(&body, "artifact search page")?;

        let raw_count = response.response.docs.len();
        let artifacts = response
            .response
            .docs
            .into_iter()
            .filter_map(|doc| {
                match ArtifactCoordinate::new(doc.g.as_str(), doc.a.as_str(), doc.latest_version) {
                    Ok(artifact) => Some(artifact),
                    Err(e) => {
                        warn!(group = %doc.g, artifact = %doc.a, error = %e, "skipping unusable artifact record");
                        None
                    }
                }
            })
            .collect();

        Ok(SearchPage::new(artifacts, raw_count))
    }

    async fn search_versions(
        &self,
        artifact: &ArtifactCoordinate,
        page: PageRequest,
    ) -> Result<SearchPage<VersionRecord>> {
        let url = self.version_search_url(artifact, page);
        let body = self.fetcher.get(&url).await?;
        let response: VersionSearchResponse = Self::decode(&body, "version search page")?;

        let raw_count = response.response.docs.len();
        let records = response
            .response
            .docs
            .into_iter()
            .filter_map(|doc| match Gav::new(doc.g.as_str(), doc.a.as_str(), doc.v.as_str()) {
                Ok(gav) => Some(VersionRecord::new(gav, doc.p, doc.ec)),
                Err(e) => {
                    warn!(
                        group = %doc.g,
                        artifact = %doc.a,
                        version = %doc.v,
                        error = %e,
                        "skipping unusable version record"
                    );
                    None
                }
            })
            .collect();

        Ok(SearchPage::new(records, raw_count))
    }
}
