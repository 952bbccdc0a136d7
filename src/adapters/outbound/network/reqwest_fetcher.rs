use crate::ports::outbound::HttpFetcher;
use crate::shared::error::HarvestError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// ReqwestFetcher adapter implementing the HttpFetcher port over HTTPS
///
/// Transient failures (connection errors, 5xx, 429) are retried with
/// exponential backoff; any other non-2xx status fails immediately.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    max_retries: u32,
    base_backoff: Duration,
}

impl ReqwestFetcher {
    const TIMEOUT_SECONDS: u64 = 30;
    const BASE_BACKOFF_MS: u64 = 250;

    /// Creates a new fetcher with default timeout and user agent
    ///
    /// `max_retries` is the number of additional attempts after the first.
    pub fn new(max_retries: u32) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("cdx-harvest/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self::with_client(client, max_retries))
    }

    /// Wraps an already configured client
    pub fn with_client(client: reqwest::Client, max_retries: u32) -> Self {
        Self {
            client,
            max_retries,
            base_backoff: Duration::from_millis(Self::BASE_BACKOFF_MS),
        }
    }

    /// Overrides the first retry delay (doubles on every further attempt)
    pub fn with_base_backoff(mut self, base_backoff: Duration) -> Self {
        self.base_backoff = base_backoff;
        self
    }

    fn backoff_for(&self, attempt: u32) -> Duration {
        self.base_backoff
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }

    /// Performs a single GET without retrying
    async fn fetch_once(&self, url: &str) -> std::result::Result<Vec<u8>, HarvestError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HarvestError::Transport {
                url: url.to_string(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| HarvestError::Transport {
            url: url.to_string(),
            details: format!("failed to read response body: {}", e),
        })?;

        Ok(body.to_vec())
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => {
                    debug!(url, bytes = body.len(), "request succeeded");
                    return Ok(body);
                }
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.backoff_for(attempt);
                    warn!(
                        url,
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "transient request failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers each connection with the next status in `statuses`, repeating
    /// the last one once the script runs out. Returns the URL and a hit count.
    async fn serve_statuses(statuses: Vec<u16>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/sbom.json", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let hit = counter.fetch_add(1, Ordering::SeqCst);
                let status = statuses[hit.min(statuses.len() - 1)];

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let body = if status == 200 { "ok" } else { "" };
                let response = format!(
                    "HTTP/1.1 {} Status\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (url, hits)
    }

    fn local_fetcher(max_retries: u32) -> ReqwestFetcher {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        ReqwestFetcher::with_client(client, max_retries)
            .with_base_backoff(Duration::from_millis(1))
    }

    #[test]
    fn test_fetcher_creation() {
        let fetcher = ReqwestFetcher::new(3);
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let fetcher = ReqwestFetcher::new(3)
            .unwrap()
            .with_base_backoff(Duration::from_millis(100));
        assert_eq!(fetcher.backoff_for(1), Duration::from_millis(100));
        assert_eq!(fetcher.backoff_for(2), Duration::from_millis(200));
        assert_eq!(fetcher.backoff_for(3), Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_transient_statuses_are_retried_until_success() {
        let (url, hits) = serve_statuses(vec![503, 502, 200]).await;

        let body = local_fetcher(3).get(&url).await.unwrap();

        assert_eq!(body, b"ok");
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_too_many_requests_is_retried() {
        let (url, hits) = serve_statuses(vec![429, 200]).await;

        let body = local_fetcher(1).get(&url).await.unwrap();

        assert_eq!(body, b"ok");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_not_found_fails_without_retry() {
        let (url, hits) = serve_statuses(vec![404, 200]).await;

        let err = local_fetcher(3).get(&url).await.unwrap_err();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        match err.downcast_ref::<HarvestError>() {
            Some(HarvestError::UnexpectedStatus { status, .. }) => assert_eq!(*status, 404),
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_persistent_server_error_gives_up_after_max_retries() {
        let (url, hits) = serve_statuses(vec![500]).await;

        let err = local_fetcher(2).get(&url).await.unwrap_err();

        assert_eq!(hits.load(Ordering::SeqCst), 3);
        assert!(matches!(
            err.downcast_ref::<HarvestError>(),
            Some(HarvestError::UnexpectedStatus { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_zero_retries_makes_a_single_attempt() {
        let (url, hits) = serve_statuses(vec![503, 200]).await;

        assert!(local_fetcher(0).get(&url).await.is_err());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    // Integration tests - require network access
    // Uncomment to run against Maven Central
    // #[tokio::test]
    // async fn test_get_real_search_page() {
    //     let fetcher = ReqwestFetcher::new(1).unwrap();
    //     let body = fetcher
    //         .get("https://search.maven.org/solrsearch/select?q=cyclonedx.json&rows=1&start=0&wt=json")
    //         .await
    //         .unwrap();
    //     assert!(!body.is_empty());
    // }
}
