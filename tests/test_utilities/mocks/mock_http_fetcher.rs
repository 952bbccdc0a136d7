use async_trait::async_trait;
use cdx_harvest::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock HttpFetcher serving canned bodies by exact URL
///
/// Clones share the same responses and request log, so one instance can back
/// both the search and the repository adapter. Unknown URLs answer 404.
#[derive(Default, Clone)]
pub struct MockHttpFetcher {
    responses: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockHttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), body.into());
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requested
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.as_str() == url)
            .count()
    }
}

#[async_trait]
impl HttpFetcher for MockHttpFetcher {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.requested.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| {
                HarvestError::UnexpectedStatus {
                    url: url.to_string(),
                    status: 404,
                }
                .into()
            })
    }
}
