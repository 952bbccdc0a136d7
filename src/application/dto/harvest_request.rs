use crate::harvest::policies::VersionPolicy;
use crate::shared::error::HarvestError;
use crate::shared::Result;

/// HarvestRequest - Parameters of one harvest run
#[derive(Debug, Clone)]
pub struct HarvestRequest {
    /// Which versions of each artifact to download
    pub version_policy: VersionPolicy,
    /// SBOMs declaring fewer components than this are discarded
    pub min_components: usize,
    /// Number of workers pulling artifacts from the queue
    pub concurrency: usize,
    /// Capacity of the artifact queue between producer and workers
    pub queue_capacity: usize,
    /// Run both search stages but download nothing
    pub dry_run: bool,
}

impl HarvestRequest {
    pub const DEFAULT_MIN_COMPONENTS: usize = 10;
    pub const DEFAULT_CONCURRENCY: usize = 5;
    pub const DEFAULT_QUEUE_CAPACITY: usize = 1;

    pub fn new(version_policy: VersionPolicy, min_components: usize, concurrency: usize) -> Self {
        Self {
            version_policy,
            min_components,
            concurrency,
            queue_capacity: Self::DEFAULT_QUEUE_CAPACITY,
            dry_run: false,
        }
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Rejects requests that could never make progress
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(HarvestError::Validation {
                message: "concurrency must be at least 1".to_string(),
            }
            .into());
        }
        if self.queue_capacity == 0 {
            return Err(HarvestError::Validation {
                message: "queue capacity must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for HarvestRequest {
    fn default() -> Self {
        Self::new(
            VersionPolicy::default(),
            Self::DEFAULT_MIN_COMPONENTS,
            Self::DEFAULT_CONCURRENCY,
        )
    }
}
