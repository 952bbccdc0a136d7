use crate::application::dto::{HarvestRequest, HarvestSummary};
use crate::application::use_cases::{
    CollectCoordinatesUseCase, RetrievalOutcome, RetrieveSbomUseCase,
};
use crate::harvest::domain::{ArtifactCoordinate, Gav};
use crate::harvest::policies::{ComponentThreshold, VersionPolicy};
use crate::harvest::services::CandidateSelector;
use crate::ports::inbound::HarvestPort;
use crate::ports::outbound::{ArtifactSearch, ProgressReporter, SbomSource, SbomStore};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error, info, warn};

/// Artifacts finished across all workers, out of `total`
#[derive(Clone, Copy)]
struct Progress<'a> {
    finished: &'a AtomicUsize,
    total: usize,
}

/// HarvestSbomsUseCase - Coordinates a complete crawl-and-filter run
///
/// 1. Collects every artifact that publishes an SBOM. A failure here aborts
///    the run and is returned to the caller.
/// 2. Feeds the artifacts through a bounded queue to a fixed pool of workers.
/// 3. Each worker expands its artifact to download candidates (per the
///    [`VersionPolicy`]) and retrieves them one after another.
///
/// Failures past step 1 are isolated to the artifact or coordinate they
/// happened on: they are logged, counted, and the pool moves on.
///
/// # Type Parameters
/// * `A` - ArtifactSearch implementation
/// * `S` - SbomSource implementation
/// * `W` - SbomStore implementation
/// * `PR` - ProgressReporter implementation
pub struct HarvestSbomsUseCase<A, S, W, PR> {
    collector: CollectCoordinatesUseCase<A>,
    retriever: RetrieveSbomUseCase<S, W>,
    progress_reporter: PR,
    cancelled: Arc<AtomicBool>,
}

impl<A, S, W, PR> HarvestSbomsUseCase<A, S, W, PR>
where
    A: ArtifactSearch,
    S: SbomSource,
    W: SbomStore,
    PR: ProgressReporter,
{
    /// Creates a new HarvestSbomsUseCase with injected dependencies
    pub fn new(
        collector: CollectCoordinatesUseCase<A>,
        retriever: RetrieveSbomUseCase<S, W>,
        progress_reporter: PR,
    ) -> Self {
        Self {
            collector,
            retriever,
            progress_reporter,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shares a cancellation flag with the caller (e.g. a Ctrl-C handler)
    ///
    /// Once set, the producer stops enqueuing and workers skip whatever is
    /// still queued; items already in hand are finished.
    pub fn with_cancellation(mut self, cancelled: Arc<AtomicBool>) -> Self {
        self.cancelled = cancelled;
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Executes the harvest
    ///
    /// # Errors
    /// Returns an error if the request is invalid or the artifact search
    /// fails. Everything after that is reported through the summary.
    pub async fn execute(&self, request: HarvestRequest) -> Result<HarvestSummary> {
        request.validate()?;

        self.progress_reporter
            .report("🔍 Searching for artifacts with a CycloneDX SBOM...");
        let artifacts = match self
            .collector
            .collect_artifacts(|| self.is_cancelled())
            .await
        {
            Ok(artifacts) => artifacts,
            Err(e) => {
                error!(error = %format!("{:#}", e), "failed to collect artifacts");
                return Err(e);
            }
        };

        if self.is_cancelled() {
            info!(found = artifacts.len(), "interrupted during artifact search; nothing processed");
            let summary = HarvestSummary {
                interrupted: true,
                ..Default::default()
            };
            self.progress_reporter
                .report_completion(&format!("✅ Harvest complete: {}", summary));
            return Ok(summary);
        }

        let found = artifacts.len();
        let artifacts = CandidateSelector::unique_artifacts(artifacts);
        if artifacts.len() < found {
            debug!(
                duplicates = found - artifacts.len(),
                "dropped artifacts repeated across search pages"
            );
        }
        self.progress_reporter.report(&format!(
            "✅ Found {} artifact(s); processing with {} worker(s), policy {}",
            artifacts.len(),
            request.concurrency,
            request.version_policy
        ));

        let mut summary = self.run_worker_pool(artifacts, &request).await;
        summary.interrupted = self.is_cancelled();

        if summary.has_failures() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} download(s) and {} artifact(s) failed; see the log for details",
                summary.failed_downloads, summary.failed_artifacts
            ));
        }
        self.progress_reporter
            .report_completion(&format!("✅ Harvest complete: {}", summary));

        Ok(summary)
    }

    /// Runs the producer and `request.concurrency` workers over one queue
    ///
    /// The producer closes the queue by dropping its sender once every
    /// artifact is enqueued; workers exit when the queue is closed and empty.
    /// Progress advances as workers finish artifacts, not as they are queued.
    async fn run_worker_pool(
        &self,
        artifacts: Vec<ArtifactCoordinate>,
        request: &HarvestRequest,
    ) -> HarvestSummary {
        let (sender, receiver) = mpsc::channel::<ArtifactCoordinate>(request.queue_capacity);
        let queue = Mutex::new(receiver);
        let threshold = ComponentThreshold::new(request.min_components);
        let total = artifacts.len();
        let finished = AtomicUsize::new(0);

        let producer = async move {
            for (idx, artifact) in artifacts.into_iter().enumerate() {
                if self.is_cancelled() {
                    info!(enqueued = idx, total, "interrupted; no further artifacts will be queued");
                    break;
                }
                if sender.send(artifact).await.is_err() {
                    break;
                }
            }
            // `sender` is dropped here, closing the queue.
        };

        let progress = Progress {
            finished: &finished,
            total,
        };
        let workers = (0..request.concurrency)
            .map(|worker_id| self.run_worker(worker_id, &queue, request, threshold, progress));

        let ((), tallies) = tokio::join!(producer, futures::future::join_all(workers));

        tallies
            .into_iter()
            .fold(HarvestSummary::default(), HarvestSummary::merge)
    }

    /// One worker: dequeue, expand, download, repeat until the queue is drained
    async fn run_worker(
        &self,
        worker_id: usize,
        queue: &Mutex<mpsc::Receiver<ArtifactCoordinate>>,
        request: &HarvestRequest,
        threshold: ComponentThreshold,
        progress: Progress<'_>,
    ) -> HarvestSummary {
        let mut tally = HarvestSummary::default();

        loop {
            let next = queue.lock().await.recv().await;
            let Some(artifact) = next else {
                break;
            };

            // Keep draining after cancellation so the producer is never
            // left blocked on a full queue.
            if self.is_cancelled() {
                debug!(worker_id, artifact = %artifact, "skipping queued artifact after interrupt");
                continue;
            }

            tally.artifacts += 1;
            self.process_artifact(&artifact, request, threshold, &mut tally)
                .await;

            let done = progress.finished.fetch_add(1, Ordering::Relaxed) + 1;
            self.progress_reporter
                .report_progress(done, progress.total, Some(&artifact.to_string()));
        }

        debug!(worker_id, artifacts = tally.artifacts, "worker done");
        tally
    }

    async fn process_artifact(
        &self,
        artifact: &ArtifactCoordinate,
        request: &HarvestRequest,
        threshold: ComponentThreshold,
        tally: &mut HarvestSummary,
    ) {
        let gavs = match self.expand_versions(artifact, request.version_policy).await {
            Ok(gavs) => gavs,
            Err(e) => {
                warn!(
                    artifact = %artifact,
                    error = %format!("{:#}", e),
                    "failed to collect versions; skipping artifact"
                );
                tally.failed_artifacts += 1;
                return;
            }
        };
        tally.candidates += gavs.len();

        if request.dry_run {
            for gav in gavs {
                info!(gav = %gav, "would download sbom");
                tally.planned.push(gav);
            }
            return;
        }

        for gav in gavs {
            self.download(&gav, threshold, tally).await;
        }
    }

    /// Turns an artifact into the GAVs to download under `policy`
    async fn expand_versions(
        &self,
        artifact: &ArtifactCoordinate,
        policy: VersionPolicy,
    ) -> Result<Vec<Gav>> {
        match policy {
            VersionPolicy::AllQualifying => self.collector.collect_qualifying_versions(artifact).await,
            VersionPolicy::LatestOnly => match artifact.latest_gav()? {
                Some(gav) => Ok(vec![gav]),
                None => {
                    warn!(artifact = %artifact, "search reported no latest version; nothing to download");
                    Ok(Vec::new())
                }
            },
        }
    }

    async fn download(&self, gav: &Gav, threshold: ComponentThreshold, tally: &mut HarvestSummary) {
        info!(gav = %gav, "downloading sbom");
        match self.retriever.retrieve(gav, threshold).await {
            Ok(RetrievalOutcome::Accepted {
                path,
                component_count,
            }) => {
                info!(gav = %gav, component_count, path = %path.display(), "stored sbom");
                tally.accepted += 1;
            }
            Ok(RetrievalOutcome::Rejected { component_count }) => {
                info!(
                    gav = %gav,
                    component_count,
                    min_components = threshold.minimum(),
                    "discarding sbom because it has too few components"
                );
                tally.rejected += 1;
            }
            Err(e) => {
                warn!(gav = %gav, error = %format!("{:#}", e), "failed to download sbom");
                tally.failed_downloads += 1;
            }
        }
    }
}

#[async_trait(?Send)]
impl<A, S, W, PR> HarvestPort for HarvestSbomsUseCase<A, S, W, PR>
where
    A: ArtifactSearch,
    S: SbomSource,
    W: SbomStore,
    PR: ProgressReporter,
{
    async fn harvest(&self, request: HarvestRequest) -> Result<HarvestSummary> {
        self.execute(request).await
    }
}
