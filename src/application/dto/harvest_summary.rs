use crate::harvest::domain::Gav;
use std::fmt;

/// HarvestSummary - What one run (or one worker) did
///
/// Each worker keeps its own summary; the coordinator merges them after the
/// pool has drained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    /// Artifacts taken off the queue
    pub artifacts: usize,
    /// GAVs selected for download
    pub candidates: usize,
    /// SBOMs written to the output directory
    pub accepted: usize,
    /// SBOMs discarded for having too few components
    pub rejected: usize,
    /// Artifacts whose version expansion failed
    pub failed_artifacts: usize,
    /// Downloads that failed in transport, decoding or writing
    pub failed_downloads: usize,
    /// Coordinates that would have been downloaded (dry runs only)
    pub planned: Vec<Gav>,
    /// The run was stopped early by the user
    pub interrupted: bool,
}

impl HarvestSummary {
    /// Combines two partial summaries
    pub fn merge(mut self, other: HarvestSummary) -> Self {
        self.artifacts += other.artifacts;
        self.candidates += other.candidates;
        self.accepted += other.accepted;
        self.rejected += other.rejected;
        self.failed_artifacts += other.failed_artifacts;
        self.failed_downloads += other.failed_downloads;
        self.planned.extend(other.planned);
        self.interrupted |= other.interrupted;
        self
    }

    pub fn has_failures(&self) -> bool {
        self.failed_artifacts > 0 || self.failed_downloads > 0
    }
}

impl fmt::Display for HarvestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} artifact(s), {} candidate SBOM(s): {} kept, {} discarded, {} download(s) failed, {} artifact(s) failed",
            self.artifacts,
            self.candidates,
            self.accepted,
            self.rejected,
            self.failed_downloads,
            self.failed_artifacts
        )?;
        if self.interrupted {
            write!(f, " (interrupted)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_adds_counts() {
        let a = HarvestSummary {
            artifacts: 2,
            candidates: 3,
            accepted: 1,
            rejected: 1,
            failed_downloads: 1,
            ..Default::default()
        };
        let b = HarvestSummary {
            artifacts: 1,
            candidates: 1,
            failed_artifacts: 1,
            planned: vec![Gav::new("g", "a", "1").unwrap()],
            ..Default::default()
        };

        let merged = a.merge(b);
        assert_eq!(merged.artifacts, 3);
        assert_eq!(merged.candidates, 4);
        assert_eq!(merged.accepted, 1);
        assert_eq!(merged.rejected, 1);
        assert_eq!(merged.failed_downloads, 1);
        assert_eq!(merged.failed_artifacts, 1);
        assert_eq!(merged.planned.len(), 1);
        assert!(merged.has_failures());
    }

    #[test]
    fn test_display_marks_interrupted_runs() {
        let summary = HarvestSummary {
            interrupted: true,
            ..Default::default()
        };
        assert!(summary.to_string().ends_with("(interrupted)"));
        assert!(!HarvestSummary::default().to_string().contains("interrupted"));
    }
}
