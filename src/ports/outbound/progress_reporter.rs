/// ProgressReporter port for reporting progress during a harvest
///
/// This port abstracts user-facing progress output (e.g., to stderr);
/// detailed per-item diagnostics go through `tracing` instead.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the artifact queue
    ///
    /// # Arguments
    /// * `current` - Number of artifacts handed to workers so far
    /// * `total` - Total number of artifacts to process
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
