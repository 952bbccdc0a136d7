use crate::harvest::domain::Gav;
use crate::shared::Result;
use std::path::PathBuf;

/// SbomStore port for persisting accepted SBOMs
pub trait SbomStore: Send + Sync {
    /// Writes `content` verbatim for `gav` and returns where it landed
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written
    fn store(&self, gav: &Gav, content: &[u8]) -> Result<PathBuf>;
}
