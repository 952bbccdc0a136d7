use crate::harvest::domain::Gav;
use crate::ports::outbound::SbomStore;
use crate::shared::error::HarvestError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Validates the directory accepted SBOMs are written into
///
/// The directory must already exist, must be a directory, and must not be a
/// symbolic link. It is never created on the user's behalf.
pub fn validate_output_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(HarvestError::InvalidOutputDirectory {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = fs::symlink_metadata(path).map_err(|e| HarvestError::InvalidOutputDirectory {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(HarvestError::InvalidOutputDirectory {
            path: path.to_path_buf(),
            reason: "Security: Output path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(HarvestError::InvalidOutputDirectory {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

/// FileSystemSbomStore adapter implementing the SbomStore port
///
/// Writes one `<group>_<artifact>_<version>.cdx.json` file per accepted SBOM.
/// File names derive from unique coordinates, so concurrent workers never
/// write the same path within one run.
pub struct FileSystemSbomStore {
    output_dir: PathBuf,
}

impl FileSystemSbomStore {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the SBOM for `gav` is (or would be) stored
    pub fn path_for(&self, gav: &Gav) -> PathBuf {
        self.output_dir.join(gav.output_file_name())
    }
}

impl SbomStore for FileSystemSbomStore {
    fn store(&self, gav: &Gav, content: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(gav);

        // Overwriting a regular file from an earlier run is fine; following a
        // planted symlink is not.
        if fs::symlink_metadata(&path).is_ok() {
            validate_not_symlink(&path, "write")?;
        }

        fs::write(&path, content).map_err(|e| HarvestError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(path)
    }
}
