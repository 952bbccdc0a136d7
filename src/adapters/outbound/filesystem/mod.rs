/// Filesystem adapters for persisting accepted SBOMs
mod sbom_writer;

pub use sbom_writer::{validate_output_directory, FileSystemSbomStore};
